use approx::assert_abs_diff_eq;

use sensorimotor_info::error::InfoError;
use sensorimotor_info::estimators::approaches::ksg::{DistanceMetric, KsgMutualInformation, NeighbourCount};
use sensorimotor_info::estimators::mutual_information::{MiApproximation, MutualInformation, DEFAULT_K};
use sensorimotor_info::estimators::{GlobalValue, LocalValues, OptionalLocalValues};

use crate::test_helpers::{four_point_path, path_from_columns, uniform_path, SeedableRng, StdRng};

#[test]
fn four_point_path_k1_is_seven_twelfths() {
    // counts (1,0),(1,1),(0,1),(1,0):
    // psi(1) - (5/4 - 2 gamma) + psi(4) = 11/6 - 5/4
    let path = four_point_path();
    let est = KsgMutualInformation::new(&path, 1).unwrap();
    let expected_counts = [(1, 0), (1, 1), (0, 1), (1, 0)];
    for (got, (n_x, n_y)) in est.neighbour_counts().iter().zip(expected_counts) {
        assert_eq!(*got, NeighbourCount { n_x, n_y });
    }
    assert_abs_diff_eq!(est.global_value(), 7.0 / 12.0, epsilon = 1e-7);
}

#[test]
fn four_point_path_k2_is_five_sixths() {
    // every sample has n_x = n_y = 1: psi(2) - 2 psi(2) + psi(4) = 5/6
    let path = four_point_path();
    let mi = MutualInformation::new().with_k(2).calculate(&path).unwrap();
    assert_abs_diff_eq!(mi, 5.0 / 6.0, epsilon = 1e-7);
}

#[test]
fn local_values_average_to_global_value() {
    let path = four_point_path();
    let est = KsgMutualInformation::new(&path, 1).unwrap();
    let locals = est.local_values();
    assert_eq!(locals.len(), 4);
    assert_abs_diff_eq!(locals[0], 5.0 / 6.0, epsilon = 1e-7);
    assert_abs_diff_eq!(locals[1], -1.0 / 6.0, epsilon = 1e-7);
    assert_abs_diff_eq!(est.global_from_local(), est.global_value(), epsilon = 1e-12);

    assert!(est.supports_local());
    assert_eq!(est.local_values_opt().unwrap(), locals);

    let mut rng = StdRng::seed_from_u64(3);
    let path = uniform_path(150, &mut rng);
    let est = KsgMutualInformation::new(&path, 4).unwrap();
    assert_abs_diff_eq!(est.global_from_local(), est.global_value(), epsilon = 1e-10);
}

#[test]
fn base_rescales_the_estimate() {
    let path = four_point_path();
    let nats = KsgMutualInformation::new(&path, 1).unwrap().global_value();
    let bits = KsgMutualInformation::new(&path, 1).unwrap().with_base(2.0).unwrap().global_value();
    assert_abs_diff_eq!(bits, nats / 2f64.ln(), epsilon = 1e-12);
}

#[test]
fn degenerate_base_is_rejected() {
    let path = four_point_path();
    for base in [1.0, 0.0, -2.0, f64::NAN, f64::INFINITY] {
        let err = KsgMutualInformation::new(&path, 1).unwrap().with_base(base).unwrap_err();
        assert!(matches!(err, InfoError::InvalidParameter(_)), "base = {base}");
    }
}

#[test]
fn facade_matches_direct_estimator() {
    let mut rng = StdRng::seed_from_u64(21);
    let path = uniform_path(120, &mut rng);

    let direct = MutualInformation::new_ksg(&path, 3).unwrap();
    assert_eq!(direct.k(), 3);
    assert_eq!(direct.n(), 120);
    assert_eq!(direct.metric(), DistanceMetric::Euclidean);
    let facade = MutualInformation::new().with_k(3).calculate(&path).unwrap();
    assert_eq!(direct.global_value().to_bits(), facade.to_bits());

    let dot = MutualInformation::new().with_k(3).with_metric(DistanceMetric::DotProduct);
    assert_eq!(dot.metric(), DistanceMetric::DotProduct);
    let mi = dot.calculate(&path).unwrap();
    assert!(mi.is_finite());
    let direct_dot = KsgMutualInformation::new_with_metric(&path, 3, DistanceMetric::DotProduct).unwrap();
    assert_eq!(direct_dot.metric(), DistanceMetric::DotProduct);
    assert_eq!(direct_dot.global_value().to_bits(), mi.to_bits());
}

#[test]
fn nan_samples_never_reach_the_estimator() {
    let obs = [0.1, f64::NAN, 0.3, 0.4, 0.5];
    let pairs = obs
        .iter()
        .enumerate()
        .map(|(i, &o)| sensorimotor_info::data::SensationActionPair::new(vec![o], vec![o], i as i64 + 1))
        .collect();
    let err = sensorimotor_info::data::SensorimotorPath::from_pairs(pairs).unwrap_err();
    assert!(matches!(err, InfoError::InvalidParameter(_)));
}

#[test]
fn too_few_samples_fail_before_computing() {
    let path = path_from_columns(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6], &[0.6, 0.5, 0.4, 0.3, 0.2, 0.1]);
    // default k = 6 needs at least 7 samples
    assert_eq!(DEFAULT_K, 6);
    let err = MutualInformation::new().calculate(&path).unwrap_err();
    assert!(matches!(err, InfoError::InsufficientSamples { samples: 6, k: 6 }));
    assert!(MutualInformation::new().with_k(5).calculate(&path).is_ok());

    let err = KsgMutualInformation::new(&path, 0).unwrap_err();
    assert!(matches!(err, InfoError::InvalidParameter(_)));
}

#[test]
fn other_approximations_are_not_implemented() {
    let mut rng = StdRng::seed_from_u64(11);
    let path = uniform_path(50, &mut rng);
    for approx in [
        MiApproximation::DensityRatio,
        MiApproximation::AdaptiveBinning,
        MiApproximation::KernelDensityEstimation,
        MiApproximation::EdgeworthExpansion,
    ] {
        let err = MutualInformation::new().with_approximation(approx).calculate(&path).unwrap_err();
        assert!(matches!(err, InfoError::NotImplemented(_)));
    }
}

#[test]
fn approximation_parses_from_name() {
    assert_eq!("knn".parse::<MiApproximation>().unwrap(), MiApproximation::KNearestNeighbour);
    assert_eq!("KSG".parse::<MiApproximation>().unwrap(), MiApproximation::KNearestNeighbour);
    assert_eq!("edgeworth".parse::<MiApproximation>().unwrap(), MiApproximation::EdgeworthExpansion);
    assert!(matches!(
        "mine".parse::<MiApproximation>(),
        Err(InfoError::UnsupportedConfiguration(_))
    ));
    let est = MutualInformation::default();
    assert_eq!(est.approximation(), MiApproximation::KNearestNeighbour);
    assert_eq!(est.k(), 6);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(99);
    let path = uniform_path(300, &mut rng);
    let mi = MutualInformation::new().with_k(4);
    let first = mi.calculate(&path).unwrap();
    for _ in 0..3 {
        assert_eq!(mi.calculate(&path).unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn identical_streams_have_large_information() {
    // Observation and action are the same signal, so n_x, n_y <= k - 1 and
    // I >= psi(N) - psi(k).
    let signal: Vec<f64> = (1..=500).map(|t| (t as f64 / 100.0).sin()).collect();
    let path = path_from_columns(&signal, &signal);
    let mi = MutualInformation::new().calculate(&path).unwrap();
    assert!(mi > 3.0, "mi = {mi}");
}

#[test]
fn multidimensional_samples_are_supported() {
    let mut rng = StdRng::seed_from_u64(5);
    let base = uniform_path(200, &mut rng);
    // Observation = (x, y), action = y: strongly dependent
    let pairs: Vec<_> = base
        .iter()
        .map(|p| {
            sensorimotor_info::data::SensationActionPair::new(
                vec![p.observation[0], p.action[0]],
                vec![p.action[0]],
                p.t,
            )
        })
        .collect();
    let path = sensorimotor_info::data::SensorimotorPath::from_pairs(pairs).unwrap();
    let mi = MutualInformation::new().with_k(4).calculate(&path).unwrap();
    assert!(mi > 1.0, "mi = {mi}");
}
