// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::array;

use sensorimotor_info::data::{SensationActionPair, SensorimotorPath};
use sensorimotor_info::error::InfoError;

#[test]
fn push_accepts_increasing_timestamps() {
    let mut path = SensorimotorPath::new();
    path.push(SensationActionPair::new(vec![0.1, 0.2], vec![1.0], 3)).unwrap();
    path.push(SensationActionPair::new(vec![0.3, 0.4], vec![2.0], 7)).unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.observation_dim(), 2);
    assert_eq!(path.action_dim(), 1);
    let ts: Vec<i64> = path.iter().map(|p| p.t).collect();
    assert_eq!(ts, vec![3, 7]);
}

#[test]
fn push_rejects_repeated_or_decreasing_timestamps() {
    let mut path = SensorimotorPath::new();
    path.push(SensationActionPair::new(vec![0.0], vec![0.0], 5)).unwrap();

    let err = path.push(SensationActionPair::new(vec![0.0], vec![0.0], 5)).unwrap_err();
    assert!(matches!(err, InfoError::NonMonotonicTimestamp { previous: 5, got: 5 }));

    let err = path.push(SensationActionPair::new(vec![0.0], vec![0.0], 4)).unwrap_err();
    assert!(matches!(err, InfoError::NonMonotonicTimestamp { previous: 5, got: 4 }));
    assert_eq!(path.len(), 1);
}

#[test]
fn push_rejects_dimension_changes() {
    let mut path = SensorimotorPath::new();
    path.push(SensationActionPair::new(vec![0.0, 1.0], vec![0.0], 1)).unwrap();

    let err = path.push(SensationActionPair::new(vec![0.0], vec![0.0], 2)).unwrap_err();
    assert!(matches!(err, InfoError::DimensionMismatch { expected: 2, got: 1 }));

    let err = path.push(SensationActionPair::new(vec![0.0, 1.0], vec![0.0, 1.0], 2)).unwrap_err();
    assert!(matches!(err, InfoError::DimensionMismatch { expected: 1, got: 2 }));
}

#[test]
fn push_rejects_non_finite_components() {
    let mut path = SensorimotorPath::new();
    path.push(SensationActionPair::new(vec![0.1], vec![0.2], 1)).unwrap();

    let err = path.push(SensationActionPair::new(vec![f64::NAN], vec![0.2], 2)).unwrap_err();
    assert!(matches!(err, InfoError::InvalidParameter(_)));
    let err = path.push(SensationActionPair::new(vec![0.1], vec![f64::INFINITY], 2)).unwrap_err();
    assert!(matches!(err, InfoError::InvalidParameter(_)));
    assert_eq!(path.len(), 1);

    let obs = array![[0.1], [f64::NAN], [0.3]];
    let act = array![[1.0], [2.0], [3.0]];
    let err = SensorimotorPath::from_arrays(obs.view(), act.view()).unwrap_err();
    assert!(matches!(err, InfoError::InvalidParameter(_)));
}

#[test]
fn from_arrays_assigns_timestamps_and_columns() {
    let obs = array![[0.1, 0.2], [0.3, 0.4], [0.5, 0.6]];
    let act = array![[1.0], [2.0], [3.0]];
    let path = SensorimotorPath::from_arrays(obs.view(), act.view()).unwrap();

    assert_eq!(path.len(), 3);
    let ts: Vec<i64> = path.iter().map(|p| p.t).collect();
    assert_eq!(ts, vec![1, 2, 3]);

    let col = path.observation_column(1).unwrap();
    assert_abs_diff_eq!(col[0], 0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(col[2], 0.6, epsilon = 1e-12);
    let act_col = path.action_column(0).unwrap();
    assert_abs_diff_eq!(act_col[1], 2.0, epsilon = 1e-12);

    assert!(matches!(path.observation_column(2), Err(InfoError::InvalidParameter(_))));
    assert!(matches!(path.action_column(1), Err(InfoError::InvalidParameter(_))));
}

#[test]
fn from_arrays_rejects_unequal_lengths() {
    let obs = array![[0.1], [0.3]];
    let act = array![[1.0], [2.0], [3.0]];
    let err = SensorimotorPath::from_arrays(obs.view(), act.view()).unwrap_err();
    assert!(matches!(err, InfoError::DimensionMismatch { expected: 2, got: 3 }));
}

#[test]
fn container_is_random_access_in_path_order() {
    let obs = array![[0.1], [0.3], [0.5]];
    let act = array![[1.0], [2.0], [3.0]];
    let path = SensorimotorPath::from_arrays(obs.view(), act.view()).unwrap();
    let container = path.container();

    assert_eq!(container.len(), 3);
    assert!(!container.is_empty());
    assert_eq!(container[1].t, 2);
    assert_abs_diff_eq!(container.get(2).unwrap().observation[0], 0.5, epsilon = 1e-12);
    assert!(container.get(3).is_none());
    let ts: Vec<i64> = container.iter().map(|p| p.t).collect();
    assert_eq!(ts, vec![1, 2, 3]);
}

#[test]
fn empty_path_has_zero_dimensions() {
    let path = SensorimotorPath::new();
    assert!(path.is_empty());
    assert_eq!(path.observation_dim(), 0);
    assert_eq!(path.action_dim(), 0);
    assert!(path.container().is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn deserialization_enforces_path_invariants() {
    let pair = |obs: Vec<f64>, t: i64| SensationActionPair::new(obs, vec![0.5], t);

    let path = SensorimotorPath::from_pairs(vec![pair(vec![0.1], 1), pair(vec![0.2], 2)]).unwrap();
    let json = serde_json::to_string(&path).unwrap();
    let back: SensorimotorPath = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);

    let repeated = serde_json::to_string(&vec![pair(vec![0.1], 5), pair(vec![0.2], 5)]).unwrap();
    assert!(serde_json::from_str::<SensorimotorPath>(&repeated).is_err());

    let mixed = serde_json::to_string(&vec![pair(vec![0.1], 1), pair(vec![0.2, 0.3], 2)]).unwrap();
    assert!(serde_json::from_str::<SensorimotorPath>(&mixed).is_err());
}
