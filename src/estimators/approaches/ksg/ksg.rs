use ndarray::Array1;
use tracing::debug;

use crate::data::SensorimotorPath;
use crate::error::{InfoError, Result};
use crate::estimators::traits::{GlobalValue, LocalValues, MutualInformationEstimator, OptionalLocalValues};
use crate::estimators::utils::ln_base;
use crate::estimators::utils::special::digamma;
use super::distance::DistanceMetric;
use super::neighbours::{kth_nearest_distance, neighbour_count, NeighbourCount};

/// Kraskov–Stögbauer–Grassberger mutual information between the observation and the
/// action stream of a sensorimotor path (algorithm 1, max-norm joint space).
///
/// I(X;Y) = ψ(k) − ⟨ψ(n_x + 1) + ψ(n_y + 1)⟩ + ψ(N)
///
/// where, for each sample, ε is the max-norm distance to its k-th joint-space neighbour
/// and n_x, n_y count the samples strictly within ε in observation and action space.
///
/// All neighbour statistics are gathered in [`KsgMutualInformation::new`] from a snapshot
/// that lives only for that call; the estimator keeps no reference to the path.
/// The result is in nats unless another base is set. Small or weakly dependent samples
/// can give slightly negative values; that is estimator bias, not an error.
#[derive(Debug, Clone)]
pub struct KsgMutualInformation {
    counts: Vec<NeighbourCount>,
    k: usize,
    metric: DistanceMetric,
    ln_base: f64,
}

impl KsgMutualInformation {
    /// Gather neighbour statistics for every sample with the Euclidean subspace metric.
    pub fn new(path: &SensorimotorPath, k: usize) -> Result<Self> {
        Self::new_with_metric(path, k, DistanceMetric::Euclidean)
    }

    pub fn new_with_metric(path: &SensorimotorPath, k: usize, metric: DistanceMetric) -> Result<Self> {
        if k == 0 {
            return Err(InfoError::InvalidParameter("k must be >= 1".to_string()));
        }
        let n = path.len();
        if n <= k {
            return Err(InfoError::InsufficientSamples { samples: n, k });
        }

        let container = path.container();
        let mut counts = Vec::with_capacity(n);
        for query in container.iter() {
            let dist = kth_nearest_distance(&container, query, k, metric)?;
            counts.push(neighbour_count(&container, query, dist, metric)?);
        }
        Ok(Self { counts, k, metric, ln_base: 1.0 })
    }

    /// Set logarithm base (default e). Fails unless the base is positive, finite and != 1.
    pub fn with_base(mut self, base: f64) -> Result<Self> {
        self.ln_base = ln_base(base)?;
        Ok(self)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n(&self) -> usize {
        self.counts.len()
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Per-sample marginal neighbour counts, in path order.
    pub fn neighbour_counts(&self) -> &[NeighbourCount] {
        &self.counts
    }

    #[inline]
    fn psi_marginals(count: &NeighbourCount) -> f64 {
        digamma(count.n_x as f64 + 1.0) + digamma(count.n_y as f64 + 1.0)
    }
}

impl GlobalValue for KsgMutualInformation {
    fn global_value(&self) -> f64 {
        let n_f = self.counts.len() as f64;
        let psi_k = digamma(self.k as f64);
        let psi_n = digamma(n_f);
        let avg_marginals = self.counts.iter().map(Self::psi_marginals).sum::<f64>() / n_f;
        debug!(
            psi_k,
            avg_marginals,
            psi_n,
            "ksg: ψ(k) − <ψ(n_x+1) + ψ(n_y+1)> + ψ(N)"
        );
        (psi_k - avg_marginals + psi_n) / self.ln_base
    }
}

impl LocalValues for KsgMutualInformation {
    /// i_t = ψ(k) + ψ(N) − ψ(n_x(t) + 1) − ψ(n_y(t) + 1); the mean is the global value.
    fn local_values(&self) -> Array1<f64> {
        let constant = digamma(self.k as f64) + digamma(self.counts.len() as f64);
        self.counts
            .iter()
            .map(|c| (constant - Self::psi_marginals(c)) / self.ln_base)
            .collect()
    }
}

impl OptionalLocalValues for KsgMutualInformation {
    fn supports_local(&self) -> bool {
        true
    }

    fn local_values_opt(&self) -> std::result::Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}

impl MutualInformationEstimator for KsgMutualInformation {}
