use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::data::SensorimotorPath;
use crate::error::{InfoError, Result};
use crate::estimators::approaches::ksg::{DistanceMetric, KsgMutualInformation};
use crate::estimators::traits::GlobalValue;

/// Default neighbour count for the kNN approximation.
pub const DEFAULT_K: usize = 6;

/// Approximation methods for mutual information between observation and action streams.
///
/// Only [`MiApproximation::KNearestNeighbour`] is implemented; the others are named so that
/// configurations can refer to them and fail with `NotImplemented`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MiApproximation {
    /// Kraskov, Stögbauer & Grassberger (2004), "Estimating mutual information".
    #[default]
    KNearestNeighbour,
    /// Suzuki et al. (2009), maximum likelihood estimation of the density ratio.
    DensityRatio,
    /// Adaptive histograms.
    AdaptiveBinning,
    /// Kernel density estimation, usually with a Gaussian kernel.
    KernelDensityEstimation,
    /// Normal distribution plus higher-order correction terms.
    EdgeworthExpansion,
}

impl fmt::Display for MiApproximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MiApproximation::KNearestNeighbour => "knn",
            MiApproximation::DensityRatio => "density_ratio",
            MiApproximation::AdaptiveBinning => "adaptive_binning",
            MiApproximation::KernelDensityEstimation => "kernel_density",
            MiApproximation::EdgeworthExpansion => "edgeworth",
        };
        write!(f, "{name}")
    }
}

impl FromStr for MiApproximation {
    type Err = InfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "knn" | "ksg" | "k_nearest_neighbour" | "k_nearest_neighbor" => Ok(MiApproximation::KNearestNeighbour),
            "density_ratio" => Ok(MiApproximation::DensityRatio),
            "adaptive_binning" => Ok(MiApproximation::AdaptiveBinning),
            "kernel_density" | "kde" => Ok(MiApproximation::KernelDensityEstimation),
            "edgeworth" => Ok(MiApproximation::EdgeworthExpansion),
            other => Err(InfoError::UnsupportedConfiguration(format!(
                "unknown mutual information approximation '{other}'"
            ))),
        }
    }
}

/// Mutual information between the observations and the actions of a sensorimotor path.
///
/// Holds configuration only; every call to [`MutualInformation::calculate`] recomputes from
/// scratch and borrows the path just for that call.
///
/// ```rust
/// use sensorimotor_info::data::{SensationActionPair, SensorimotorPath};
/// use sensorimotor_info::estimators::mutual_information::MutualInformation;
///
/// let mut path = SensorimotorPath::new();
/// for t in 0..50 {
///     let x = (t as f64 * 0.37).sin();
///     path.push(SensationActionPair::new(vec![x], vec![x * x], t)).unwrap();
/// }
/// let mi = MutualInformation::new().with_k(3).calculate(&path).unwrap();
/// assert!(mi.is_finite());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutualInformation {
    approximation: MiApproximation,
    k: usize,
    metric: DistanceMetric,
}

impl Default for MutualInformation {
    fn default() -> Self {
        Self {
            approximation: MiApproximation::KNearestNeighbour,
            k: DEFAULT_K,
            metric: DistanceMetric::Euclidean,
        }
    }
}

impl MutualInformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Neighbour count for the kNN approximation.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_approximation(mut self, approximation: MiApproximation) -> Self {
        self.approximation = approximation;
        self
    }

    /// Subspace metric used for the observation and action distances.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn approximation(&self) -> MiApproximation {
        self.approximation
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Creates a kNN estimator for `path`, exposing local values as well as the global one.
    pub fn new_ksg(path: &SensorimotorPath, k: usize) -> Result<KsgMutualInformation> {
        KsgMutualInformation::new(path, k)
    }

    /// Estimate I(observation; action) over `path`, in nats.
    pub fn calculate(&self, path: &SensorimotorPath) -> Result<f64> {
        match self.approximation {
            MiApproximation::KNearestNeighbour => {
                let estimator = KsgMutualInformation::new_with_metric(path, self.k, self.metric)?;
                let mi = estimator.global_value();
                debug!(k = self.k, n = path.len(), mi, "mutual information");
                Ok(mi)
            }
            other => Err(InfoError::NotImplemented(format!(
                "mutual information approximation '{other}'"
            ))),
        }
    }
}
