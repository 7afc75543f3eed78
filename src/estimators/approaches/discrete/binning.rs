use ndarray::{Array1, Array2};
use tracing::warn;

use crate::data::{SensationActionPair, SensorimotorPath};
use crate::error::{InfoError, Result};

/// Default number of bins used when none is configured.
pub const DEFAULT_NOF_BINS: usize = 10;

/// Fixed-width discretization of values normalized to [0, 1].
///
/// With 4 bins the intervals are [0, 0.25), [0.25, 0.5), [0.5, 0.75), [0.75, 1.0].
/// Bins are half-open on the right except the last one, which also holds 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinConverter {
    nof_bins: usize,
    bin_width: f64,
}

/// Per-dimension binned distributions of a path.
///
/// Row `d` of `sensor` (`motor`) is the probability vector of observation (action)
/// component `d`; shapes are `(dimension, nof_bins)`.
#[derive(Debug, Clone, PartialEq)]
pub struct JointRandomVariables {
    pub sensor: Array2<f64>,
    pub motor: Array2<f64>,
}

impl Default for BinConverter {
    fn default() -> Self {
        Self {
            nof_bins: DEFAULT_NOF_BINS,
            bin_width: 1.0 / DEFAULT_NOF_BINS as f64,
        }
    }
}

impl BinConverter {
    pub fn new(nof_bins: usize) -> Result<Self> {
        if nof_bins == 0 {
            return Err(InfoError::InvalidParameter("number of bins must be positive".to_string()));
        }
        Ok(Self { nof_bins, bin_width: 1.0 / nof_bins as f64 })
    }

    pub fn nof_bins(&self) -> usize {
        self.nof_bins
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Bin index of a value in [0, 1]. Values outside the range are clamped into the
    /// first or last bin; NaN is rejected.
    pub fn get_bin(&self, value: f64) -> Result<usize> {
        if value.is_nan() {
            return Err(InfoError::InvalidParameter("cannot bin NaN".to_string()));
        }
        let last = self.nof_bins - 1;
        if value == 1.0 {
            return Ok(last);
        }
        if value < 0.0 {
            warn!(value, "value below 0 clamped into first bin");
            return Ok(0);
        }
        if value > 1.0 {
            warn!(value, "value above 1 clamped into last bin");
            return Ok(last);
        }
        // Rounding can push values just below 1.0 onto nof_bins.
        Ok(((value / self.bin_width).floor() as usize).min(last))
    }

    /// Bin frequencies of `values`.
    pub fn counts(&self, values: &[f64]) -> Result<Vec<usize>> {
        let mut counts = vec![0usize; self.nof_bins];
        for &v in values {
            counts[self.get_bin(v)?] += 1;
        }
        Ok(counts)
    }

    /// Empirical probability of every bin: count / number of values.
    pub fn probabilities(&self, values: &[f64]) -> Result<Array1<f64>> {
        if values.is_empty() {
            return Err(InfoError::InvalidParameter("cannot bin an empty series".to_string()));
        }
        let n_f = values.len() as f64;
        let counts = self.counts(values)?;
        Ok(counts.into_iter().map(|c| c as f64 / n_f).collect())
    }

    /// Discretize every observation and action component of `path` independently.
    ///
    /// S[t=0]={0.1, 0.2}, S[t=1]={0.1, 0.8}, S[t=2]={0.1, 0.8} with two bins gives the
    /// sensor rows [1, 0] and [1/3, 2/3].
    pub fn convert(&self, path: &SensorimotorPath) -> Result<JointRandomVariables> {
        if path.is_empty() {
            return Err(InfoError::InvalidParameter("cannot bin an empty path".to_string()));
        }
        let sensor = self.per_dimension(path, path.observation_dim(), |p, d| p.observation[d])?;
        let motor = self.per_dimension(path, path.action_dim(), |p, d| p.action[d])?;
        Ok(JointRandomVariables { sensor, motor })
    }

    fn per_dimension<F>(&self, path: &SensorimotorPath, dims: usize, component: F) -> Result<Array2<f64>>
    where
        F: Fn(&SensationActionPair, usize) -> f64,
    {
        let n_f = path.len() as f64;
        let mut out = Array2::<f64>::zeros((dims, self.nof_bins));
        for d in 0..dims {
            for pair in path {
                out[(d, self.get_bin(component(pair, d))?)] += 1.0;
            }
        }
        out.mapv_inplace(|c| c / n_f);
        Ok(out)
    }
}
