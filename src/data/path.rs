// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView2};

use crate::data::container::SensorimotorContainer;
use crate::error::{InfoError, Result};

/// A sensor or actuator sample. The dimension is chosen by the caller and must agree
/// between any two points that are compared.
pub type Point = Vec<f64>;

/// One trajectory sample: what was observed and what was done at time `t`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensationActionPair {
    pub observation: Point,
    pub action: Point,
    pub t: i64,
}

impl SensationActionPair {
    pub fn new(observation: Point, action: Point, t: i64) -> Self {
        Self { observation, action, t }
    }
}

/// Temporally ordered sequence of observation/action samples.
///
/// Insertion order is temporal order. The path enforces strictly increasing timestamps,
/// a fixed observation and action dimension across all samples, and finite components,
/// so estimators can rely on them without re-checking.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<SensationActionPair>", into = "Vec<SensationActionPair>")
)]
pub struct SensorimotorPath {
    pairs: Vec<SensationActionPair>,
}

impl SensorimotorPath {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { pairs: Vec::with_capacity(capacity) }
    }

    /// Build a path from already materialized samples, validating every one of them.
    pub fn from_pairs(pairs: Vec<SensationActionPair>) -> Result<Self> {
        let mut path = Self::with_capacity(pairs.len());
        for pair in pairs {
            path.push(pair)?;
        }
        Ok(path)
    }

    /// Build a path from two 2D arrays (rows = time steps, cols = dimensions).
    ///
    /// Timestamps are assigned as `1..=N`.
    pub fn from_arrays(observations: ArrayView2<'_, f64>, actions: ArrayView2<'_, f64>) -> Result<Self> {
        if observations.nrows() != actions.nrows() {
            return Err(InfoError::DimensionMismatch {
                expected: observations.nrows(),
                got: actions.nrows(),
            });
        }
        let mut path = Self::with_capacity(observations.nrows());
        for (i, (obs, act)) in observations.outer_iter().zip(actions.outer_iter()).enumerate() {
            path.push(SensationActionPair::new(obs.to_vec(), act.to_vec(), i as i64 + 1))?;
        }
        Ok(path)
    }

    /// Append a sample. Fails if its timestamp does not follow the last one, if its
    /// dimensions differ from the samples already in the path, or if any component is
    /// NaN or infinite.
    pub fn push(&mut self, pair: SensationActionPair) -> Result<()> {
        if let Some(v) = pair.observation.iter().chain(&pair.action).find(|v| !v.is_finite()) {
            return Err(InfoError::InvalidParameter(format!(
                "non-finite component {v} at t = {}",
                pair.t
            )));
        }
        if let Some(last) = self.pairs.last() {
            if pair.t <= last.t {
                return Err(InfoError::NonMonotonicTimestamp { previous: last.t, got: pair.t });
            }
            if pair.observation.len() != last.observation.len() {
                return Err(InfoError::DimensionMismatch {
                    expected: last.observation.len(),
                    got: pair.observation.len(),
                });
            }
            if pair.action.len() != last.action.len() {
                return Err(InfoError::DimensionMismatch {
                    expected: last.action.len(),
                    got: pair.action.len(),
                });
            }
        }
        self.pairs.push(pair);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SensationActionPair> {
        self.pairs.iter()
    }

    pub fn as_slice(&self) -> &[SensationActionPair] {
        &self.pairs
    }

    /// Random-access snapshot borrowed for the duration of one analysis call.
    pub fn container(&self) -> SensorimotorContainer<'_> {
        SensorimotorContainer::snapshot(self)
    }

    /// Observation dimension, 0 for an empty path.
    pub fn observation_dim(&self) -> usize {
        self.pairs.first().map_or(0, |p| p.observation.len())
    }

    /// Action dimension, 0 for an empty path.
    pub fn action_dim(&self) -> usize {
        self.pairs.first().map_or(0, |p| p.action.len())
    }

    /// Values of observation component `d` over time.
    pub fn observation_column(&self, d: usize) -> Result<Array1<f64>> {
        if d >= self.observation_dim() {
            return Err(InfoError::InvalidParameter(format!(
                "observation dimension {d} out of range (dimension is {})",
                self.observation_dim()
            )));
        }
        Ok(self.pairs.iter().map(|p| p.observation[d]).collect())
    }

    /// Values of action component `d` over time.
    pub fn action_column(&self, d: usize) -> Result<Array1<f64>> {
        if d >= self.action_dim() {
            return Err(InfoError::InvalidParameter(format!(
                "action dimension {d} out of range (dimension is {})",
                self.action_dim()
            )));
        }
        Ok(self.pairs.iter().map(|p| p.action[d]).collect())
    }
}

impl TryFrom<Vec<SensationActionPair>> for SensorimotorPath {
    type Error = InfoError;

    fn try_from(pairs: Vec<SensationActionPair>) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}

impl From<SensorimotorPath> for Vec<SensationActionPair> {
    fn from(path: SensorimotorPath) -> Self {
        path.pairs
    }
}

impl<'a> IntoIterator for &'a SensorimotorPath {
    type Item = &'a SensationActionPair;
    type IntoIter = std::slice::Iter<'a, SensationActionPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
