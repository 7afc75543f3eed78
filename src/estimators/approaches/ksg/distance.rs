// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::data::SensationActionPair;
use crate::error::{InfoError, Result};

/// Distance between two points of the same subspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceMetric {
    /// sqrt(Σ (a_i − b_i)²)
    #[default]
    Euclidean,
    /// Σ a_i · b_i. A similarity rather than a distance; kept for prototype matching.
    DotProduct,
}

impl DistanceMetric {
    pub fn distance(&self, p0: &[f64], p1: &[f64]) -> Result<f64> {
        match self {
            DistanceMetric::Euclidean => euclidean(p0, p1),
            DistanceMetric::DotProduct => dot_product(p0, p1),
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Euclidean => write!(f, "euclidean"),
            DistanceMetric::DotProduct => write!(f, "dot_product"),
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = InfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" => Ok(DistanceMetric::Euclidean),
            "dot_product" | "dotproduct" | "dot" => Ok(DistanceMetric::DotProduct),
            other => Err(InfoError::UnsupportedConfiguration(format!(
                "unknown distance metric '{other}'"
            ))),
        }
    }
}

#[inline]
fn check_dims(p0: &[f64], p1: &[f64]) -> Result<()> {
    if p0.len() != p1.len() {
        return Err(InfoError::DimensionMismatch { expected: p0.len(), got: p1.len() });
    }
    Ok(())
}

/// Euclidean distance between two points of equal dimension.
pub fn euclidean(p0: &[f64], p1: &[f64]) -> Result<f64> {
    check_dims(p0, p1)?;
    let sum_sq: f64 = p0.iter().zip(p1).map(|(a, b)| (a - b) * (a - b)).sum();
    Ok(sum_sq.sqrt())
}

/// Inner product of two points of equal dimension.
pub fn dot_product(p0: &[f64], p1: &[f64]) -> Result<f64> {
    check_dims(p0, p1)?;
    Ok(p0.iter().zip(p1).map(|(a, b)| a * b).sum())
}

/// Joint-space distance between two samples: the larger of the observation distance and
/// the action distance.
///
/// Two samples with the same timestamp are the same sample; their distance is +∞ so a
/// sample never becomes its own neighbour.
pub fn max_norm(x: &SensationActionPair, y: &SensationActionPair, metric: DistanceMetric) -> Result<f64> {
    if x.t == y.t {
        return Ok(f64::INFINITY);
    }
    let d_obs = metric.distance(&x.observation, &y.observation)?;
    let d_act = metric.distance(&x.action, &y.action)?;
    Ok(d_obs.max(d_act))
}
