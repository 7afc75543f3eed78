// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::trace;

use crate::data::{SensationActionPair, SensorimotorContainer};
use crate::error::{InfoError, Result};
use super::distance::{max_norm, DistanceMetric};

/// A candidate sample ranked by its joint-space distance to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// Position of the candidate in the path.
    pub index: usize,
    /// Max-norm distance to the query.
    pub distance: f64,
}

/// Number of samples strictly inside a radius, per marginal space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighbourCount {
    /// Neighbours in observation space.
    pub n_x: usize,
    /// Neighbours in action space.
    pub n_y: usize,
}

/// Distance from `p` to the closest point of `points` (ε in a single marginal space).
pub fn nearest_distance(points: &[Vec<f64>], p: &[f64], metric: DistanceMetric) -> Result<f64> {
    if points.is_empty() {
        return Err(InfoError::InsufficientSamples { samples: 0, k: 1 });
    }
    let mut winner = f64::INFINITY;
    for q in points {
        let d = metric.distance(q, p)?;
        if d < winner {
            winner = d;
        }
    }
    Ok(winner)
}

/// All candidates ordered by ascending max-norm distance to `query`.
///
/// Ties are broken by path position, so the ranking is a deterministic total order.
/// The query itself (same timestamp) sorts last with distance +∞.
pub fn rank_neighbours(
    candidates: &SensorimotorContainer<'_>,
    query: &SensationActionPair,
    metric: DistanceMetric,
) -> Result<Vec<Neighbour>> {
    let mut ranked = Vec::with_capacity(candidates.len());
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = max_norm(candidate, query, metric)?;
        ranked.push(Neighbour { index, distance });
    }
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.index.cmp(&b.index)));
    Ok(ranked)
}

/// Max-norm distance from `query` to its k-th nearest neighbour among `candidates`.
///
/// - k = 1 is a linear scan for the minimum
/// - k > 1 ranks all candidates (O(n log n)) and reads rank k−1
///
/// Fails with `InsufficientSamples` when fewer than k candidates other than the query
/// itself are available.
pub fn kth_nearest_distance(
    candidates: &SensorimotorContainer<'_>,
    query: &SensationActionPair,
    k: usize,
    metric: DistanceMetric,
) -> Result<f64> {
    if k == 0 {
        return Err(InfoError::InvalidParameter("k must be >= 1".to_string()));
    }
    let eligible = candidates.iter().filter(|c| c.t != query.t).count();
    if eligible < k {
        return Err(InfoError::InsufficientSamples { samples: candidates.len(), k });
    }

    if k == 1 {
        let mut winner = f64::INFINITY;
        for candidate in candidates.iter() {
            let d = max_norm(candidate, query, metric)?;
            if d < winner {
                winner = d;
            }
        }
        return Ok(winner);
    }

    let ranked = rank_neighbours(candidates, query, metric)?;
    Ok(ranked[k - 1].distance)
}

/// Count the samples lying strictly closer than `dist` to `query`, separately in
/// observation space (`n_x`) and action space (`n_y`).
///
/// The query itself and exact duplicates (distance 0) are never counted.
pub fn neighbour_count(
    samples: &SensorimotorContainer<'_>,
    query: &SensationActionPair,
    dist: f64,
    metric: DistanceMetric,
) -> Result<NeighbourCount> {
    let mut count = NeighbourCount::default();
    for sample in samples.iter() {
        if sample.t == query.t {
            continue;
        }
        let d_obs = metric.distance(&sample.observation, &query.observation)?;
        if d_obs < dist && d_obs != 0.0 {
            count.n_x += 1;
        }
        let d_act = metric.distance(&sample.action, &query.action)?;
        if d_act < dist && d_act != 0.0 {
            count.n_y += 1;
        }
    }
    trace!(t = query.t, dist, n_x = count.n_x, n_y = count.n_y, "neighbour count");
    Ok(count)
}
