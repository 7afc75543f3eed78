// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Kraskov–Stögbauer–Grassberger (KSG) mutual information over sensorimotor paths:
// distance metrics, joint-space neighbour search and the estimator itself.

pub mod distance;
pub mod ksg;
pub mod neighbours;

pub use distance::DistanceMetric;
pub use ksg::KsgMutualInformation;
pub use neighbours::{Neighbour, NeighbourCount};
