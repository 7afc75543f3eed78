// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Trajectory data model: samples, paths, borrowed snapshots and the tabular fixture format.

pub mod container;
pub mod fixture;
pub mod path;

pub use container::SensorimotorContainer;
pub use path::{Point, SensationActionPair, SensorimotorPath};
