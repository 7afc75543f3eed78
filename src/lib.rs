// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # sensorimotor-info
//!
//! Information-theoretic analysis of sensorimotor trajectories: how much an agent's
//! actions tell about its observations, estimated from a recorded path of
//! observation/action samples.
//!
//! ## Quick Start
//!
//! ```rust
//! use sensorimotor_info::data::SensorimotorPath;
//! use sensorimotor_info::estimators::mutual_information::MutualInformation;
//! use ndarray::Array2;
//!
//! let obs = Array2::from_shape_fn((40, 1), |(t, _)| (t as f64 * 0.3).sin());
//! let act = Array2::from_shape_fn((40, 1), |(t, _)| (t as f64 * 0.3).cos());
//! let path = SensorimotorPath::from_arrays(obs.view(), act.view()).unwrap();
//!
//! let mi = MutualInformation::new().with_k(4).calculate(&path).unwrap();
//! assert!(mi.is_finite());
//! ```
//!
//! ## Estimation Approaches
//!
//! ### k-Nearest Neighbour (KSG)
//! Mutual information between the observation and action streams via the
//! Kraskov–Stögbauer–Grassberger estimator, with a max-norm joint space built from
//! per-subspace Euclidean distances. Results are in nats.
//!
//! ### Discrete Estimation
//! Fixed-width binning of normalized traces and plug-in uncertainty of the resulting
//! per-dimension distributions, dispatched through [`estimators::information::Information`].
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the data model and estimator configuration
//!
//! All computations are synchronous, deterministic and keep no state between calls.
//! Diagnostics are emitted through `tracing`; install a subscriber to see them.

pub mod data;
pub mod error;
pub mod estimators;

pub use data::{Point, SensationActionPair, SensorimotorContainer, SensorimotorPath};
pub use error::{InfoError, Result};
pub use estimators::approaches::discrete::binning::BinConverter;
pub use estimators::approaches::ksg::{DistanceMetric, KsgMutualInformation};
pub use estimators::information::{InfoType, Information};
pub use estimators::mutual_information::{MiApproximation, MutualInformation};
pub use estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};
