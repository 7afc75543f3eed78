// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by every estimator in the crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfoError {
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Insufficient samples: {samples} samples cannot support k={k}")]
    InsufficientSamples { samples: usize, k: usize },

    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Timestamps must be strictly increasing: {got} follows {previous}")]
    NonMonotonicTimestamp { previous: i64, got: i64 },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InfoError>;
