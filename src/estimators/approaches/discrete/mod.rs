// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Histogram-based pieces: fixed-width binning of normalized traces and the
// plug-in uncertainty of the resulting distributions.

pub mod binning;
pub mod uncertainty;
