// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Arguments below this are shifted upwards before the asymptotic series is applied.
const SHIFT_THRESHOLD: f64 = 6.0;

/// Digamma function ψ(x) = d/dx ln Γ(x) for x > 0.
///
/// The argument is raised with ψ(x) = ψ(x+1) − 1/x until it reaches 6, then
///
/// ψ(x) ≈ ln(x) − 1/(2x) − 1/(12x²) + 1/(120x⁴) − 1/(252x⁶)
///
/// is evaluated and the accumulated shift is subtracted. The truncation error at x ≥ 6 is
/// below 1e-8, far inside what the kNN estimators need.
///
/// Returns NaN for x ≤ 0 or NaN input, and +∞ for +∞.
pub fn digamma(x: f64) -> f64 {
    if x.is_nan() || x <= 0.0 {
        return f64::NAN;
    }
    if x.is_infinite() {
        return f64::INFINITY;
    }

    let mut x = x;
    let mut shift = 0.0_f64;
    while x < SHIFT_THRESHOLD {
        shift -= 1.0 / x;
        x += 1.0;
    }

    let inv = 1.0 / x;
    let inv2 = inv * inv;
    let series = inv2 * (1.0 / 12.0 - inv2 * (1.0 / 120.0 - inv2 / 252.0));
    shift + x.ln() - 0.5 * inv - series
}
