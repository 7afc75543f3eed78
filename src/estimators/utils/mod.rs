pub mod special;

use crate::error::{InfoError, Result};

/// Natural log of a logarithm base, used to rescale nats.
///
/// The base must be finite, positive and different from 1.
pub fn ln_base(base: f64) -> Result<f64> {
    if !base.is_finite() || base <= 0.0 || base == 1.0 {
        return Err(InfoError::InvalidParameter(format!(
            "logarithm base must be positive, finite and != 1, got {base}"
        )));
    }
    Ok(base.ln())
}
