use ndarray::ArrayView1;

/// Plug-in (Shannon) uncertainty of a probability vector, in nats.
///
/// H = -Σ p_i ln p_i, with empty bins contributing nothing. The vector is expected to be
/// normalized already (e.g. one row of a binned distribution).
pub fn uncertainty(p: ArrayView1<'_, f64>) -> f64 {
    let mut h = 0.0_f64;
    for &pi in p.iter() {
        h -= if pi > 0.0 { pi * pi.ln() } else { 0.0 };
    }
    h
}

/// Uncertainty in an arbitrary logarithm base: H_b = H_e / ln(b).
///
/// Base 2 gives bits, base 10 gives hartleys. The base is not checked; anything outside
/// (0, 1) ∪ (1, ∞) gives a non-finite or meaningless result.
pub fn uncertainty_with_base(p: ArrayView1<'_, f64>, base: f64) -> f64 {
    uncertainty(p) / base.ln()
}
