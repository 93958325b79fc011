use ndarray::prelude::*;

/// Cumulative trapezoidal integration of uniformly spaced samples.
///
/// Returns an array of the same length where element `i` holds the integral
/// from the first sample up to sample `i`; element 0 is zero.
pub fn cumulative_trapezoid(values: &Array1<f64>, step: f64) -> Array1<f64> {
    let mut out = Array1::<f64>::zeros(values.len());
    let mut acc = 0.0;
    for i in 1..values.len() {
        acc += 0.5 * step * (values[i - 1] + values[i]);
        out[i] = acc;
    }
    out
}
