//! Distance functions between feature vectors
//!
//! Both built-ins are symmetric and non-negative and require equal
//! dimensions; unequal lengths are an error, never a silent truncation.
//! The ranker and interpolator take the distance function per call, so
//! callers can substitute any `Fn(&FeatureVector, &FeatureVector) ->
//! Result<f64>` of their own.

use simx_core::{Error, FeatureVector, Result};

#[inline]
fn check_dims(a: &FeatureVector, b: &FeatureVector) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(Error::DimensionMismatch {
            expected: a.dim(),
            actual: b.dim(),
        });
    }
    Ok(())
}

/// Cosine distance: `1 - cosine_similarity(a, b)`
///
/// Near 0 for collinear vectors regardless of magnitude, which makes it
/// the better default for comparing entities at different overall
/// levels (a young player with the same profile as a star ranks close).
///
/// Returns NaN when either vector has zero magnitude; NaN distances
/// sort as equal to everything, keeping dataset row order.
pub fn cosine_distance(a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
    check_dims(a, b)?;
    Ok(1.0 - a.dot(b) / (a.norm() * b.norm()))
}

/// Euclidean (L2) distance
pub fn euclidean_distance(a: &FeatureVector, b: &FeatureVector) -> Result<f64> {
    check_dims(a, b)?;
    let sum: f64 = a
        .as_slice()
        .iter()
        .zip(b.as_slice().iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum();
    Ok(sum.sqrt())
}
