use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A dense vector of floating point features
///
/// Element order follows the schema's `vector_keys` and is never
/// permuted; two vectors are comparable only if they were built from
/// the same key list in the same order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: Vec<f64>,
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Dot product with another vector of the same dimension
    #[inline]
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean (L2) norm
    #[inline]
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Linear interpolation towards `other`
    ///
    /// Returns `alpha * self + (1 - alpha) * other`, so `alpha = 1`
    /// yields `self` and `alpha = 0` yields `other`. Alpha outside
    /// [0, 1] extrapolates along the same line.
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &FeatureVector, alpha: f64) -> FeatureVector {
        assert_eq!(self.dim(), other.dim());
        FeatureVector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| alpha * a + (1.0 - alpha) * b)
                .collect(),
        )
    }
}

impl From<Vec<f64>> for FeatureVector {
    fn from(data: Vec<f64>) -> Self {
        FeatureVector::new(data)
    }
}

impl Add for &FeatureVector {
    type Output = FeatureVector;

    fn add(self, other: &FeatureVector) -> FeatureVector {
        assert_eq!(self.dim(), other.dim());
        FeatureVector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        )
    }
}

impl Sub for &FeatureVector {
    type Output = FeatureVector;

    fn sub(self, other: &FeatureVector) -> FeatureVector {
        assert_eq!(self.dim(), other.dim());
        FeatureVector::new(
            self.data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a - b)
                .collect(),
        )
    }
}

impl Mul<f64> for &FeatureVector {
    type Output = FeatureVector;

    fn mul(self, scalar: f64) -> FeatureVector {
        FeatureVector::new(self.data.iter().map(|x| x * scalar).collect())
    }
}
