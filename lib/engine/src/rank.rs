//! Similarity ranking
//!
//! Full-scan ranking of every dataset row against a reference vector
//! under a caller-supplied distance function. The sort is stable, so
//! rows at equal distance come back in dataset order.

use crate::dataset::Dataset;
use ahash::AHashSet;
use simx_core::{Error, FeatureVector, Result, RowId};
use tracing::debug;

/// Reference point for a similarity query
///
/// Either an entity name resolved through the dataset, or an explicit
/// vector such as one produced by [`Dataset::blend`].
#[derive(Debug, Clone)]
pub enum Reference {
    Named(String),
    Vector(FeatureVector),
}

impl From<&str> for Reference {
    fn from(name: &str) -> Self {
        Reference::Named(name.to_string())
    }
}

impl From<String> for Reference {
    fn from(name: String) -> Self {
        Reference::Named(name)
    }
}

impl From<FeatureVector> for Reference {
    fn from(vector: FeatureVector) -> Self {
        Reference::Vector(vector)
    }
}

/// One ranking result: row identity plus its distance to the reference
///
/// Ephemeral query output; never written back into the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub id: RowId,
    pub name: String,
    pub distance: f64,
}

impl Dataset {
    /// Rank rows by ascending distance to `reference`, returning the
    /// `k` closest
    ///
    /// Rows whose name is in `exclude` are skipped. `k = 0` or an empty
    /// dataset yields an empty vec; `k` beyond the eligible row count
    /// yields every eligible row ranked. A non-excluded reference row
    /// ranks first at distance 0.
    pub fn find_similar<F>(
        &self,
        reference: impl Into<Reference>,
        distance_fn: F,
        k: usize,
        exclude: &AHashSet<String>,
    ) -> Result<Vec<Ranked>>
    where
        F: Fn(&FeatureVector, &FeatureVector) -> Result<f64>,
    {
        let reference_vector = match reference.into() {
            Reference::Named(name) => self.get_vector(&name)?.clone(),
            Reference::Vector(vector) => vector,
        };
        if reference_vector.dim() != self.schema().dim() {
            return Err(Error::DimensionMismatch {
                expected: self.schema().dim(),
                actual: reference_vector.dim(),
            });
        }
        if k == 0 {
            return Ok(Vec::new());
        }

        debug!(rows = self.len(), k, excluded = exclude.len(), "similarity query");

        let mut results = Vec::with_capacity(self.len());
        for row in self.rows() {
            if exclude.contains(row.name.as_str()) {
                continue;
            }
            let distance = distance_fn(&reference_vector, &row.vector)?;
            results.push(Ranked {
                id: row.id,
                name: row.name.clone(),
                distance,
            });
        }

        // Stable sort: equal (or NaN) distances keep dataset row order.
        results.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(k);
        Ok(results)
    }
}
