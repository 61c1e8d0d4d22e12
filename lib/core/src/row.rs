use crate::vector::FeatureVector;
use serde::{Deserialize, Serialize};

/// Identity of a row within a dataset, assigned in construction order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowId(usize);

impl RowId {
    #[inline]
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for RowId {
    fn from(index: usize) -> Self {
        RowId(index)
    }
}

/// A validated dataset row: identity, entity name, feature projection
/// and the original payload it was projected from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    pub name: String,
    pub vector: FeatureVector,
    pub payload: serde_json::Value,
}

impl Row {
    #[inline]
    #[must_use]
    pub fn new(id: RowId, name: String, vector: FeatureVector, payload: serde_json::Value) -> Self {
        Self {
            id,
            name,
            vector,
            payload,
        }
    }
}
