//! Dataset schema definitions
//!
//! The schema fixes the ordered list of numeric feature columns and the
//! column that names each entity. Binding the key order to the schema at
//! construction, instead of threading a bare key list through every call,
//! guarantees that all vectors built against one dataset agree on element
//! order.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use simx_core::{Error, Result};

/// Schema for projecting tabular rows onto feature vectors
///
/// `vector_keys` order is the feature-vector element order; it is fixed
/// at construction and never permuted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetSchema {
    vector_keys: Vec<String>,
    name_column: String,
}

impl DatasetSchema {
    /// Create a validated schema
    ///
    /// Fails with [`Error::InvalidArgument`] if `vector_keys` is empty,
    /// contains duplicates, or contains the name column itself.
    pub fn new(
        vector_keys: impl IntoIterator<Item = impl Into<String>>,
        name_column: impl Into<String>,
    ) -> Result<Self> {
        let vector_keys: Vec<String> = vector_keys.into_iter().map(Into::into).collect();
        let name_column = name_column.into();

        if vector_keys.is_empty() {
            return Err(Error::InvalidArgument(
                "vector_keys cannot be empty".to_string(),
            ));
        }

        let mut seen = AHashSet::with_capacity(vector_keys.len());
        for key in &vector_keys {
            if !seen.insert(key.as_str()) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate vector key '{key}'"
                )));
            }
        }

        if seen.contains(name_column.as_str()) {
            return Err(Error::InvalidArgument(format!(
                "name column '{name_column}' cannot also be a vector key"
            )));
        }

        Ok(Self {
            vector_keys,
            name_column,
        })
    }

    /// Feature keys, in vector element order
    #[inline]
    pub fn vector_keys(&self) -> &[String] {
        &self.vector_keys
    }

    /// Column holding the entity name
    #[inline]
    pub fn name_column(&self) -> &str {
        &self.name_column
    }

    /// Dimension of every vector built against this schema
    #[inline]
    pub fn dim(&self) -> usize {
        self.vector_keys.len()
    }
}
