//! Immutable dataset accessor
//!
//! Wraps a rectangular table together with a [`DatasetSchema`] and exposes
//! vector lookup by entity name plus restartable row iteration. Every
//! numeric field is converted at construction time, so a malformed value
//! fails the build with the offending row and field named instead of
//! surfacing later as a NaN distance inside a query.

use crate::schema::DatasetSchema;
use ahash::AHashMap;
use simx_core::{Error, FeatureVector, Result, Row, RowId};
use tracing::debug;

/// Read-only accessor over a table of entities
///
/// Constructed once per (table, schema) pair; all queries are pure
/// functions of the accessor and their parameters, so a `Dataset` can be
/// shared across threads freely.
#[derive(Debug, Clone)]
pub struct Dataset {
    schema: DatasetSchema,
    rows: Vec<Row>,
    // Name of the first row that carries it; duplicates still rank.
    by_name: AHashMap<String, usize>,
}

impl Dataset {
    /// Build a dataset from JSON records
    ///
    /// Each record must be a JSON object containing the schema's name
    /// column as a string and every vector key as a number. Fails with
    /// [`Error::Conversion`] naming the row and field otherwise.
    pub fn new(
        records: impl IntoIterator<Item = serde_json::Value>,
        schema: DatasetSchema,
    ) -> Result<Self> {
        let mut rows = Vec::new();
        let mut by_name: AHashMap<String, usize> = AHashMap::new();

        for (index, record) in records.into_iter().enumerate() {
            let id = RowId::new(index);
            let name = record
                .get(schema.name_column())
                .and_then(|v| v.as_str())
                .ok_or_else(|| Error::Conversion {
                    row: id.to_string(),
                    field: schema.name_column().to_string(),
                })?
                .to_string();

            let mut data = Vec::with_capacity(schema.dim());
            for key in schema.vector_keys() {
                let value =
                    record
                        .get(key)
                        .and_then(|v| v.as_f64())
                        .ok_or_else(|| Error::Conversion {
                            row: name.clone(),
                            field: key.clone(),
                        })?;
                data.push(value);
            }

            by_name.entry(name.clone()).or_insert(index);
            rows.push(Row::new(id, name, FeatureVector::new(data), record));
        }

        debug!(rows = rows.len(), dim = schema.dim(), "dataset constructed");
        Ok(Self {
            schema,
            rows,
            by_name,
        })
    }

    #[inline]
    pub fn schema(&self) -> &DatasetSchema {
        &self.schema
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Restartable iteration over every row in dataset order
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    #[inline]
    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.get(id.index())
    }

    /// Resolve an entity name to its row
    ///
    /// When several rows share a name this returns the first one in
    /// dataset order; the duplicates still participate in ranking.
    pub fn row_by_name(&self, name: &str) -> Result<&Row> {
        self.by_name
            .get(name)
            .map(|&index| &self.rows[index])
            .ok_or_else(|| Error::EntityNotFound(name.to_string()))
    }

    /// Feature vector of a named entity (first match on duplicates)
    pub fn get_vector(&self, name: &str) -> Result<&FeatureVector> {
        self.row_by_name(name).map(|row| &row.vector)
    }
}
