//! # simx Engine
//!
//! Similarity ranking and gradient interpolation over tabular feature
//! vectors.
//!
//! The engine is built around an immutable [`Dataset`] accessor: a
//! rectangular table bound once to a [`DatasetSchema`] (ordered feature
//! keys plus a name column). Against that accessor, callers issue pure
//! queries:
//!
//! - **Ranking**: [`Dataset::find_similar`] scores every row against a
//!   [`Reference`] (a name or an explicit vector) under a
//!   caller-supplied distance function and returns the k closest.
//! - **Blending**: [`Dataset::blend`] linearly interpolates two
//!   entities' vectors at a parameter alpha.
//! - **Path sampling**: [`Dataset::path`] sweeps alpha from 1 towards 0
//!   and collects the nearest distinct neighbor at each step.
//!
//! ## Example
//!
//! ```rust
//! use simx_engine::{cosine_distance, Dataset, DatasetSchema};
//! use ahash::AHashSet;
//! use serde_json::json;
//!
//! let schema = DatasetSchema::new(["pace", "shooting"], "name").unwrap();
//! let dataset = Dataset::new(
//!     vec![
//!         json!({"name": "A", "pace": 100, "shooting": 100}),
//!         json!({"name": "B", "pace": 50, "shooting": 50}),
//!         json!({"name": "C", "pace": 90, "shooting": 40}),
//!     ],
//!     schema,
//! )
//! .unwrap();
//!
//! // B is collinear with A, so cosine ranks it closest.
//! let exclude: AHashSet<String> = ["A".to_string()].into_iter().collect();
//! let similar = dataset
//!     .find_similar("A", cosine_distance, 1, &exclude)
//!     .unwrap();
//! assert_eq!(similar[0].name, "B");
//! ```

pub mod dataset;
pub mod distance;
pub mod interpolate;
pub mod rank;
pub mod schema;

pub use dataset::Dataset;
pub use distance::{cosine_distance, euclidean_distance};
pub use rank::{Ranked, Reference};
pub use schema::DatasetSchema;
