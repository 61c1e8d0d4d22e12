//! # simx
//!
//! A similarity and interpolation engine for entities described by
//! tabular feature vectors.
//!
//! Given a rectangular table (players, products, any named rows with
//! numeric attributes), simx can rank all entities by distance to a
//! reference under a pluggable metric, blend two entities' vectors at a
//! parameter alpha ("gradient embedding"), and sample a path of
//! nearest-neighbor entities along that blend.
//!
//! Upstream concerns stay upstream: simx expects a table whose feature
//! columns are already numeric and complete. Loading, cleaning, scaling
//! and visualization belong to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use simx::prelude::*;
//! use ahash::AHashSet;
//! use serde_json::json;
//!
//! let schema = DatasetSchema::new(["pace", "shooting"], "name").unwrap();
//! let dataset = Dataset::new(
//!     vec![
//!         json!({"name": "Cazorla", "pace": 68, "shooting": 71}),
//!         json!({"name": "Pogba",   "pace": 76, "shooting": 79}),
//!         json!({"name": "Kante",   "pace": 78, "shooting": 54}),
//!     ],
//!     schema,
//! )
//! .unwrap();
//!
//! // Closest player to Cazorla, other than himself
//! let exclude: AHashSet<String> = ["Cazorla".to_string()].into_iter().collect();
//! let similar = dataset
//!     .find_similar("Cazorla", cosine_distance, 1, &exclude)
//!     .unwrap();
//!
//! // A 70/30 blend of two players, and the path between them
//! let blended = dataset.blend("Cazorla", "Pogba", 0.7).unwrap();
//! let walk = dataset.path("Cazorla", "Kante", 5, cosine_distance);
//! # let _ = (similar, blended, walk);
//! ```
//!
//! ## Crate Structure
//!
//! simx is composed of two crates:
//!
//! - `simx-core` - Core data structures (FeatureVector, Row, errors)
//! - `simx-engine` - Dataset accessor, distance functions, ranker and
//!   interpolator

// Re-export core types
pub use simx_core::{Error, FeatureVector, Result, Row, RowId};

// Re-export the engine
pub use simx_engine::{
    cosine_distance, euclidean_distance, Dataset, DatasetSchema, Ranked, Reference,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        cosine_distance, euclidean_distance, Dataset, DatasetSchema, Error, FeatureVector, Ranked,
        Reference, Result, Row, RowId,
    };
}
