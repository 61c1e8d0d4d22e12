//! # simx Core
//!
//! Core library for the simx similarity engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`FeatureVector`] - Dense f64 vector with arithmetic and interpolation
//! - [`Row`] / [`RowId`] - A validated dataset row with its source payload
//! - [`Error`] / [`Result`] - Shared error types for the workspace
//!
//! ## Example
//!
//! ```rust
//! use simx_core::FeatureVector;
//!
//! let a = FeatureVector::new(vec![100.0, 100.0]);
//! let b = FeatureVector::new(vec![50.0, 50.0]);
//!
//! // Halfway between the two entities
//! let mid = a.lerp(&b, 0.5);
//! assert_eq!(mid.as_slice(), &[75.0, 75.0]);
//! ```

pub mod error;
pub mod row;
pub mod vector;

pub use error::{Error, Result};
pub use row::{Row, RowId};
pub use vector::FeatureVector;
