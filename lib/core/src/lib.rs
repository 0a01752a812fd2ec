//! # fuzzyrank Core
//!
//! Core library for the fuzzyrank string ranking engine.
//!
//! This crate provides the string distance algorithms and the types that bind
//! them into weighted, configurable methods:
//!
//! - [`ngram_distance`] - n-gram overlap distance with one-to-one gram matching
//! - [`jaro_winkler_distance`] - prefix-weighted character alignment distance
//! - [`MethodDescriptor`] - a validated (method, weight, params) triple
//! - [`MethodRegistry`] - name lookup for built-in and custom methods
//!
//! All distances are normalized to [0.0, 1.0] where 0.0 means identical.
//!
//! ## Example
//!
//! ```rust
//! use fuzzyrank_core::{jaro_winkler_distance, ngram_distance, MethodDescriptor, MethodParams};
//!
//! assert_eq!(ngram_distance("prism", "prism", 2), 0.0);
//! assert_eq!(jaro_winkler_distance("prism", "", 0.1), 1.0);
//!
//! let trigram = MethodDescriptor::weighted("jaccard", 2.0)
//!     .unwrap()
//!     .with_params(MethodParams::new().with("n", 3))
//!     .unwrap();
//! assert_eq!(trigram.distance("abc", "abc"), 0.0);
//! ```

pub mod error;
pub mod jaro_winkler;
pub mod method;
pub mod ngram;
pub mod params;

pub use error::{Error, Result};
pub use jaro_winkler::{jaro_winkler_distance, DEFAULT_PREFIX_SCALE};
pub use method::{
    normalize_name, Algorithm, Method, MethodDescriptor, MethodRegistry, SimilarityFn,
    DEFAULT_WEIGHT,
};
pub use ngram::{ngram_distance, DEFAULT_NGRAM_SIZE};
pub use params::MethodParams;
