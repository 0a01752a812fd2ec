//! # fuzzyrank
//!
//! Score and rank candidate strings against a query with configurable,
//! weighted string-similarity methods.
//!
//! fuzzyrank combines an n-gram overlap distance and a prefix-weighted
//! Jaro-Winkler distance (or any custom distance function) into a weighted
//! average score, then filters, sorts and limits the candidates by that score.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install fuzzyrank
//! printf 'Identical\nIdentifier\nDental\n' | fuzzyrank search identical --results 2
//! fuzzyrank score prism unpristine
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use fuzzyrank::prelude::*;
//! use serde_json::json;
//!
//! let config = SearchConfig::builder()
//!     .results(2)
//!     .method(MethodDescriptor::weighted("jaro-winkler", 1.5).unwrap())
//!     .method(MethodDescriptor::named("jaccard").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let candidates = vec![json!("Identical"), json!("Dental"), json!({"label": "dentist", "id": 7})];
//! let results = search("identical", &candidates, &config).unwrap();
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].score, 1.0);
//! ```
//!
//! ## Crate Structure
//!
//! fuzzyrank is composed of several crates:
//!
//! - `fuzzyrank-core` - Distance algorithms, method descriptors, method registry
//! - `fuzzyrank-search` - Search configuration, score aggregation, ranked search

// Re-export core types
pub use fuzzyrank_core::{
    jaro_winkler_distance, ngram_distance, Algorithm, Error, Method, MethodDescriptor,
    MethodParams, MethodRegistry, Result, SimilarityFn,
};

// Re-export search
pub use fuzzyrank_search::{
    score, search, search_texts, MethodScore, ScoreBreakdown, Scorer, SearchConfig,
    SearchConfigBuilder, SearchOptions, SearchResult,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        score, search, search_texts, Algorithm, Error, MethodDescriptor, MethodParams,
        MethodRegistry, Result, Scorer, SearchConfig, SearchOptions, SearchResult,
    };
}
