//! # fuzzyrank Search
//!
//! Weighted score aggregation and ranked search over candidate strings.
//!
//! ## Features
//!
//! - **Search Configuration**: explicit defaults, a builder, and a JSON options form
//! - **Score Aggregation**: weighted average of per-method similarities
//! - **Ranked Search**: minimum-score filter, stable descending sort, result limit
//! - **Explainability**: per-method score breakdown
//!
//! ## Example
//!
//! ```rust
//! use fuzzyrank_search::{search, SearchConfig};
//! use serde_json::json;
//!
//! let candidates = vec![
//!     json!({"label": "Mars Bar", "id": "mars"}),
//!     json!({"label": "Chocolate", "id": "choc"}),
//! ];
//!
//! let results = search("col", &candidates, &SearchConfig::default()).unwrap();
//! assert_eq!(results[0].get("id"), Some(&json!("choc")));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   search    │────>│   Scorer    │────>│   Method    │
//! │ (candidates)│     │ (weighted)  │     │ (distance)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │
//!       │              ┌─────────────┐
//!       └─────────────>│SearchResult │
//!                      │(rec + score)│
//!                      └─────────────┘
//! ```

pub mod candidate;
pub mod config;
pub mod scorer;
pub mod search;

// Re-export main types for convenience
pub use candidate::{candidate_text, SearchResult, SCORE_FIELD};
pub use config::{
    SearchConfig, SearchConfigBuilder, SearchOptions, DEFAULT_LABEL_FIELD, DEFAULT_MIN_SCORE,
    DEFAULT_PARALLEL_THRESHOLD, DEFAULT_RESULT_LIMIT,
};
pub use scorer::{score, MethodScore, ScoreBreakdown, Scorer};
pub use search::{search, search_texts};
