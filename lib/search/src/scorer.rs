//! Weighted score aggregation
//!
//! Combines the configured methods into a single score per (query, candidate)
//! pair: the weighted average of per-method similarities (`1 - distance`).

use crate::config::SearchConfig;
use serde::Serialize;
use std::borrow::Cow;

/// Contribution of one method to a score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodScore {
    /// Method name
    pub method: String,
    /// Configured weight
    pub weight: f64,
    /// Unweighted similarity (`1 - distance`)
    pub similarity: f64,
}

/// A score with its per-method breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub methods: Vec<MethodScore>,
}

/// Scores strings against a query under a validated configuration.
///
/// Owns its configuration when built with [`Scorer::new`], or borrows one
/// with [`Scorer::borrowed`]; configurations are never re-validated.
#[derive(Debug, Clone, Default)]
pub struct Scorer<'a> {
    config: Cow<'a, SearchConfig>,
}

impl<'a> Scorer<'a> {
    /// Create a new scorer with the given configuration
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config: Cow::Owned(config),
        }
    }

    /// Create a scorer over a borrowed configuration
    pub fn borrowed(config: &'a SearchConfig) -> Self {
        Self {
            config: Cow::Borrowed(config),
        }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score `candidate` against `query`, in [0.0, 1.0] for well-behaved methods
    pub fn score(&self, query: &str, candidate: &str) -> f64 {
        let query = self.fold_case(query);
        let candidate = self.fold_case(candidate);
        self.score_folded(&query, &candidate)
    }

    /// Score with a per-method breakdown
    pub fn explain(&self, query: &str, candidate: &str) -> ScoreBreakdown {
        let query = self.fold_case(query);
        let candidate = self.fold_case(candidate);

        let methods: Vec<MethodScore> = self
            .config
            .methods()
            .iter()
            .map(|method| MethodScore {
                method: method.name().to_string(),
                weight: method.weight(),
                similarity: 1.0 - method.distance(&query, &candidate),
            })
            .collect();

        let weighted: f64 = methods.iter().map(|m| m.similarity * m.weight).sum();
        let score = weighted / self.config.total_weight();

        ScoreBreakdown { score, methods }
    }

    /// Apply case folding unless the search is case sensitive
    pub(crate) fn fold_case<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.config.case_sensitive() {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        }
    }

    /// Score two already case-folded strings
    pub(crate) fn score_folded(&self, query: &str, candidate: &str) -> f64 {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for method in self.config.methods() {
            let distance = method.distance(query, candidate);
            weighted_sum += (1.0 - distance) * method.weight();
            total_weight += method.weight();
        }

        weighted_sum / total_weight
    }
}

/// Score a single (query, candidate) pair
pub fn score(query: &str, candidate: &str, config: &SearchConfig) -> f64 {
    Scorer::borrowed(config).score(query, candidate)
}
