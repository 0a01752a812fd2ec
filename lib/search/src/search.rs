//! Ranked search over a candidate list
//!
//! Resolves every candidate's text up front (failing the whole call on the
//! first unsearchable one), scores each candidate, drops those below the
//! minimum score, sorts by descending score and applies the result limit.

use crate::candidate::{resolve_texts, SearchResult};
use crate::config::SearchConfig;
use crate::scorer::Scorer;
use fuzzyrank_core::Result;
use rayon::prelude::*;
use serde_json::Value;
use std::cmp::Ordering;
use tracing::{debug, trace};

impl Scorer<'_> {
    /// Rank `candidates` against `query`
    ///
    /// Candidates are JSON strings or objects carrying the configured label
    /// field. Results keep the relative input order of equal scores.
    pub fn search(&self, query: &str, candidates: &[Value]) -> Result<Vec<SearchResult>> {
        let config = self.config();
        let texts = resolve_texts(candidates, config.label_field())?;
        let query = self.fold_case(query);

        let scores = self.score_all(&query, &texts);

        let mut results: Vec<SearchResult> = candidates
            .iter()
            .zip(scores)
            .filter(|(_, score)| *score >= config.min_score())
            .map(|(candidate, score)| {
                SearchResult::from_candidate(candidate, config.label_field(), score)
            })
            .collect();

        // Stable: equal scores keep their input order
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        if config.result_limit() > 0 {
            results.truncate(config.result_limit());
        }

        debug!(
            "Searched {} candidates: {} kept (min_score={}, limit={})",
            candidates.len(),
            results.len(),
            config.min_score(),
            config.result_limit()
        );

        Ok(results)
    }

    /// Rank plain strings against `query`
    pub fn search_texts<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
    ) -> Result<Vec<SearchResult>> {
        let candidates: Vec<Value> = candidates
            .iter()
            .map(|text| Value::String(text.as_ref().to_string()))
            .collect();
        self.search(query, &candidates)
    }

    /// Score every text against the folded query, in input order.
    /// Parallel above the configured threshold, sequential otherwise.
    fn score_all(&self, query: &str, texts: &[&str]) -> Vec<f64> {
        let threshold = self.config().parallel_threshold();
        let score_one = |text: &&str| {
            let candidate = self.fold_case(text);
            let score = self.score_folded(query, &candidate);
            trace!("{:?} -> {:.4}", text, score);
            score
        };

        if threshold > 0 && texts.len() >= threshold {
            debug!("Scoring {} candidates in parallel", texts.len());
            texts.par_iter().map(score_one).collect()
        } else {
            texts.iter().map(score_one).collect()
        }
    }
}

/// Rank `candidates` against `query` under `config`
pub fn search(query: &str, candidates: &[Value], config: &SearchConfig) -> Result<Vec<SearchResult>> {
    Scorer::borrowed(config).search(query, candidates)
}

/// Rank plain strings against `query` under `config`
pub fn search_texts<S: AsRef<str>>(
    query: &str,
    candidates: &[S],
    config: &SearchConfig,
) -> Result<Vec<SearchResult>> {
    Scorer::borrowed(config).search_texts(query, candidates)
}
