//! Search configuration
//!
//! [`SearchConfig`] is the validated form used by the scorer. It is built
//! through [`SearchConfigBuilder`] (field-by-field overrides of explicit
//! defaults) or parsed from the JSON [`SearchOptions`] structure.

use fuzzyrank_core::{Error, MethodDescriptor, MethodRegistry, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Default result limit (0 keeps every result)
pub const DEFAULT_RESULT_LIMIT: usize = 0;

/// Default minimum score: the smallest finite float, so nothing is filtered
pub const DEFAULT_MIN_SCORE: f64 = f64::MIN;

/// Default record attribute holding the searchable text
pub const DEFAULT_LABEL_FIELD: &str = "label";

/// Candidate count at which scoring switches to a parallel iterator
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Validated search configuration.
///
/// Always holds at least one method and a non-zero total weight.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    result_limit: usize,
    min_score: f64,
    case_sensitive: bool,
    label_field: String,
    methods: Vec<MethodDescriptor>,
    parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
            case_sensitive: false,
            label_field: DEFAULT_LABEL_FIELD.to_string(),
            methods: MethodDescriptor::defaults(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// Builder seeded with this configuration's values
    pub fn to_builder(&self) -> SearchConfigBuilder {
        SearchConfigBuilder {
            result_limit: self.result_limit,
            min_score: self.min_score,
            case_sensitive: self.case_sensitive,
            label_field: self.label_field.clone(),
            methods: Some(self.methods.clone()),
            parallel_threshold: self.parallel_threshold,
        }
    }

    /// Parse JSON options, resolving method names through `registry`
    pub fn from_json_str(json: &str, registry: &MethodRegistry) -> Result<Self> {
        SearchOptions::from_json_str(json)?.into_config(registry)
    }

    /// Load JSON options from a file, resolving method names through `registry`
    pub fn from_file(path: impl AsRef<Path>, registry: &MethodRegistry) -> Result<Self> {
        SearchOptions::from_file(path)?.into_config(registry)
    }

    /// Maximum number of results; 0 means unlimited
    pub fn result_limit(&self) -> usize {
        self.result_limit
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn label_field(&self) -> &str {
        &self.label_field
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sum of all method weights (never zero)
    pub fn total_weight(&self) -> f64 {
        self.methods.iter().map(MethodDescriptor::weight).sum()
    }
}

/// Builder for [`SearchConfig`]
#[derive(Debug, Clone)]
pub struct SearchConfigBuilder {
    result_limit: usize,
    min_score: f64,
    case_sensitive: bool,
    label_field: String,
    methods: Option<Vec<MethodDescriptor>>,
    parallel_threshold: usize,
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
            case_sensitive: false,
            label_field: DEFAULT_LABEL_FIELD.to_string(),
            methods: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SearchConfigBuilder {
    /// Keep at most `limit` results; 0 keeps all
    pub fn results(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Drop results scoring below `min_score` (NaN fails at `build`)
    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn label_field(mut self, field: impl Into<String>) -> Self {
        self.label_field = field.into();
        self
    }

    /// Replace the method list (an empty list fails at `build`)
    pub fn methods(mut self, methods: Vec<MethodDescriptor>) -> Self {
        self.methods = Some(methods);
        self
    }

    /// Append a method; the first call discards the default method set
    pub fn method(mut self, method: MethodDescriptor) -> Self {
        self.methods.get_or_insert_with(Vec::new).push(method);
        self
    }

    /// Candidate count at which scoring runs in parallel; 0 disables it
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn build(self) -> Result<SearchConfig> {
        if self.min_score.is_nan() {
            return Err(Error::InvalidMinScore(self.min_score));
        }

        let methods = self.methods.unwrap_or_else(MethodDescriptor::defaults);

        if methods.is_empty() {
            return Err(Error::NoMethods);
        }

        let total_weight: f64 = methods.iter().map(MethodDescriptor::weight).sum();
        if total_weight == 0.0 {
            return Err(Error::ZeroTotalWeight);
        }

        Ok(SearchConfig {
            result_limit: self.result_limit,
            min_score: self.min_score,
            case_sensitive: self.case_sensitive,
            label_field: self.label_field,
            methods,
            parallel_threshold: self.parallel_threshold,
        })
    }
}

/// Plain options structure, as read from JSON.
///
/// Every field is optional; absent fields keep their defaults. `methods`
/// entries are method names or `{name, weight?, params?}` objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_field: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_threshold: Option<usize>,
}

impl SearchOptions {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Merge over the defaults and validate
    pub fn into_config(self, registry: &MethodRegistry) -> Result<SearchConfig> {
        let mut builder = SearchConfig::builder();

        if let Some(results) = self.results {
            builder = builder.results(results);
        }
        if let Some(min_score) = self.min_score {
            builder = builder.min_score(min_score);
        }
        if let Some(case_sensitive) = self.case_sensitive {
            builder = builder.case_sensitive(case_sensitive);
        }
        if let Some(label_field) = self.label_field {
            builder = builder.label_field(label_field);
        }
        if let Some(threshold) = self.parallel_threshold {
            builder = builder.parallel_threshold(threshold);
        }
        if let Some(entries) = self.methods {
            let methods = entries
                .iter()
                .map(|entry| MethodDescriptor::from_json(entry, registry))
                .collect::<Result<Vec<_>>>()?;
            builder = builder.methods(methods);
        }

        builder.build()
    }
}
