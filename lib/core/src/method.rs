//! Similarity methods and their registry
//!
//! A [`MethodDescriptor`] binds one similarity algorithm to a weight and its
//! parameters. Built-in algorithms are a closed [`Algorithm`] enum; anything
//! else is a custom function, supplied directly or looked up by name in a
//! [`MethodRegistry`]. Descriptors are validated when they are built, so a
//! descriptor that exists can always be evaluated.

use crate::error::{Error, Result};
use crate::jaro_winkler::{jaro_winkler_distance, DEFAULT_PREFIX_SCALE};
use crate::ngram::{ngram_distance, DEFAULT_NGRAM_SIZE};
use crate::params::MethodParams;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A similarity function: `(query, candidate, params) -> distance`.
///
/// The returned distance is nominally in [0.0, 1.0], 0.0 meaning identical.
pub type SimilarityFn = Arc<dyn Fn(&str, &str, &MethodParams) -> f64 + Send + Sync>;

/// Weight given to a method when none is specified
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Default weight of the Jaro-Winkler method in the default method set
pub const DEFAULT_JARO_WINKLER_WEIGHT: f64 = 1.5;

/// Default weight of the n-gram method in the default method set
pub const DEFAULT_NGRAM_WEIGHT: f64 = 1.0;

/// Normalize a method name: lowercase, with `-` and whitespace folded to `_`.
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c == '-' || c.is_whitespace() {
                '_'
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Built-in similarity algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// N-gram overlap, parameter `n` (default 2)
    NGram,
    /// Jaro-Winkler alignment, parameter `p` (default 0.1)
    JaroWinkler,
}

impl Algorithm {
    /// Resolve a (possibly unnormalized) name to a built-in algorithm
    pub fn from_name(name: &str) -> Option<Self> {
        match normalize_name(name).as_str() {
            "jaccard" | "ngram" | "n_gram" => Some(Algorithm::NGram),
            "jaro_winkler" | "jarowinkler" | "alignment" => Some(Algorithm::JaroWinkler),
            _ => None,
        }
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::NGram => "jaccard",
            Algorithm::JaroWinkler => "jaro_winkler",
        }
    }

    /// Parameters this algorithm uses when none are given
    pub fn default_params(&self) -> MethodParams {
        match self {
            Algorithm::NGram => MethodParams::new().with("n", DEFAULT_NGRAM_SIZE),
            Algorithm::JaroWinkler => MethodParams::new().with("p", DEFAULT_PREFIX_SCALE),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved similarity implementation
#[derive(Clone)]
pub enum Method {
    NGram { n: usize },
    JaroWinkler { prefix_scale: f64 },
    Custom(SimilarityFn),
}

impl Method {
    /// Build a built-in method, reading and checking its typed parameters
    pub fn builtin(algorithm: Algorithm, params: &MethodParams) -> Result<Self> {
        match algorithm {
            Algorithm::NGram => {
                let n = params.usize_or(algorithm.name(), "n", DEFAULT_NGRAM_SIZE)?;
                if n == 0 {
                    return Err(Error::InvalidParameter {
                        method: algorithm.name().to_string(),
                        name: "n".to_string(),
                        reason: "n-gram length must be at least 1".to_string(),
                    });
                }
                Ok(Method::NGram { n })
            }
            Algorithm::JaroWinkler => {
                let prefix_scale =
                    params.f64_or(algorithm.name(), "p", DEFAULT_PREFIX_SCALE)?;
                Ok(Method::JaroWinkler { prefix_scale })
            }
        }
    }

    /// The built-in algorithm behind this method, if any
    pub fn algorithm(&self) -> Option<Algorithm> {
        match self {
            Method::NGram { .. } => Some(Algorithm::NGram),
            Method::JaroWinkler { .. } => Some(Algorithm::JaroWinkler),
            Method::Custom(_) => None,
        }
    }

    /// Distance between `a` and `b`
    #[inline]
    pub fn distance(&self, a: &str, b: &str, params: &MethodParams) -> f64 {
        match self {
            Method::NGram { n } => ngram_distance(a, b, *n),
            Method::JaroWinkler { prefix_scale } => jaro_winkler_distance(a, b, *prefix_scale),
            Method::Custom(func) => func(a, b, params),
        }
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::NGram { n } => f.debug_struct("NGram").field("n", n).finish(),
            Method::JaroWinkler { prefix_scale } => f
                .debug_struct("JaroWinkler")
                .field("prefix_scale", prefix_scale)
                .finish(),
            Method::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// A similarity method with its weight and parameters
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    name: Option<String>,
    method: Method,
    weight: f64,
    params: MethodParams,
}

impl MethodDescriptor {
    /// Built-in algorithm with default parameters and weight 1
    pub fn algorithm(algorithm: Algorithm) -> Self {
        let params = algorithm.default_params();
        let method = match algorithm {
            Algorithm::NGram => Method::NGram { n: DEFAULT_NGRAM_SIZE },
            Algorithm::JaroWinkler => Method::JaroWinkler {
                prefix_scale: DEFAULT_PREFIX_SCALE,
            },
        };
        Self {
            name: Some(algorithm.name().to_string()),
            method,
            weight: DEFAULT_WEIGHT,
            params,
        }
    }

    /// Built-in method by name, weight 1
    pub fn named(name: &str) -> Result<Self> {
        Algorithm::from_name(name)
            .map(Self::algorithm)
            .ok_or_else(|| Error::UnknownMethod(name.to_string()))
    }

    /// Built-in method by name with an explicit weight
    pub fn weighted(name: &str, weight: f64) -> Result<Self> {
        Self::named(name)?.with_weight(weight)
    }

    /// Custom similarity function, weight 1
    pub fn custom<F>(func: F) -> Self
    where
        F: Fn(&str, &str, &MethodParams) -> f64 + Send + Sync + 'static,
    {
        Self::from_fn(Arc::new(func))
    }

    /// Custom similarity function with an explicit weight
    pub fn custom_weighted<F>(func: F, weight: f64) -> Result<Self>
    where
        F: Fn(&str, &str, &MethodParams) -> f64 + Send + Sync + 'static,
    {
        Self::custom(func).with_weight(weight)
    }

    /// Custom similarity function from a shared handle, weight 1
    pub fn from_fn(func: SimilarityFn) -> Self {
        Self {
            name: None,
            method: Method::Custom(func),
            weight: DEFAULT_WEIGHT,
            params: MethodParams::new(),
        }
    }

    /// The default method set: Jaro-Winkler (weight 1.5) and n-gram (weight 1)
    pub fn defaults() -> Vec<Self> {
        let mut jaro_winkler = Self::algorithm(Algorithm::JaroWinkler);
        jaro_winkler.weight = DEFAULT_JARO_WINKLER_WEIGHT;
        let mut ngram = Self::algorithm(Algorithm::NGram);
        ngram.weight = DEFAULT_NGRAM_WEIGHT;
        vec![jaro_winkler, ngram]
    }

    /// Set the weight; it must be finite
    pub fn with_weight(mut self, weight: f64) -> Result<Self> {
        if !weight.is_finite() {
            return Err(Error::InvalidWeight {
                method: self.name().to_string(),
                weight,
            });
        }
        self.weight = weight;
        Ok(self)
    }

    /// Replace the parameters, revalidating built-in ones
    pub fn with_params(mut self, params: MethodParams) -> Result<Self> {
        if let Some(algorithm) = self.method.algorithm() {
            self.method = Method::builtin(algorithm, &params)?;
        }
        self.params = params;
        Ok(self)
    }

    /// Label this method (shown in score breakdowns)
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse one JSON method entry.
    ///
    /// Accepts a method name string, or an object `{name, weight?, params?}`.
    /// Any other JSON value is an invalid method definition.
    pub fn from_json(value: &Value, registry: &MethodRegistry) -> Result<Self> {
        match value {
            Value::String(name) => registry.descriptor(name),
            Value::Object(entry) => {
                let name = match entry.get("name") {
                    Some(Value::String(name)) => name,
                    Some(other) => {
                        return Err(Error::InvalidMethodDefinition(format!(
                            "method name must be a string, got {}",
                            other
                        )))
                    }
                    None => {
                        return Err(Error::InvalidMethodDefinition(
                            "method object has no name".to_string(),
                        ))
                    }
                };

                let mut descriptor = registry.descriptor(name)?;

                match entry.get("params") {
                    None | Some(Value::Null) => {}
                    Some(Value::Object(params)) => {
                        descriptor = descriptor.with_params(params.clone().into())?;
                    }
                    Some(other) => {
                        return Err(Error::InvalidMethodDefinition(format!(
                            "params of '{}' must be an object, got {}",
                            name, other
                        )))
                    }
                }

                match entry.get("weight") {
                    None | Some(Value::Null) => Ok(descriptor),
                    Some(Value::Number(weight)) => match weight.as_f64() {
                        Some(weight) => descriptor.with_weight(weight),
                        None => Err(Error::InvalidMethodDefinition(format!(
                            "weight of '{}' is not representable: {}",
                            name, weight
                        ))),
                    },
                    Some(other) => Err(Error::InvalidMethodDefinition(format!(
                        "weight of '{}' must be a number, got {}",
                        name, other
                    ))),
                }
            }
            other => Err(Error::InvalidMethodDefinition(other.to_string())),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("custom")
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn params(&self) -> &MethodParams {
        &self.params
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Distance between `a` and `b` under this method
    #[inline]
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        self.method.distance(a, b, &self.params)
    }
}

/// Name lookup for similarity methods.
///
/// Built-in names always resolve to their [`Algorithm`]. Custom functions can
/// be registered under any other name.
#[derive(Clone, Default)]
pub struct MethodRegistry {
    custom: AHashMap<String, SimilarityFn>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom function under `name`.
    ///
    /// Returns the function previously registered under the same name, if any.
    /// Built-in names cannot be overridden.
    pub fn register<F>(&mut self, name: &str, func: F) -> Result<Option<SimilarityFn>>
    where
        F: Fn(&str, &str, &MethodParams) -> f64 + Send + Sync + 'static,
    {
        if let Some(algorithm) = Algorithm::from_name(name) {
            return Err(Error::InvalidMethodDefinition(format!(
                "'{}' is reserved for the built-in {} method",
                name, algorithm
            )));
        }
        Ok(self.custom.insert(normalize_name(name), Arc::new(func)))
    }

    pub fn contains(&self, name: &str) -> bool {
        Algorithm::from_name(name).is_some() || self.custom.contains_key(&normalize_name(name))
    }

    /// Resolve `name` to a method with default parameters
    pub fn resolve(&self, name: &str) -> Result<Method> {
        if let Some(algorithm) = Algorithm::from_name(name) {
            return Method::builtin(algorithm, &MethodParams::new());
        }
        self.custom
            .get(&normalize_name(name))
            .map(|func| Method::Custom(Arc::clone(func)))
            .ok_or_else(|| Error::UnknownMethod(name.to_string()))
    }

    /// Descriptor for `name` with weight 1 and default parameters
    pub fn descriptor(&self, name: &str) -> Result<MethodDescriptor> {
        if let Some(algorithm) = Algorithm::from_name(name) {
            return Ok(MethodDescriptor::algorithm(algorithm));
        }
        let method = self.resolve(name)?;
        Ok(MethodDescriptor {
            name: Some(normalize_name(name)),
            method,
            weight: DEFAULT_WEIGHT,
            params: MethodParams::new(),
        })
    }

    /// Names of registered custom methods, sorted
    pub fn custom_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for MethodRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodRegistry")
            .field("custom", &self.custom_names())
            .finish()
    }
}
