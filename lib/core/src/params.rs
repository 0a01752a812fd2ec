//! Method parameters
//!
//! Parameters are an open string-keyed map so custom similarity functions can
//! receive arbitrary settings. Built-in algorithms read their typed values out
//! of it once, when the method descriptor is constructed.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String-keyed parameters handed to a similarity function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodParams(Map<String, Value>);

impl MethodParams {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Read a non-negative integer parameter, falling back to `default` when absent.
    pub fn usize_or(&self, method: &str, key: &str, default: usize) -> Result<usize> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| Error::InvalidParameter {
                    method: method.to_string(),
                    name: key.to_string(),
                    reason: format!("expected a non-negative integer, got {}", value),
                }),
        }
    }

    /// Read a finite floating point parameter, falling back to `default` when absent.
    pub fn f64_or(&self, method: &str, key: &str, default: f64) -> Result<f64> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(default),
            Some(value) => value
                .as_f64()
                .filter(|x| x.is_finite())
                .ok_or_else(|| Error::InvalidParameter {
                    method: method.to_string(),
                    name: key.to_string(),
                    reason: format!("expected a finite number, got {}", value),
                }),
        }
    }
}

impl From<Map<String, Value>> for MethodParams {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
