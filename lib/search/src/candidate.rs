//! Candidates and ranked results
//!
//! A candidate is either a bare JSON string or a JSON object whose label
//! field holds the searchable text. Other attributes are carried through to
//! the result untouched.

use fuzzyrank_core::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Name of the attribute carrying the computed score in serialized results
pub const SCORE_FIELD: &str = "score";

/// Searchable text of a candidate, if it has one
pub fn candidate_text<'a>(candidate: &'a Value, label_field: &str) -> Option<&'a str> {
    match candidate {
        Value::String(text) => Some(text.as_str()),
        Value::Object(record) => record.get(label_field).and_then(Value::as_str),
        _ => None,
    }
}

/// Resolve the text of every candidate, failing on the first one without text
pub fn resolve_texts<'a>(candidates: &'a [Value], label_field: &str) -> Result<Vec<&'a str>> {
    candidates
        .iter()
        .enumerate()
        .map(|(index, candidate)| {
            candidate_text(candidate, label_field).ok_or_else(|| Error::UnsearchableCandidate {
                index,
                field: label_field.to_string(),
            })
        })
        .collect()
}

/// A ranked search result: the candidate's attributes plus its score
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Candidate attributes; bare-text candidates become `{label_field: text}`
    pub record: Map<String, Value>,
    /// Weighted similarity score, 1.0 being the best match
    pub score: f64,
}

impl SearchResult {
    /// Build a result record from a resolved candidate
    pub fn from_candidate(candidate: &Value, label_field: &str, score: f64) -> Self {
        let record = match candidate {
            Value::Object(record) => record.clone(),
            other => {
                let mut record = Map::new();
                record.insert(label_field.to_string(), other.clone());
                record
            }
        };
        Self { record, score }
    }

    /// Attribute of the original candidate
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    /// Searchable text under `label_field`
    pub fn label(&self, label_field: &str) -> Option<&str> {
        self.record.get(label_field).and_then(Value::as_str)
    }

    /// Record with the score attribute set
    pub fn into_value(self) -> Value {
        let mut record = self.record;
        record.insert(SCORE_FIELD.to_string(), Value::from(self.score));
        Value::Object(record)
    }
}

impl Serialize for SearchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let attributes = self.record.iter().filter(|(key, _)| key.as_str() != SCORE_FIELD);
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in attributes {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(SCORE_FIELD, &self.score)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_candidate_text() {
        assert_eq!(candidate_text(&json!("Chocolate"), "label"), Some("Chocolate"));
        assert_eq!(
            candidate_text(&json!({"label": "Mars Bar", "id": "mars"}), "label"),
            Some("Mars Bar")
        );
        assert_eq!(candidate_text(&json!({"bar": "Mars Bar"}), "bar"), Some("Mars Bar"));
        assert_eq!(candidate_text(&json!({"bar": "Mars Bar"}), "label"), None);
        assert_eq!(candidate_text(&json!({"label": 42}), "label"), None);
        assert_eq!(candidate_text(&json!(7), "label"), None);
        assert_eq!(candidate_text(&json!(null), "label"), None);
    }

    #[test]
    fn test_resolve_texts_fails_fast() {
        let candidates = vec![json!("ok"), json!({}), json!(3)];
        match resolve_texts(&candidates, "label") {
            Err(Error::UnsearchableCandidate { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "label");
            }
            other => panic!("expected UnsearchableCandidate, got {:?}", other),
        }
    }

    #[test]
    fn test_result_from_bare_text() {
        let result = SearchResult::from_candidate(&json!("Dental"), "label", 0.5);
        assert_eq!(result.label("label"), Some("Dental"));
        assert_eq!(result.into_value(), json!({"label": "Dental", "score": 0.5}));
    }

    #[test]
    fn test_result_keeps_attributes() {
        let candidate = json!({"label": "Chocolate", "id": "choc", "tags": ["sweet"]});
        let result = SearchResult::from_candidate(&candidate, "label", 0.75);
        assert_eq!(result.get("id"), Some(&json!("choc")));

        let serialized = serde_json::to_value(&result).unwrap();
        assert_eq!(
            serialized,
            json!({"label": "Chocolate", "id": "choc", "tags": ["sweet"], "score": 0.75})
        );
    }

    #[test]
    fn test_computed_score_overrides_record_score() {
        let candidate = json!({"label": "x", "score": "stale"});
        let result = SearchResult::from_candidate(&candidate, "label", 1.0);
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({"label": "x", "score": 1.0}));
        assert_eq!(result.into_value(), json!({"label": "x", "score": 1.0}));
    }
}
