//! Search results and the exact-match heuristic

use crate::mode::SearchMode;
use crate::ReelfindError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered result rows returned by the service. Order is preserved as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResult(Vec<String>);

impl SearchResult {
    pub fn new(items: Vec<String>) -> Self {
        Self(items)
    }

    /// Interpret a decoded response body.
    ///
    /// The body must be a JSON array. String elements are taken as-is; any
    /// other element is kept as its JSON text, since rows are not validated.
    pub fn from_json(body: Value) -> crate::Result<Self> {
        match body {
            Value::Array(items) => Ok(Self(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            other => Err(ReelfindError::MalformedBody {
                message: format!("expected a JSON array, got {}", json_kind(&other)),
            }),
        }
    }

    /// Parse a raw response body
    pub fn from_body(body: &str) -> crate::Result<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| ReelfindError::MalformedBody {
                message: e.to_string(),
            })?;
        Self::from_json(value)
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a SearchResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Whether `results` are an exact hit for `value`, as opposed to suggestions.
///
/// Only title searches can produce suggestions: the service falls back to
/// fuzzy title matches when the title is unknown, so a first row that differs
/// (case-insensitively) from the input means there was no exact hit. Empty
/// results and every other mode count as exact.
pub fn is_exact_match(mode: SearchMode, value: &str, results: &SearchResult) -> bool {
    if mode != SearchMode::Title {
        return true;
    }
    match results.first() {
        Some(first) => first.to_lowercase() == value.to_lowercase(),
        None => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(items: &[&str]) -> SearchResult {
        SearchResult::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_title_exact_match() {
        assert!(is_exact_match(SearchMode::Title, "Matrix", &rows(&["Matrix"])));
        assert!(is_exact_match(SearchMode::Title, "the matrix", &rows(&["The Matrix", "Zion"])));
    }

    #[test]
    fn test_title_suggestions() {
        let results = rows(&["The Matrix", "Matrix Reloaded"]);
        assert!(!is_exact_match(SearchMode::Title, "Matrx", &results));
        assert_eq!(results.first(), Some("The Matrix"));
    }

    #[test]
    fn test_empty_results_are_exact() {
        for mode in SearchMode::all() {
            assert!(is_exact_match(mode, "anything", &SearchResult::default()));
        }
    }

    #[test]
    fn test_other_modes_always_exact() {
        let results = rows(&["Inception", "Interstellar"]);
        for mode in [
            SearchMode::Rating,
            SearchMode::Budget,
            SearchMode::Country,
            SearchMode::Language,
        ] {
            assert!(is_exact_match(mode, "7.5", &results));
        }
    }

    #[test]
    fn test_unicode_case_folding() {
        assert!(is_exact_match(SearchMode::Title, "ÉCOLE", &rows(&["école"])));
    }

    #[test]
    fn test_from_json_keeps_order() {
        let results = SearchResult::from_json(json!(["b", "a", "c"])).unwrap();
        assert_eq!(results.items(), &["b", "a", "c"]);
    }

    #[test]
    fn test_from_json_non_string_rows_verbatim() {
        let results = SearchResult::from_json(json!(["Up", 42, null, {"t": 1}])).unwrap();
        assert_eq!(results.items(), &["Up", "42", "null", r#"{"t":1}"#]);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        let err = SearchResult::from_json(json!({"error": "boom"})).unwrap_err();
        assert!(matches!(err, ReelfindError::MalformedBody { .. }));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_from_body_rejects_invalid_json() {
        assert!(matches!(
            SearchResult::from_body("<html>"),
            Err(ReelfindError::MalformedBody { .. })
        ));
        assert_eq!(SearchResult::from_body("[]").unwrap(), SearchResult::default());
    }
}
