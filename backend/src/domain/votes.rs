//! Vote-delta parsing shared by the article and comment PATCH paths.

use serde_json::Value;

use crate::domain::Error;

/// A signed vote increment.
///
/// Deltas are applied additively in a single statement
/// (`votes = votes + delta`), never as an absolute set, so concurrent
/// increments to the same resource commute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteDelta(i64);

impl VoteDelta {
    /// Extract `inc_votes` from a decoded JSON value.
    ///
    /// Accepts JSON integers and strings that parse as integers; fractional
    /// numbers and anything else are rejected, and a missing key returns
    /// `None` so callers can fall back to the query string.
    pub fn from_json(payload: &Value) -> Option<Result<Self, Error>> {
        let raw = payload.get("inc_votes")?;
        Some(Self::from_json_value(raw))
    }

    /// Parse a raw query-string value.
    ///
    /// # Errors
    /// Returns the `Invalid PATCH body` domain error when `raw` is not an
    /// integer.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        raw.parse::<i64>()
            .map(VoteDelta)
            .map_err(|_| Error::invalid_patch_body())
    }

    fn from_json_value(raw: &Value) -> Result<Self, Error> {
        if let Some(value) = raw.as_i64() {
            return Ok(VoteDelta(value));
        }
        // Query-string style payloads encode the number as a string.
        if let Some(text) = raw.as_str() {
            return Self::parse(text);
        }
        Err(Error::invalid_patch_body())
    }

    /// Underlying signed value.
    pub fn get(self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!({"inc_votes": 10}), 10)]
    #[case(json!({"inc_votes": -30}), -30)]
    #[case(json!({"inc_votes": "7"}), 7)]
    fn accepts_integer_deltas(#[case] payload: Value, #[case] expected: i64) {
        let delta = VoteDelta::from_json(&payload)
            .expect("key present")
            .expect("valid delta");
        assert_eq!(delta.get(), expected);
    }

    #[rstest]
    #[case(json!({"inc_votes": 1.5}))]
    #[case(json!({"inc_votes": "cat"}))]
    #[case(json!({"inc_votes": null}))]
    #[case(json!({"inc_votes": [1]}))]
    fn rejects_non_integer_deltas(#[case] payload: Value) {
        let err = VoteDelta::from_json(&payload)
            .expect("key present")
            .expect_err("must reject");
        assert_eq!(err.msg(), "Invalid PATCH body");
    }

    #[test]
    fn missing_key_defers_to_the_caller() {
        assert!(VoteDelta::from_json(&json!({"votes": 1})).is_none());
    }
}
