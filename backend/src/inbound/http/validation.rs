//! Shared validation helpers for inbound HTTP adapters.
//!
//! Mutation payloads arrive as raw bytes so this layer owns the full decode
//! path; letting the framework's JSON extractor reject a body would bypass
//! the `{"msg": …}` error contract.

use serde_json::Value;

use crate::domain::{Error, VoteDelta};

/// Resolve `inc_votes` from the request body, falling back to the query
/// string when the body is empty or lacks the key.
pub(crate) fn resolve_vote_delta(body: &[u8], query: Option<&str>) -> Result<VoteDelta, Error> {
    if !body.is_empty() {
        let payload: Value =
            serde_json::from_slice(body).map_err(|_| Error::invalid_patch_body())?;
        if let Some(parsed) = VoteDelta::from_json(&payload) {
            return parsed;
        }
    }
    match query {
        Some(raw) => VoteDelta::parse(raw),
        None => Err(Error::invalid_patch_body()),
    }
}

/// Decode a comment-creation body into JSON.
pub(crate) fn decode_post_body(body: &[u8]) -> Result<Value, Error> {
    if body.is_empty() {
        return Err(Error::invalid_post_body());
    }
    serde_json::from_slice(body).map_err(|_| Error::invalid_post_body())
}
