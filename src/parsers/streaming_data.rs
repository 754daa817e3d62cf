//! Player response parsing
//!
//! The player response is a large document whose schema drifts over time. Only the
//! `streamingData` node is decoded into a typed record; everything around it stays an
//! untyped JSON tree, so changes elsewhere in the document never break parsing.

use serde_json::{Map, Value};
use tracing::debug;

use crate::core::models::{AppResult, StreamingData};

/// Key of the sub-object holding the format lists
pub const STREAMING_DATA_KEY: &str = "streamingData";

/// Decode the `streamingData` node of a player response.
///
/// A missing key is decoded as JSON `null`, which fails as a parse error.
///
/// The whole payload, unrelated fields included, goes through serde_json's default
/// nesting limit of 128 levels; anything deeper is rejected as a parse error.
pub fn parse_streaming_data(player_response: &[u8]) -> AppResult<StreamingData> {
    let mut response: Map<String, Value> = serde_json::from_slice(player_response)?;
    debug!("Player response has {} top-level keys", response.len());

    let node = response.remove(STREAMING_DATA_KEY).unwrap_or(Value::Null);
    let data: StreamingData = serde_json::from_value(node)?;

    debug!(
        "Streaming data: {} formats, {} adaptive formats",
        data.formats.len(),
        data.adaptive_formats.len()
    );
    Ok(data)
}
