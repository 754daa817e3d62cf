//! Embedded player config extraction
//!
//! Watch pages inline their player configuration as a script assignment:
//!
//! ```text
//! ;ytplayer.config = {"args":{"player_response":"..."}};ytplayer.load = ...
//! ```
//!
//! The object body is matched lazily so the capture ends at the first `};ytplayer`.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::core::models::{AppError, AppResult, PlayerConfig};

const PLAYER_CONFIG_PATTERN: &str = r";ytplayer\.config\s*=\s*(?P<config>\{.+?\});ytplayer";

static PLAYER_CONFIG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLAYER_CONFIG_PATTERN).expect("player config pattern is valid"));

/// Locate the raw JSON span of the embedded player config.
pub fn find_player_config(html: &str) -> AppResult<&str> {
    let captures = PLAYER_CONFIG_REGEX
        .captures(html)
        .ok_or_else(|| AppError::NotFound("no ytplayer.config assignment in page".to_string()))?;

    let span = captures
        .name("config")
        .map(|m| m.as_str())
        .ok_or_else(|| AppError::NotFound("empty ytplayer.config capture".to_string()))?;

    debug!("Found player config span ({} bytes)", span.len());
    Ok(span)
}

/// Extract and decode the embedded player config.
pub fn extract_config(html: &str) -> AppResult<PlayerConfig> {
    let span = find_player_config(html)?;
    let config: PlayerConfig = serde_json::from_str(span)?;
    Ok(config)
}
