//! Core data models for the downloader pipeline

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

/// Player config embedded in the watch page as `ytplayer.config = {...}`

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    pub args: PlayerArgs,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerArgs {
    /// JSON document carried as a string; decoded later by the streaming data parser
    pub player_response: String,
}

impl PlayerConfig {
    pub fn player_response(&self) -> &str {
        &self.args.player_response
    }
}

/// One downloadable media variant
///
/// Only the URL and quality label are kept; every other upstream field is dropped.

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Format {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub quality_label: String,
}

/// `streamingData` sub-object of the player response

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    /// Progressive (muxed audio + video) formats
    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: Vec<Format>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub adaptive_formats: Vec<Format>,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pipeline stage an error originated from

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Transport,
    NotFound,
    Parse,
    Selection,
    Storage,
    Config,
}

/// Application error types

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Player config not found: {0}")]
    NotFound(String),

    #[error("Parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No formats available to download")]
    Selection,

    #[error("Storage error at {}: {}", .path.display(), .source)]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::InvalidUrl(err.to_string())
    }
}

impl AppError {
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Storage {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidUrl(_) | AppError::Transport(_) => ErrorKind::Transport,
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Parse(_) => ErrorKind::Parse,
            AppError::Selection => ErrorKind::Selection,
            AppError::Storage { .. } => ErrorKind::Storage,
            AppError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result type alias for application operations

pub type AppResult<T> = Result<T, AppError>;
