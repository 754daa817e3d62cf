//! Page and payload parsers
//!
//! Contains the extraction stages of the download pipeline.

pub mod player_config;
pub mod streaming_data;

// Re-export commonly used parsers
pub use player_config::*;
pub use streaming_data::*;
