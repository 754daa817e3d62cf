//! ytgrab - Core Library
//!
//! Downloads one video from a watch page by reading the player config embedded in
//! the page, picking the first listed format and streaming it to a file.

pub mod core;
pub mod downloaders;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use core::{
    config::{AppConfig, HttpConfig},
    format_selector::{first_format, select_formats},
    models::{AppError, AppResult, ErrorKind, Format, PlayerConfig, StreamingData},
    pipeline::{DownloadReport, VideoPipeline},
};
pub use downloaders::{HttpTransport, MediaTransport};
pub use parsers::{extract_config, parse_streaming_data};
