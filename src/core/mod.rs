//! Core business logic module
//!
//! This module contains the domain models, configuration, format selection and the
//! download pipeline that ties the stages together.

pub mod config;
pub mod format_selector;
pub mod models;
pub mod pipeline;

#[cfg(test)]
mod pipeline_integration_tests;

// Re-export commonly used types
pub use config::AppConfig;
pub use pipeline::{DownloadReport, VideoPipeline};
