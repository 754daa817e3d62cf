//! Download pipeline
//!
//! page fetch -> player config -> streaming data -> format selection -> store.
//! Every stage runs to completion before the next one starts and the first error
//! is returned unchanged. The destination file is not touched until the last step.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::format_selector::{first_format, select_formats};
use crate::core::models::{AppResult, Format};
use crate::downloaders::storage::store;
use crate::downloaders::transport::MediaTransport;
use crate::parsers::player_config::extract_config;
use crate::parsers::streaming_data::parse_streaming_data;

/// Outcome of a completed download
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadReport {
    pub format: Format,
    pub destination: PathBuf,
    pub bytes_written: u64,
}

/// Runs the whole pipeline over one transport
pub struct VideoPipeline<T> {
    transport: T,
}

impl<T: MediaTransport> VideoPipeline<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the watch page and work out which format to download.
    pub async fn resolve_format(&self, page_url: &str) -> AppResult<Format> {
        info!("Fetching page: {}", page_url);
        let page = self.transport.fetch(page_url).await?;
        let html = String::from_utf8_lossy(&page);
        debug!("Page size: {} bytes", page.len());

        let config = extract_config(&html)?;
        let data = parse_streaming_data(config.player_response().as_bytes())?;
        let formats = select_formats(data);
        info!("Found {} candidate formats", formats.len());

        first_format(formats)
    }

    /// Download the first available format of `page_url` into `destination`.
    pub async fn download(&self, page_url: &str, destination: &Path) -> AppResult<DownloadReport> {
        let format = self.resolve_format(page_url).await?;

        let stream = self.transport.open_stream(&format.url).await?;
        let bytes_written = store(stream, destination).await?;
        info!(
            "Saved {} bytes to {}",
            bytes_written,
            destination.display()
        );

        Ok(DownloadReport {
            format,
            destination: destination.to_path_buf(),
            bytes_written,
        })
    }
}
