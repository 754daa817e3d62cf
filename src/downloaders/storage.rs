//! Writing a response body to the destination file

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::models::{AppError, AppResult};
use crate::utils::file_utils::format_bytes;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Create (or truncate) `path` and copy every chunk of `stream` into it.
///
/// Returns the number of bytes written. A failure part way through leaves the
/// partially written file in place.
pub async fn store<S>(mut stream: S, path: &Path) -> AppResult<u64>
where
    S: Stream<Item = AppResult<Bytes>> + Unpin,
{
    let mut file = File::create(path)
        .await
        .map_err(|e| AppError::storage(path, e))?;

    let mut written = 0u64;
    let mut last_update = Instant::now();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk)
            .await
            .map_err(|e| AppError::storage(path, e))?;
        written += chunk.len() as u64;

        if last_update.elapsed() >= PROGRESS_INTERVAL {
            debug!("Written {} to {}", format_bytes(written), path.display());
            last_update = Instant::now();
        }
    }

    file.flush().await.map_err(|e| AppError::storage(path, e))?;
    file.sync_all()
        .await
        .map_err(|e| AppError::storage(path, e))?;

    Ok(written)
}
