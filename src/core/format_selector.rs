//! Format selection
//!
//! Progressive formats are listed before adaptive ones and the first entry wins.
//! No ranking by resolution, codec or size is applied.

use tracing::info;

use crate::core::models::{AppError, AppResult, Format, StreamingData};

/// Flatten both format lists into one ordered candidate list.
pub fn select_formats(data: StreamingData) -> Vec<Format> {
    let StreamingData {
        mut formats,
        adaptive_formats,
    } = data;

    formats.reserve(adaptive_formats.len());
    formats.extend(adaptive_formats);
    formats
}

/// Pick the download target from the candidate list.
pub fn first_format(formats: Vec<Format>) -> AppResult<Format> {
    let chosen = formats.into_iter().next().ok_or(AppError::Selection)?;

    info!(
        "Selected format {} ({})",
        chosen.url,
        if chosen.quality_label.is_empty() {
            "no quality label"
        } else {
            chosen.quality_label.as_str()
        }
    );
    Ok(chosen)
}
