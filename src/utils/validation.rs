//! URL and input validation utilities

use url::Url;

use crate::core::models::{AppError, AppResult};

/// Parse `url` and require an http(s) scheme
pub fn validate_url(url: &str) -> AppResult<Url> {
    let parsed = Url::parse(url)?;
    if is_http_scheme(parsed.scheme()) {
        Ok(parsed)
    } else {
        Err(AppError::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            parsed.scheme(),
            url
        )))
    }
}

fn is_http_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}
