//! Network utilities and helpers

use reqwest::{Client, Proxy};

use crate::core::config::HttpConfig;
use crate::core::models::AppResult;

/// Build the HTTP client shared by every request of a run.
///
/// With the default config the client sends reqwest's default headers only.
pub fn build_client(config: &HttpConfig) -> AppResult<Client> {
    let mut builder = Client::builder();

    if let Some(user_agent) = config.user_agent.as_deref() {
        builder = builder.user_agent(user_agent);
    }

    if let Some(proxy) = config.proxy.as_deref() {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    Ok(builder.build()?)
}
