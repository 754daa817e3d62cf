//! Network collaborator used by the pipeline

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::core::models::AppResult;

/// Response body yielded chunk by chunk as the transport receives it
pub type ByteStream = BoxStream<'static, AppResult<Bytes>>;

#[async_trait]
pub trait MediaTransport: Send + Sync {
    /// GET `url` and buffer the whole body.
    async fn fetch(&self, url: &str) -> AppResult<Bytes>;

    /// GET `url` and hand back the body as a stream.
    async fn open_stream(&self, url: &str) -> AppResult<ByteStream>;
}
