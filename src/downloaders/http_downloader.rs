//! HTTP 传输实现
//!
//! 基于 reqwest 的单连接下载：
//! - 页面获取（完整读取响应体）
//! - 媒体流式下载（按块返回）
//!
//! 非 2xx 状态码不视为错误，响应体按原样返回。

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::core::config::HttpConfig;
use crate::core::models::{AppError, AppResult};
use crate::downloaders::transport::{ByteStream, MediaTransport};
use crate::utils::network::build_client;
use crate::utils::validation::validate_url;

/// reqwest 传输层，进程生命周期内复用同一个 Client
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// 根据配置创建传输层
    pub fn from_config(config: &HttpConfig) -> AppResult<Self> {
        Ok(Self::new(build_client(config)?))
    }

    /// 发送 GET 请求
    async fn get(&self, url: &str) -> AppResult<Response> {
        let url = validate_url(url)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP状态异常: {} - {}", status, response.url());
        }

        Ok(response)
    }
}

#[async_trait]
impl MediaTransport for HttpTransport {
    async fn fetch(&self, url: &str) -> AppResult<Bytes> {
        let response = self.get(url).await?;
        let body = response.bytes().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    async fn open_stream(&self, url: &str) -> AppResult<ByteStream> {
        let response = self.get(url).await?;
        if let Some(len) = response.content_length() {
            debug!("Content-Length: {}", len);
        }

        Ok(response
            .bytes_stream()
            .map(|chunk| chunk.map_err(AppError::from))
            .boxed())
    }
}
