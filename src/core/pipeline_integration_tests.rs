//! Integration tests for the download pipeline
//!
//! The network is replaced by an in-memory transport that serves canned bodies and
//! records every URL requested, so the tests can check exactly which fetches happen.

#[cfg(test)]
mod tests {
    use super::super::models::*;
    use super::super::pipeline::*;
    use crate::downloaders::transport::{ByteStream, MediaTransport};
    use async_trait::async_trait;
    use bytes::Bytes;
    use futures_util::{stream, StreamExt};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tempfile::tempdir;

    const PAGE_URL: &str = "https://www.youtube.com/watch?v=abc";

    const SCENARIO_PAGE: &str = r#"<script>var x;ytplayer.config = {"args":{"player_response":"{\"streamingData\":{\"formats\":[{\"url\":\"http://x/a\",\"qualityLabel\":\"360p\"}],\"adaptiveFormats\":[]}}"}};ytplayer.more</script>"#;

    #[derive(Default)]
    struct RecordingTransport {
        bodies: HashMap<String, Vec<Bytes>>,
        requests: Mutex<Vec<String>>,
    }

    impl RecordingTransport {
        fn with_body(self, url: &str, body: impl Into<Bytes>) -> Self {
            self.with_chunks(url, vec![body.into()])
        }

        fn with_chunks(mut self, url: &str, chunks: Vec<Bytes>) -> Self {
            self.bodies.insert(url.to_string(), chunks);
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn respond(&self, url: &str) -> AppResult<Vec<Bytes>> {
            self.requests.lock().unwrap().push(url.to_string());
            self.bodies
                .get(url)
                .cloned()
                .ok_or_else(|| AppError::InvalidUrl(format!("no route for {}", url)))
        }
    }

    #[async_trait]
    impl MediaTransport for RecordingTransport {
        async fn fetch(&self, url: &str) -> AppResult<Bytes> {
            Ok(self.respond(url)?.concat().into())
        }

        async fn open_stream(&self, url: &str) -> AppResult<ByteStream> {
            let chunks = self.respond(url)?;
            Ok(stream::iter(chunks.into_iter().map(Ok)).boxed())
        }
    }

    fn page_with_player_response(player_response: &serde_json::Value) -> String {
        let config = serde_json::json!({
            "args": { "player_response": player_response.to_string() },
        });
        format!(";ytplayer.config = {};ytplayer.load();", config)
    }

    #[tokio::test]
    async fn test_end_to_end_scenario() {
        let transport = RecordingTransport::default()
            .with_body(PAGE_URL, SCENARIO_PAGE)
            .with_chunks(
                "http://x/a",
                vec![
                    Bytes::from_static(b"\x00\x01"),
                    Bytes::from_static(b"video"),
                    Bytes::from_static(b"\xff"),
                ],
            );
        let pipeline = VideoPipeline::new(transport);

        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("video.mp4");

        let report = pipeline.download(PAGE_URL, &destination).await.unwrap();

        assert_eq!(report.format.url, "http://x/a");
        assert_eq!(report.format.quality_label, "360p");
        assert_eq!(report.bytes_written, 8);
        assert_eq!(report.destination, destination);
        assert_eq!(std::fs::read(&destination).unwrap(), b"\x00\x01video\xff");

        let requests = pipeline.transport().requests();
        assert_eq!(requests, vec![PAGE_URL.to_string(), "http://x/a".to_string()]);
    }

    #[tokio::test]
    async fn test_progressive_format_wins_over_adaptive() {
        let player_response = serde_json::json!({
            "videoDetails": { "title": "test" },
            "streamingData": {
                "formats": [{ "url": "http://x/18", "qualityLabel": "360p" }],
                "adaptiveFormats": [{ "url": "http://x/137", "qualityLabel": "1080p" }],
            },
        });
        let page = page_with_player_response(&player_response);

        let transport = RecordingTransport::default()
            .with_body(PAGE_URL, page)
            .with_body("http://x/18", Bytes::from_static(b"muxed"));
        let pipeline = VideoPipeline::new(transport);

        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("out.mp4");
        let report = pipeline.download(PAGE_URL, &destination).await.unwrap();

        assert_eq!(report.format.url, "http://x/18");
        assert_eq!(std::fs::read(&destination).unwrap(), b"muxed");
    }

    #[tokio::test]
    async fn test_adaptive_only_page() {
        let player_response = serde_json::json!({
            "streamingData": {
                "adaptiveFormats": [
                    { "url": "http://x/140", "mimeType": "audio/mp4" },
                    { "url": "http://x/137", "qualityLabel": "1080p" },
                ],
            },
        });
        let page = page_with_player_response(&player_response);

        let transport = RecordingTransport::default().with_body(PAGE_URL, page);
        let pipeline = VideoPipeline::new(transport);

        let format = pipeline.resolve_format(PAGE_URL).await.unwrap();
        assert_eq!(format.url, "http://x/140");
        assert_eq!(format.quality_label, "");
    }

    #[tokio::test]
    async fn test_empty_formats_fail_without_media_request() {
        let player_response = serde_json::json!({
            "streamingData": { "formats": [], "adaptiveFormats": [] },
        });
        let page = page_with_player_response(&player_response);

        let transport = RecordingTransport::default().with_body(PAGE_URL, page);
        let pipeline = VideoPipeline::new(transport);

        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("never.mp4");
        let err = pipeline.download(PAGE_URL, &destination).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Selection);
        assert_eq!(pipeline.transport().requests(), vec![PAGE_URL.to_string()]);
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_page_without_player_config() {
        let transport = RecordingTransport::default()
            .with_body(PAGE_URL, "<html><body>consent required</body></html>");
        let pipeline = VideoPipeline::new(transport);

        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("never.mp4");
        let err = pipeline.download(PAGE_URL, &destination).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(pipeline.transport().requests().len(), 1);
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_player_response_without_streaming_data() {
        let player_response = serde_json::json!({
            "playabilityStatus": { "status": "UNPLAYABLE" },
        });
        let page = page_with_player_response(&player_response);

        let transport = RecordingTransport::default().with_body(PAGE_URL, page);
        let pipeline = VideoPipeline::new(transport);

        let err = pipeline.resolve_format(PAGE_URL).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_player_response_that_is_not_json() {
        let page = r#";ytplayer.config = {"args":{"player_response":"<html>"}};ytplayer.load"#;
        let transport = RecordingTransport::default().with_body(PAGE_URL, page);
        let pipeline = VideoPipeline::new(transport);

        let err = pipeline.resolve_format(PAGE_URL).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[tokio::test]
    async fn test_invalid_utf8_outside_config_is_tolerated() {
        let mut page = b"\xff\xfe<html><title>\xc3\x28</title>".to_vec();
        page.extend_from_slice(SCENARIO_PAGE.as_bytes());
        page.extend_from_slice(b"\x80\xff</html>");

        let transport = RecordingTransport::default().with_body(PAGE_URL, page);
        let pipeline = VideoPipeline::new(transport);

        let format = pipeline.resolve_format(PAGE_URL).await.unwrap();
        assert_eq!(format.url, "http://x/a");
        assert_eq!(format.quality_label, "360p");
    }

    #[tokio::test]
    async fn test_page_fetch_error_is_propagated() {
        let pipeline = VideoPipeline::new(RecordingTransport::default());

        let err = pipeline.resolve_format(PAGE_URL).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidUrl(ref msg) if msg.contains(PAGE_URL)));
    }

    #[tokio::test]
    async fn test_storage_error_after_media_request() {
        let transport = RecordingTransport::default()
            .with_body(PAGE_URL, SCENARIO_PAGE)
            .with_body("http://x/a", Bytes::from_static(b"bytes"));
        let pipeline = VideoPipeline::new(transport);

        let temp_dir = tempdir().unwrap();
        let destination = temp_dir.path().join("no_such_dir").join("video.mp4");
        let err = pipeline.download(PAGE_URL, &destination).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(pipeline.transport().requests().len(), 2);
    }
}
