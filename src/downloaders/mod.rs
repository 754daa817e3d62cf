//! Download engines and implementations
//!
//! The pipeline talks to the network only through [`MediaTransport`]; the reqwest
//! client lives in [`HttpTransport`].

pub mod http_downloader;
pub mod storage;
pub mod transport;

// Re-export downloaders
pub use http_downloader::*;
pub use storage::*;
pub use transport::*;
