//! Document sources
//!
//! A [`DocumentSource`] produces the one JSON document a run works on.
//! The pipeline only sees this trait, so tests can inject fixtures.

use super::client::{parse_json_body, HttpClient, HttpClientConfig};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

/// Produces the source document for a run
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable origin, for logs
    fn describe(&self) -> String;

    /// Fetch and parse the document
    async fn fetch(&self) -> Result<JsonValue>;
}

/// Fetches the document with a single HTTP GET
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: HttpClient,
    url: Url,
}

impl HttpSource {
    /// Create a source for `url` with custom client settings
    pub fn with_config(url: &str, config: HttpClientConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::with_config(config)?,
            url: Url::parse(url)?,
        })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<JsonValue> {
        self.client.get_json(self.url.as_str()).await
    }
}

/// Reads a previously saved document from disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<JsonValue> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::FileNotFound {
                    path: self.path.display().to_string(),
                },
                _ => Error::Io(e),
            })?;
        parse_json_body(&body)
    }
}

/// Serves a document already held in memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    document: JsonValue,
}

impl StaticSource {
    /// Wrap `document`
    pub fn new(document: JsonValue) -> Self {
        Self { document }
    }
}

#[async_trait]
impl DocumentSource for StaticSource {
    fn describe(&self) -> String {
        "in-memory document".to_string()
    }

    async fn fetch(&self) -> Result<JsonValue> {
        Ok(self.document.clone())
    }
}
