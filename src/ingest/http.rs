// src/ingest/http.rs
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::ingest::types::{DocumentSource, FetchError, RawDocument};

/// Plain HTTP GET, one attempt per source.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, secs: Option<u64>) -> Self {
        self.timeout = secs.map(Duration::from_secs);
        self
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentSource for HttpFetcher {
    async fn fetch(&self, source: &str) -> Result<RawDocument, FetchError> {
        tracing::info!(source, "connecting to source");

        let mut req = self.client.get(source);
        if let Some(t) = self.timeout {
            req = req.timeout(t);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        tracing::debug!(source, bytes = text.len(), "source fetched");
        Ok(RawDocument {
            source: source.to_string(),
            text,
        })
    }
}
