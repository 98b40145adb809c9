//! HTTP client for the recommendation service

use reelfind_core::{Config, ReelfindError, SearchError, SearchMode, SearchRequest, SearchResult};

pub struct SearchClient {
    base_url: String,
    client: reqwest::Client,
    strict_rating: bool,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            strict_rating: false,
        }
    }

    /// Build a client from config, applying the optional request timeout.
    pub fn from_config(config: &Config) -> reelfind_core::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout()? {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ReelfindError::Transport {
            message: e.to_string(),
        })?;

        Ok(Self {
            base_url: config.service.base_url.trim_end_matches('/').to_string(),
            client,
            strict_rating: config.search.strict_rating,
        })
    }

    /// Reject out-of-range or non-numeric rating input before sending.
    pub fn with_strict_rating(mut self, strict: bool) -> Self {
        self.strict_rating = strict;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The request `search` would send for this input
    pub fn request_for(&self, mode: SearchMode, value: &str) -> Result<SearchRequest, SearchError> {
        if self.strict_rating {
            SearchRequest::build_strict(mode, value)
        } else {
            Ok(SearchRequest::build(mode, value))
        }
    }

    /// Search by `mode` for `value`. Issues exactly one GET, no retries.
    pub async fn search(&self, mode: SearchMode, value: &str) -> Result<SearchResult, SearchError> {
        let request = self.request_for(mode, value)?;
        self.send(&request).await
    }

    pub async fn send(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        let url = format!("{}{}", self.base_url, request.path());
        tracing::debug!(%url, key = request.key, value = %request.value, "sending search");

        let resp = self
            .client
            .get(&url)
            .query(&[request.query_pair()])
            .send()
            .await
            .map_err(|e| ReelfindError::Transport {
                message: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ReelfindError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await.map_err(|e| ReelfindError::Transport {
            message: e.to_string(),
        })?;
        let results = SearchResult::from_body(&body)?;
        tracing::debug!(rows = results.len(), "search returned");
        Ok(results)
    }
}
