use crate::errors::FetchError;
use std::time::Duration;
use tracing::debug;

/// Thin client over the two government feeds. One outbound GET per feed, no
/// retries; the configured timeout is the only interruption mechanism.
pub struct FeedClient {
    http: reqwest::Client,
}

impl FeedClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    pub async fn fetch_aqhi_feed(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching AQHI feed");
        self.fetch_text(url).await
    }

    pub async fn fetch_temperature_feed(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching temperature feed");
        self.fetch_text(url).await
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Transport {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| FetchError::Body {
            url: url.to_string(),
            source: e,
        })
    }
}
