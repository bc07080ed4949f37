//! Page fetcher for job postings.
//!
//! Anything below 500 counts as content: login walls and soft-404 pages still
//! carry the title and company, so they go to the extractor.

use reqwest::{redirect::Policy, Client, Url};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::FetchConfig;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Could not resolve host: {0}")]
    Dns(String),

    #[error("Timed out fetching page")]
    Timeout,

    #[error("Remote server returned status {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if is_dns_error(&err) {
            let host = err
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or_default()
                .to_string();
            FetchError::Dns(host)
        } else {
            FetchError::Transport(err)
        }
    }
}

/// Walks the source chain looking for a resolver failure.
fn is_dns_error(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if is_dns_message(&e.to_string()) {
            return true;
        }
        source = e.source();
    }
    false
}

fn is_dns_message(message: &str) -> bool {
    let message = message.to_lowercase();
    [
        "dns error",
        "failed to lookup address",
        "name or service not known",
        "no such host",
        "nodename nor servname",
    ]
    .iter()
    .any(|needle| message.contains(needle))
}

#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub final_url: String,
    pub status: u16,
    pub html: String,
}

#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        info!("Fetching job posting: {url}");

        let response = self
            .client
            .get(url.clone())
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 500 {
            return Err(FetchError::Status(status));
        }

        let final_url = response.url().to_string();
        let html = response.text().await?;
        debug!("Fetched {} bytes from {final_url} (status {status})", html.len());

        Ok(FetchedPage {
            final_url,
            status,
            html,
        })
    }
}
