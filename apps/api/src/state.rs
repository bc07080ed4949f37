use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::extraction::extractor::JobPostingExtractor;
use crate::extraction::fetcher::PageFetcher;
use crate::llm_client::LlmClient;
use crate::scoring::fit_scoring::FitScorer;
use crate::scoring::llm_scorer::LlmFitScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// AI fit tier. `None` without an API key; handlers then use keywords only.
    pub llm_fit_scorer: Option<Arc<dyn FitScorer>>,
    pub extractor: Arc<JobPostingExtractor>,
}

impl AppState {
    /// Wires clients from configuration. Fails only if an HTTP client cannot
    /// be built (TLS backend initialisation).
    pub fn from_config(config: Config) -> Result<Self> {
        let llm = config
            .llm
            .as_ref()
            .map(LlmClient::new)
            .transpose()
            .context("Failed to build LLM HTTP client")?;

        let fetcher = PageFetcher::new(&config.fetch).context("Failed to build page fetcher")?;

        let llm_fit_scorer = llm
            .clone()
            .map(|client| Arc::new(LlmFitScorer::new(client)) as Arc<dyn FitScorer>);

        let extractor = Arc::new(JobPostingExtractor::new(
            fetcher,
            llm,
            config.extract.clone(),
        ));

        Ok(Self {
            config,
            llm_fit_scorer,
            extractor,
        })
    }
}
