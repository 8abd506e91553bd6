use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionModel;
use crate::scoring::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: `LlmClient`; tests: a scripted model.
    pub llm: Arc<dyn CompletionModel>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn CompletionModel>) -> Self {
        Self {
            llm,
            config: Arc::new(config),
        }
    }

    pub fn scorer(&self) -> ResumeScorer {
        ResumeScorer::new(self.llm.clone(), self.config.criteria_matching)
    }
}
