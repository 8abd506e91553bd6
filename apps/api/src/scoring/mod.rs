//! Resume Scorer: scores one resume against a criteria list through the model.
//!
//! Reply parsing lives in `parser` as a pure function. The scorer absorbs parse failures into
//! an all-zero `ScoreMap`; only transport failures and empty replies reach the caller.

pub mod parser;
pub mod prompts;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::CriterionMatching;
use crate::errors::AppError;
use crate::llm_client::CompletionModel;
use crate::scoring::parser::{parse_scores, zero_scores};
use crate::scoring::prompts::{build_scoring_prompt, SCORING_SYSTEM};

pub use crate::scoring::parser::ScoreMap;

#[derive(Clone)]
pub struct ResumeScorer {
    llm: Arc<dyn CompletionModel>,
    matching: CriterionMatching,
}

impl ResumeScorer {
    pub fn new(llm: Arc<dyn CompletionModel>, matching: CriterionMatching) -> Self {
        Self { llm, matching }
    }

    pub async fn score(&self, resume_text: &str, criteria: &[String]) -> Result<ScoreMap, AppError> {
        let prompt = build_scoring_prompt(resume_text, criteria);
        let reply = self
            .llm
            .complete(&prompt, SCORING_SYSTEM)
            .await
            .map_err(|e| AppError::UpstreamFailure(format!("Scoring error: {e}")))?;

        if reply.is_empty() {
            return Err(AppError::EmptyModelResponse);
        }

        match parse_scores(&reply, criteria, self.matching) {
            Ok(scores) => {
                debug!("Parsed {} criterion scores", scores.len());
                Ok(scores)
            }
            Err(e) => {
                warn!("Error parsing scores, defaulting all criteria to 0: {e}");
                Ok(zero_scores(criteria))
            }
        }
    }
}
