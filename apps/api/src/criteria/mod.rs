//! Criteria Extractor: asks the model for ranking criteria in a job description and
//! cleans its free-text list into criterion labels.

pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod types;

use tracing::info;

use crate::criteria::parser::parse_criteria_reply;
use crate::criteria::prompts::{build_criteria_prompt, CRITERIA_SYSTEM};
use crate::criteria::types::CriteriaType;
use crate::errors::AppError;
use crate::llm_client::CompletionModel;

pub async fn extract_criteria(
    llm: &dyn CompletionModel,
    jd_text: &str,
    criteria_type: CriteriaType,
) -> Result<Vec<String>, AppError> {
    let prompt = build_criteria_prompt(jd_text, criteria_type);
    let reply = llm.complete(&prompt, CRITERIA_SYSTEM).await.map_err(|e| {
        AppError::CriteriaExtractionFailure(format!(
            "Error extracting {criteria_type} criteria: {e}"
        ))
    })?;

    let criteria = parse_criteria_reply(&reply);
    if criteria.is_empty() {
        return Err(AppError::NoCriteriaExtracted);
    }

    info!(
        "Extracted {} {} criteria from job description",
        criteria.len(),
        criteria_type
    );
    Ok(criteria)
}
