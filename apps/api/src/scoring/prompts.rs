// LLM prompt templates for resume scoring.

use crate::config::MAX_SCORE;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

pub const SCORING_SYSTEM: &str = "You are an expert HR professional with extensive \
    experience in technical hiring. You score resumes strictly against the criteria given \
    and answer in JSON.";

const RUBRIC: &str = "Scoring Guidelines:
5 - Exceptional match
4 - Strong match
3 - Good match
2 - Fair match
1 - Poor match
0 - No match";

/// Builds the scoring prompt. Criterion names are JSON-escaped in the reply template so that
/// quotes or backslashes inside a name cannot break the expected shape.
pub fn build_scoring_prompt(resume_text: &str, criteria: &[String]) -> String {
    let criteria_lines = criteria
        .iter()
        .map(|c| format!("- {c}"))
        .collect::<Vec<_>>()
        .join("\n");

    let reply_template = criteria
        .iter()
        .map(|c| format!("  {}: <score>", json_key(c)))
        .collect::<Vec<_>>()
        .join(",\n");

    format!(
        "Evaluate this resume against each criterion on a scale of 0-{MAX_SCORE}.

{RUBRIC}

Criteria to evaluate:
{criteria_lines}

Resume Text:
{resume_text}

Provide the score for each criterion as one JSON object. Keys must be the exact criterion \
names above; values must be integers from 0 to {MAX_SCORE}:
{{
{reply_template}
}}

{JSON_ONLY_INSTRUCTION}"
    )
}

fn json_key(criterion: &str) -> String {
    serde_json::Value::from(criterion).to_string()
}
