//! Pure parsing of a scoring reply into a `ScoreMap`.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{CriterionMatching, MAX_SCORE};
use crate::llm_client::strip_json_fences;

/// Criterion -> validated score in `0..=MAX_SCORE`.
pub type ScoreMap = HashMap<String, u8>;

#[derive(Debug, Error)]
pub enum ScoreParseError {
    #[error("reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("reply is JSON but not an object")]
    NotAnObject,

    #[error("score for '{criterion}' is not numeric: {value}")]
    NonNumeric { criterion: String, value: String },
}

/// Parses the model reply. The requested criteria are authoritative: extra keys are ignored
/// and missing ones score 0. One unusable value fails the whole reply.
pub fn parse_scores(
    reply: &str,
    criteria: &[String],
    matching: CriterionMatching,
) -> Result<ScoreMap, ScoreParseError> {
    let value: Value = serde_json::from_str(strip_json_fences(reply))?;
    let object = value.as_object().ok_or(ScoreParseError::NotAnObject)?;

    let mut scores = ScoreMap::with_capacity(criteria.len());
    for criterion in criteria {
        let score = match lookup(object, criterion, matching) {
            Some(raw) => coerce_score(raw).ok_or_else(|| ScoreParseError::NonNumeric {
                criterion: criterion.clone(),
                value: raw.to_string(),
            })?,
            None => 0,
        };
        scores.insert(criterion.clone(), score);
    }
    Ok(scores)
}

/// Every requested criterion at 0.
pub fn zero_scores(criteria: &[String]) -> ScoreMap {
    criteria.iter().map(|c| (c.clone(), 0)).collect()
}

fn lookup<'a>(
    object: &'a Map<String, Value>,
    criterion: &str,
    matching: CriterionMatching,
) -> Option<&'a Value> {
    if let Some(value) = object.get(criterion) {
        return Some(value);
    }
    match matching {
        CriterionMatching::Exact => None,
        CriterionMatching::CaseInsensitive => {
            let wanted = criterion.trim().to_lowercase();
            object
                .iter()
                .find(|(key, _)| key.trim().to_lowercase() == wanted)
                .map(|(_, value)| value)
        }
    }
}

/// Numbers, numeric strings and booleans are accepted; fractions truncate toward zero and
/// the result is clamped to `0..=MAX_SCORE`.
pub fn coerce_score(value: &Value) -> Option<u8> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => return None,
    };
    if !number.is_finite() {
        return None;
    }
    Some(number.trunc().clamp(0.0, f64::from(MAX_SCORE)) as u8)
}
