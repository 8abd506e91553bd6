// LLM prompt templates for criteria extraction.

use crate::criteria::types::CriteriaType;
use crate::llm_client::prompts::RECRUITER_PERSONA;

pub const CRITERIA_SYSTEM: &str = RECRUITER_PERSONA;

/// Broad extraction. No formatting constraint: the reply parser copes with numbered or
/// bulleted lists.
const OVERALL_PROMPT_TEMPLATE: &str = "Extract key ranking criteria (skills, experience, \
certifications, qualifications) from the following job description:

{jd_text}";

/// Extraction scoped to one criteria type. Replace `{criteria_type}` and `{jd_text}`.
const TYPED_PROMPT_TEMPLATE: &str = "Extract key criteria related to {criteria_type} \
from the following job description. Return them as a list.
Only include the actual criteria without any explanatory text or headings:

{jd_text}";

pub fn build_criteria_prompt(jd_text: &str, criteria_type: CriteriaType) -> String {
    match criteria_type {
        CriteriaType::Overall => OVERALL_PROMPT_TEMPLATE.replace("{jd_text}", jd_text),
        other => TYPED_PROMPT_TEMPLATE
            .replace("{criteria_type}", other.as_str())
            .replace("{jd_text}", jd_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_prompt_is_broad_and_unformatted() {
        let prompt = build_criteria_prompt("Rust engineer wanted", CriteriaType::Overall);
        assert!(prompt.contains("skills, experience, certifications, qualifications"));
        assert!(prompt.ends_with("Rust engineer wanted"));
        assert!(!prompt.contains("Return them as a list"));
    }

    #[test]
    fn test_typed_prompt_names_type_and_asks_for_plain_list() {
        let prompt = build_criteria_prompt("JD body", CriteriaType::Tools);
        assert!(prompt.contains("related to tools"));
        assert!(prompt.contains("Return them as a list"));
        assert!(prompt.contains("without any explanatory text or headings"));
        assert!(prompt.ends_with("JD body"));
    }

    #[test]
    fn test_culture_prompt_uses_wire_value() {
        let prompt = build_criteria_prompt("JD", CriteriaType::Culture);
        assert!(prompt.contains("related to company culture"));
    }

    #[test]
    fn test_placeholders_in_jd_text_are_not_reexpanded() {
        let prompt = build_criteria_prompt("uses {criteria_type} literally", CriteriaType::Skills);
        assert!(prompt.contains("uses {criteria_type} literally"));
    }
}
