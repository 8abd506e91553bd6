// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Persona shared by every recruiting prompt.
pub const RECRUITER_PERSONA: &str = "You are an expert HR professional with extensive \
    experience in technical hiring and job description analysis.";

/// Instruction appended to prompts that must answer with bare JSON.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with a single JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";
