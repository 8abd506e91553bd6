use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Extensions accepted for resumes and job descriptions.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Upper bound of the per-criterion scoring scale.
pub const MAX_SCORE: u8 = 5;

/// What the batch builder does when a single file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchFailurePolicy {
    /// First failing file aborts the whole batch; no report is written.
    #[default]
    Abort,
    /// Failing files are recorded and the remaining files are still scored.
    BestEffort,
}

impl FromStr for BatchFailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "best_effort" | "best-effort" => Ok(Self::BestEffort),
            other => anyhow::bail!("unknown batch failure policy '{other}'"),
        }
    }
}

/// How criterion names in the request are matched against keys in the model reply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CriterionMatching {
    #[default]
    Exact,
    /// Falls back to a trimmed, lowercased comparison when no exact key exists.
    CaseInsensitive,
}

impl FromStr for CriterionMatching {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "case_insensitive" | "case-insensitive" => Ok(Self::CaseInsensitive),
            other => anyhow::bail!("unknown criteria matching mode '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if the LLM credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub llm_timeout_secs: u64,
    pub batch_failure_policy: BatchFailurePolicy,
    pub criteria_matching: CriterionMatching,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "temp/uploads".to_string())
                .into(),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "temp/output".to_string())
                .into(),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 25 * 1024 * 1024)?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 120)?,
            batch_failure_policy: parse_env("BATCH_FAILURE_POLICY", BatchFailurePolicy::Abort)?,
            criteria_matching: parse_env("CRITERIA_MATCHING", CriterionMatching::Exact)?,
        })
    }

    /// Creates the upload and report directories. Called once at startup.
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.upload_dir, &self.output_dir] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
        }
        Ok(())
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{key} has an invalid value '{raw}': {e}")),
        Err(_) => Ok(default),
    }
}
