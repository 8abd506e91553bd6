//! Batch Report Builder: scores a set of resumes against one criteria list and writes the
//! results as a downloadable CSV.

pub mod handlers;
pub mod writer;

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::BatchFailurePolicy;
use crate::errors::AppError;
use crate::extraction::{is_blank, is_supported};
use crate::scoring::{ResumeScorer, ScoreMap};
use crate::state::AppState;
use crate::uploads::{extract_upload, UploadedFile};

/// One scored candidate. Immutable once built.
#[derive(Debug, Clone)]
pub struct CandidateRow {
    name: String,
    scores: ScoreMap,
    total: u32,
}

impl CandidateRow {
    pub fn new(name: String, scores: ScoreMap) -> Self {
        let total = scores.values().map(|s| u32::from(*s)).sum();
        Self {
            name,
            scores,
            total,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self, criterion: &str) -> u8 {
        self.scores.get(criterion).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

/// A file that failed under the best-effort policy.
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub filename: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub filename: String,
    pub total_processed: usize,
    pub created_at: DateTime<Local>,
    pub failures: Vec<FileFailure>,
}

/// Splits the comma-separated criteria field. Blank pieces are dropped; duplicates are kept.
pub fn parse_criteria_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

pub struct BatchReportBuilder {
    scorer: ResumeScorer,
    upload_dir: PathBuf,
    output_dir: PathBuf,
    policy: BatchFailurePolicy,
}

impl BatchReportBuilder {
    pub fn new(
        scorer: ResumeScorer,
        upload_dir: PathBuf,
        output_dir: PathBuf,
        policy: BatchFailurePolicy,
    ) -> Self {
        Self {
            scorer,
            upload_dir,
            output_dir,
            policy,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(
            state.scorer(),
            state.config.upload_dir.clone(),
            state.config.output_dir.clone(),
            state.config.batch_failure_policy,
        )
    }

    /// Scores every supported file sequentially and writes one report.
    /// Nothing touches the filesystem before the request is validated.
    pub async fn build_report(
        &self,
        files: &[UploadedFile],
        criteria_raw: &str,
    ) -> Result<ReportSummary, AppError> {
        let criteria = parse_criteria_input(criteria_raw);
        if criteria.is_empty() || files.is_empty() {
            return Err(AppError::InvalidRequest(
                "Both criteria and files are required".to_string(),
            ));
        }

        let mut rows = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for file in files {
            if !is_supported(&file.filename) {
                info!("Skipping unsupported file '{}'", file.filename);
                continue;
            }

            match self.process_file(file, &criteria).await {
                Ok(row) => {
                    info!(
                        "Scored '{}': total {} across {} criteria",
                        file.filename,
                        row.total(),
                        criteria.len()
                    );
                    rows.push(row);
                }
                Err(e) => match self.policy {
                    BatchFailurePolicy::Abort => {
                        warn!("Aborting batch: '{}' failed: {e}", file.filename);
                        return Err(e);
                    }
                    BatchFailurePolicy::BestEffort => {
                        warn!("Recording failure for '{}': {e}", file.filename);
                        failures.push(FileFailure {
                            filename: file.filename.clone(),
                            error: e.to_string(),
                        });
                    }
                },
            }
        }

        if rows.is_empty() {
            return Err(AppError::NoFilesProcessed);
        }

        let created_at = Local::now();
        let total_processed = rows.len();
        let output_dir = self.output_dir.clone();
        let artifact = tokio::task::spawn_blocking(move || {
            writer::write_report(&output_dir, &criteria, &rows, &created_at)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Report writer aborted: {e}")))??;

        info!(
            "Wrote report {} ({} candidates, {} failures)",
            artifact.path.display(),
            total_processed,
            failures.len()
        );

        Ok(ReportSummary {
            filename: artifact.filename,
            total_processed,
            created_at,
            failures,
        })
    }

    async fn process_file(
        &self,
        file: &UploadedFile,
        criteria: &[String],
    ) -> Result<CandidateRow, AppError> {
        let text = extract_upload(&self.upload_dir, file).await?;
        if is_blank(&text) {
            return Err(AppError::NoContent);
        }
        let scores = self.scorer.score(&text, criteria).await?;
        Ok(CandidateRow::new(file.stem(), scores))
    }
}
