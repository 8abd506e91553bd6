//! CSV serialization of batch results.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Local};
use tempfile::{NamedTempFile, PersistError};

use crate::report::CandidateRow;

pub const NAME_COLUMN: &str = "Candidate Name";
pub const TOTAL_COLUMN: &str = "Total Score";

const MAX_NAME_ATTEMPTS: u32 = 100;

/// A report file written to the output directory.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub filename: String,
    pub path: PathBuf,
}

/// `Candidate Name`, the criteria in request order, `Total Score`.
pub fn header(criteria: &[String]) -> Vec<String> {
    std::iter::once(NAME_COLUMN.to_string())
        .chain(criteria.iter().cloned())
        .chain(std::iter::once(TOTAL_COLUMN.to_string()))
        .collect()
}

pub fn report_filename(created_at: &DateTime<Local>) -> String {
    format!("resume_scores_{}.csv", created_at.format("%Y%m%d_%H%M%S"))
}

/// Writes the report once. A file of the same name is never overwritten; a numeric suffix is
/// appended instead.
pub fn write_report(
    output_dir: &Path,
    criteria: &[String],
    rows: &[CandidateRow],
    created_at: &DateTime<Local>,
) -> anyhow::Result<ReportArtifact> {
    persist_report(output_dir, &report_filename(created_at), |out| {
        write_csv(out, criteria, rows)
    })
}

fn write_csv(out: &mut File, criteria: &[String], rows: &[CandidateRow]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(header(criteria))?;
    for row in rows {
        let mut record = Vec::with_capacity(criteria.len() + 2);
        record.push(row.name().to_string());
        record.extend(criteria.iter().map(|c| row.score(c).to_string()));
        record.push(row.total().to_string());
        writer.write_record(&record)?;
    }
    writer.flush().context("Failed to flush report")?;
    Ok(())
}

/// Renders into a hidden temp file in `output_dir` and links it under its final name only once
/// rendering succeeded. On any error the temp file is dropped and nothing is left behind.
fn persist_report<F>(output_dir: &Path, base: &str, render: F) -> anyhow::Result<ReportArtifact>
where
    F: FnOnce(&mut File) -> anyhow::Result<()>,
{
    let mut staged = NamedTempFile::new_in(output_dir).with_context(|| {
        format!("Failed to stage report in '{}'", output_dir.display())
    })?;
    render(staged.as_file_mut())?;
    staged
        .as_file()
        .sync_all()
        .context("Failed to sync staged report")?;

    let stem = base.trim_end_matches(".csv");
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let filename = if attempt == 0 {
            base.to_string()
        } else {
            format!("{stem}_{attempt}.csv")
        };
        let path = output_dir.join(&filename);
        match staged.persist_noclobber(&path) {
            Ok(_) => return Ok(ReportArtifact { filename, path }),
            Err(PersistError { error, file }) if error.kind() == ErrorKind::AlreadyExists => {
                staged = file;
            }
            Err(PersistError { error, .. }) => {
                return Err(error)
                    .with_context(|| format!("Failed to persist report '{}'", path.display()));
            }
        }
    }
    anyhow::bail!("Could not find a free report name for '{base}'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::scoring::ScoreMap;
    use chrono::TimeZone;

    fn created_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn row(name: &str, scores: &[(&str, u8)]) -> CandidateRow {
        let map: ScoreMap = scores.iter().map(|(c, s)| (c.to_string(), *s)).collect();
        CandidateRow::new(name.to_string(), map)
    }

    fn criteria(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filename_has_second_granularity_timestamp() {
        assert_eq!(
            report_filename(&created_at()),
            "resume_scores_20240309_140507.csv"
        );
    }

    #[test]
    fn test_header_order() {
        assert_eq!(
            header(&criteria(&["Skills", "Experience"])),
            vec!["Candidate Name", "Skills", "Experience", "Total Score"]
        );
    }

    #[test]
    fn test_write_report_contents() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![
            row("alice", &[("Skills", 4), ("Experience", 3)]),
            row("bob, jr", &[("Skills", 1), ("Experience", 0)]),
        ];
        let artifact = write_report(
            dir.path(),
            &criteria(&["Skills", "Experience"]),
            &rows,
            &created_at(),
        )
        .unwrap();

        assert_eq!(artifact.filename, "resume_scores_20240309_140507.csv");
        let contents = std::fs::read_to_string(&artifact.path).unwrap();
        assert_eq!(
            contents,
            "Candidate Name,Skills,Experience,Total Score\nalice,4,3,7\n\"bob, jr\",1,0,1\n"
        );
    }

    #[test]
    fn test_duplicate_criteria_repeat_the_column() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![row("alice", &[("Rust", 4)])];
        let artifact = write_report(
            dir.path(),
            &criteria(&["Rust", "Rust"]),
            &rows,
            &created_at(),
        )
        .unwrap();
        let contents = std::fs::read_to_string(&artifact.path).unwrap();
        assert_eq!(contents, "Candidate Name,Rust,Rust,Total Score\nalice,4,4,4\n");
    }

    #[test]
    fn test_failed_render_leaves_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let err = persist_report(dir.path(), "resume_scores_20240309_140507.csv", |out| {
            out.write_all(b"Candidate Name,Rust,Total Score\nalice,")?;
            anyhow::bail!("No space left on device")
        })
        .unwrap_err();

        assert!(err.to_string().contains("No space left"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_report_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![row("alice", &[("Rust", 4)])];
        let first = write_report(dir.path(), &criteria(&["Rust"]), &rows, &created_at()).unwrap();
        let second = write_report(dir.path(), &criteria(&["Rust"]), &rows, &created_at()).unwrap();

        assert_eq!(first.filename, "resume_scores_20240309_140507.csv");
        assert_eq!(second.filename, "resume_scores_20240309_140507_1.csv");
        assert!(first.path.exists());
        assert!(second.path.exists());
    }
}
