use crate::core::report::AuditReport;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const SAMPLE_REPORT: &str = include_str!("data/sample-report.json");

// Decode failures surface here, before any scoring or rendering happens, so
// a bad document never produces partial output.
pub fn load_report(path: Option<&Path>) -> Result<AuditReport> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed reading report file {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed parsing report file {}", path.display()))
        }
        None => serde_json::from_str(SAMPLE_REPORT).context("bundled sample report is invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn bundled_sample_decodes() {
        let report = load_report(None).unwrap();
        assert_eq!(report.platforms.len(), 3);
        assert!(report.platforms.iter().all(|p| !p.checks.is_empty()));
        assert!(!report.budget.allocations.is_empty());
        assert!(!report.benchmarks.is_empty());
    }

    #[test]
    fn missing_report_file_is_an_error() {
        let path = PathBuf::from("definitely-not-here/report.json");
        let err = load_report(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed reading report file"));
    }
}
