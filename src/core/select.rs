use crate::core::report::{AuditReport, CheckResult, CheckStatus, PlatformId};
use serde::Serialize;

pub const MAX_HIGHLIGHTS: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCheck {
    pub platform_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformId>,
    pub check: CheckResult,
}

// Report-curated lists are authoritative; ranking over raw checks is only a
// fallback for reports that never filled them in.
pub fn select_top_issues(report: &AuditReport) -> Vec<SelectedCheck> {
    if !report.top_issues.is_empty() {
        return resolve_curated(report, &report.top_issues);
    }
    rank_checks(report, |check| check.status == CheckStatus::Fail)
}

pub fn select_quick_wins(report: &AuditReport) -> Vec<SelectedCheck> {
    if !report.quick_wins.is_empty() {
        return resolve_curated(report, &report.quick_wins);
    }
    rank_checks(report, |check| check.is_quick_win)
}

fn resolve_curated(report: &AuditReport, curated: &[CheckResult]) -> Vec<SelectedCheck> {
    curated
        .iter()
        .take(MAX_HIGHLIGHTS)
        .map(|check| {
            let owner = report
                .platforms
                .iter()
                .find(|platform| platform.checks.iter().any(|c| c.id == check.id));

            SelectedCheck {
                platform_name: owner.map(|p| p.name.clone()).unwrap_or_default(),
                platform: owner.map(|p| p.platform),
                check: check.clone(),
            }
        })
        .collect()
}

fn rank_checks(report: &AuditReport, keep: impl Fn(&CheckResult) -> bool) -> Vec<SelectedCheck> {
    let mut picked: Vec<SelectedCheck> = report
        .all_checks()
        .filter(|(_, check)| keep(check))
        .map(|(platform, check)| SelectedCheck {
            platform_name: platform.name.clone(),
            platform: Some(platform.platform),
            check: check.clone(),
        })
        .collect();

    // stable sort: equal severities keep platform-then-check encounter order
    picked.sort_by_key(|selected| selected.check.severity.rank());
    picked.truncate(MAX_HIGHLIGHTS);
    picked
}
