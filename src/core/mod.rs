pub mod render;
pub mod report;
pub mod score;
pub mod select;

use crate::config::Config;
use crate::core::report::{
    AuditReport, CategoryScore, ConfigSummary, PlatformReport, ScoredPlatform, StatusCounts,
    Summary,
};

// Rescores the document from its raw checks. Stored category/platform/total
// scores are producer hints only; curated quickWins/topIssues remain
// authoritative and pass through the selector untouched.
pub fn summarize(report: &AuditReport, cfg: &Config) -> Summary {
    let platforms: Vec<ScoredPlatform> = report.platforms.iter().map(score_platform_report).collect();

    let overall = score::score_overall(&platforms);
    let counts = StatusCounts::from_checks(report.all_checks().map(|(_, check)| check));
    let exit = report::evaluate_exit(overall, report, cfg);

    Summary {
        generated_at: report.generated_at.clone(),
        business_type: report.business_type.clone(),
        industry: report.industry.clone(),
        score: overall,
        grade: score::resolve_grade(overall),
        platforms,
        counts,
        top_issues: select::select_top_issues(report),
        quick_wins: select::select_quick_wins(report),
        config: ConfigSummary {
            fail_on: cfg.general.fail_on,
            min_score: cfg.general.min_score,
        },
        exit,
    }
}

fn score_platform_report(platform: &PlatformReport) -> ScoredPlatform {
    let categories: Vec<CategoryScore> = platform
        .categories
        .iter()
        .map(|cat| score::score_category(&platform.checks, &cat.name, cat.weight))
        .collect();

    let platform_score = score::score_platform(&categories);

    ScoredPlatform {
        platform: platform.platform,
        name: platform.name.clone(),
        budget_share: platform.budget_share,
        score: platform_score,
        grade: score::resolve_grade(platform_score),
        categories,
        checks: platform.checks.clone(),
    }
}
