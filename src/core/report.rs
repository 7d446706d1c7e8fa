use crate::config::{Config, FailOn};
use crate::core::select::SelectedCheck;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    // Score-mass multiplier. Strictly ordered Critical > High > Medium > Low.
    pub fn weight(self) -> f64 {
        match self {
            Self::Critical => 5.0,
            Self::High => 3.0,
            Self::Medium => 1.5,
            Self::Low => 0.5,
        }
    }

    // Sort key equivalent to descending weight(), without float comparisons.
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    pub fn meets_fail_on(self, fail_on: FailOn) -> bool {
        match fail_on {
            FailOn::None => false,
            FailOn::Critical => matches!(self, Self::Critical),
            FailOn::High => matches!(self, Self::Critical | Self::High),
            FailOn::Any => true,
        }
    }

    pub fn colored(self) -> String {
        use colored::Colorize;
        match self {
            Self::Critical => self.as_str().red().bold().to_string(),
            Self::High => self.as_str().yellow().bold().to_string(),
            Self::Medium => self.as_str().blue().bold().to_string(),
            Self::Low => self.as_str().dimmed().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    #[serde(rename = "PASS")]
    Pass,
    #[serde(rename = "WARNING")]
    Warning,
    #[serde(rename = "FAIL")]
    Fail,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl CheckStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warning => "WARNING",
            Self::Fail => "FAIL",
            Self::NotApplicable => "N/A",
        }
    }

    // Fraction of a check's severity weight that is earned. None means the
    // check carries no score mass at all (counted, never scored).
    pub fn points(self) -> Option<f64> {
        match self {
            Self::Pass => Some(1.0),
            Self::Warning => Some(0.5),
            Self::Fail => Some(0.0),
            Self::NotApplicable => None,
        }
    }

    pub fn colored(self) -> String {
        use colored::Colorize;
        match self {
            Self::Pass => self.as_str().green().bold().to_string(),
            Self::Warning => self.as_str().yellow().bold().to_string(),
            Self::Fail => self.as_str().red().bold().to_string(),
            Self::NotApplicable => self.as_str().dimmed().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    pub fn colored(self) -> String {
        use colored::Colorize;
        match self {
            Self::A => self.as_str().green().bold().to_string(),
            Self::B => self.as_str().green().to_string(),
            Self::C => self.as_str().yellow().bold().to_string(),
            Self::D => self.as_str().red().to_string(),
            Self::F => self.as_str().red().bold().to_string(),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    Google,
    Meta,
    Linkedin,
    Tiktok,
    Microsoft,
}

impl PlatformId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Meta => "meta",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
            Self::Microsoft => "microsoft",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google Ads",
            Self::Meta => "Meta Ads",
            Self::Linkedin => "LinkedIn Ads",
            Self::Tiktok => "TikTok Ads",
            Self::Microsoft => "Microsoft Ads",
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub id: String,
    pub check: String,
    pub category: String,
    pub severity: Severity,
    pub status: CheckStatus,
    pub finding: String,
    pub recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub is_quick_win: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub name: String,
    pub weight: f64,
    pub score: f64,
    pub total_checks: usize,
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub na: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformReport {
    pub platform: PlatformId,
    pub name: String,
    pub score: f64,
    pub grade: Grade,
    pub budget_share: f64,
    pub categories: Vec<CategoryScore>,
    pub checks: Vec<CheckResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAllocation {
    pub platform: PlatformId,
    pub current_percent: f64,
    pub recommended_percent: f64,
    pub monthly_spend: f64,
    pub recommended_spend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub total_monthly: f64,
    pub allocations: Vec<BudgetAllocation>,
    #[serde(default)]
    pub scale_list: Vec<String>,
    #[serde(default)]
    pub kill_list: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetric {
    pub metric: String,
    pub actual: f64,
    pub benchmark: f64,
    pub unit: String,
}

impl BenchmarkMetric {
    // A metric within 90% of its benchmark passes, within 75% warns,
    // anything lower fails. A zero benchmark cannot be rated.
    pub fn status(&self) -> CheckStatus {
        if self.benchmark == 0.0 {
            return CheckStatus::NotApplicable;
        }
        let ratio = self.actual / self.benchmark;
        if ratio >= 0.9 {
            CheckStatus::Pass
        } else if ratio >= 0.75 {
            CheckStatus::Warning
        } else {
            CheckStatus::Fail
        }
    }

    pub fn delta_percent(&self) -> Option<f64> {
        if self.benchmark == 0.0 {
            None
        } else {
            Some((self.actual - self.benchmark) / self.benchmark * 100.0)
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Fatigue,
    MissingFormat,
    LowDiversity,
    SpecViolation,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fatigue => "Creative Fatigue",
            Self::MissingFormat => "Missing Formats",
            Self::LowDiversity => "Low Diversity",
            Self::SpecViolation => "Spec Violations",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreativeAlert {
    pub platform: PlatformId,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub generated_at: String,
    pub business_type: String,
    pub industry: String,
    pub total_score: f64,
    pub total_grade: Grade,
    pub platforms: Vec<PlatformReport>,
    pub budget: Budget,
    pub benchmarks: Vec<BenchmarkMetric>,
    #[serde(default)]
    pub creative_alerts: Vec<CreativeAlert>,
    #[serde(default)]
    pub quick_wins: Vec<CheckResult>,
    #[serde(default)]
    pub top_issues: Vec<CheckResult>,
}

impl AuditReport {
    pub fn all_checks(&self) -> impl Iterator<Item = (&PlatformReport, &CheckResult)> {
        self.platforms
            .iter()
            .flat_map(|platform| platform.checks.iter().map(move |check| (platform, check)))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusCounts {
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub na: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn from_checks<'a>(checks: impl Iterator<Item = &'a CheckResult>) -> Self {
        let mut counts = Self::default();
        for check in checks {
            match check.status {
                CheckStatus::Pass => counts.passed += 1,
                CheckStatus::Warning => counts.warnings += 1,
                CheckStatus::Fail => counts.failed += 1,
                CheckStatus::NotApplicable => counts.na += 1,
            }
            counts.total += 1;
        }
        counts
    }

    // N/A checks are counted but not addressable, so they stay out of the
    // progress denominator.
    pub fn scorable(&self) -> usize {
        self.total - self.na
    }
}

#[derive(Debug, Clone)]
pub struct ExitStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl ExitStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSummary {
    pub fail_on: FailOn,
    pub min_score: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPlatform {
    pub platform: PlatformId,
    pub name: String,
    pub budget_share: f64,
    pub score: f64,
    pub grade: Grade,
    pub categories: Vec<CategoryScore>,
    pub checks: Vec<CheckResult>,
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub generated_at: String,
    pub business_type: String,
    pub industry: String,
    pub score: f64,
    pub grade: Grade,
    pub platforms: Vec<ScoredPlatform>,
    pub counts: StatusCounts,
    pub top_issues: Vec<SelectedCheck>,
    pub quick_wins: Vec<SelectedCheck>,
    pub config: ConfigSummary,
    pub exit: ExitStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonReport {
    pub generated_at: String,
    pub business_type: String,
    pub industry: String,
    pub score: f64,
    pub grade: Grade,
    pub label: String,
    pub counts: StatusCounts,
    pub platforms: Vec<ScoredPlatform>,
    pub top_issues: Vec<SelectedCheck>,
    pub quick_wins: Vec<SelectedCheck>,
    pub config: ConfigSummary,
}

impl From<&Summary> for JsonReport {
    fn from(summary: &Summary) -> Self {
        Self {
            generated_at: summary.generated_at.clone(),
            business_type: summary.business_type.clone(),
            industry: summary.industry.clone(),
            score: summary.score,
            grade: summary.grade,
            label: crate::core::score::grade_label(summary.grade).to_string(),
            counts: summary.counts.clone(),
            platforms: summary.platforms.clone(),
            top_issues: summary.top_issues.clone(),
            quick_wins: summary.quick_wins.clone(),
            config: summary.config.clone(),
        }
    }
}

pub fn evaluate_exit(score: f64, report: &AuditReport, cfg: &Config) -> ExitStatus {
    let mut reasons = Vec::new();

    if score < cfg.general.min_score {
        reasons.push(format!(
            "score {:.1} is below min_score {:.1}",
            score, cfg.general.min_score
        ));
    }

    if cfg.general.fail_on != FailOn::None {
        let tripped = report.all_checks().any(|(_, check)| {
            check.status == CheckStatus::Fail && check.severity.meets_fail_on(cfg.general.fail_on)
        });
        if tripped {
            reasons.push(match cfg.general.fail_on {
                FailOn::Critical => "found critical failed checks".to_string(),
                FailOn::High => "found high-or-critical failed checks".to_string(),
                FailOn::Any => "found failed checks".to_string(),
                FailOn::None => String::new(),
            });
        }
    }

    ExitStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;

    fn check(id: &str, severity: Severity, status: CheckStatus) -> CheckResult {
        CheckResult {
            id: id.to_string(),
            check: format!("check {id}"),
            category: "Tracking".to_string(),
            severity,
            status,
            finding: String::new(),
            recommendation: String::new(),
            estimated_time: None,
            is_quick_win: false,
        }
    }

    fn report_with(checks: Vec<CheckResult>) -> AuditReport {
        AuditReport {
            generated_at: "2025-11-18T09:30:00Z".to_string(),
            business_type: "B2B SaaS".to_string(),
            industry: "Software".to_string(),
            total_score: 0.0,
            total_grade: Grade::F,
            platforms: vec![PlatformReport {
                platform: PlatformId::Google,
                name: "Google Ads".to_string(),
                score: 0.0,
                grade: Grade::F,
                budget_share: 1.0,
                categories: Vec::new(),
                checks,
            }],
            budget: Budget {
                total_monthly: 0.0,
                allocations: Vec::new(),
                scale_list: Vec::new(),
                kill_list: Vec::new(),
            },
            benchmarks: Vec::new(),
            creative_alerts: Vec::new(),
            quick_wins: Vec::new(),
            top_issues: Vec::new(),
        }
    }

    fn config(fail_on: FailOn, min_score: f64) -> Config {
        Config {
            general: GeneralConfig {
                fail_on,
                min_score,
                json: false,
            },
            ..Config::default()
        }
    }

    #[test]
    fn severity_weights_strictly_descend() {
        let weights: Vec<f64> = [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ]
        .iter()
        .map(|s| s.weight())
        .collect();

        assert!(weights.windows(2).all(|w| w[0] > w[1]));
        assert!(weights.iter().all(|w| *w > 0.0));
    }

    #[test]
    fn status_points_match_scoring_table() {
        assert_eq!(CheckStatus::Pass.points(), Some(1.0));
        assert_eq!(CheckStatus::Warning.points(), Some(0.5));
        assert_eq!(CheckStatus::Fail.points(), Some(0.0));
        assert_eq!(CheckStatus::NotApplicable.points(), None);
    }

    #[test]
    fn status_serde_uses_wire_tokens() {
        let parsed: CheckStatus = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(parsed, CheckStatus::NotApplicable);
        assert_eq!(serde_json::to_string(&CheckStatus::Pass).unwrap(), "\"PASS\"");
        assert_eq!(
            serde_json::to_string(&CheckStatus::NotApplicable).unwrap(),
            "\"N/A\""
        );
    }

    #[test]
    fn check_result_parses_camel_case_payload() {
        let payload = r#"{
            "id": "G-02",
            "check": "Enhanced conversions enabled",
            "category": "Tracking",
            "severity": "High",
            "status": "WARNING",
            "finding": "Enhanced conversions are off",
            "recommendation": "Enable enhanced conversions",
            "estimatedTime": "15 min",
            "isQuickWin": true
        }"#;

        let parsed: CheckResult = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.estimated_time.as_deref(), Some("15 min"));
        assert!(parsed.is_quick_win);

        // both optional fields may be absent entirely
        let bare = r#"{
            "id": "G-03",
            "check": "Auto-tagging enabled",
            "category": "Tracking",
            "severity": "Medium",
            "status": "PASS",
            "finding": "",
            "recommendation": ""
        }"#;
        let parsed: CheckResult = serde_json::from_str(bare).unwrap();
        assert_eq!(parsed.estimated_time, None);
        assert!(!parsed.is_quick_win);
    }

    #[test]
    fn counts_cover_every_status() {
        let checks = vec![
            check("1", Severity::High, CheckStatus::Pass),
            check("2", Severity::High, CheckStatus::Pass),
            check("3", Severity::Low, CheckStatus::Warning),
            check("4", Severity::Critical, CheckStatus::Fail),
            check("5", Severity::Medium, CheckStatus::NotApplicable),
        ];

        let counts = StatusCounts::from_checks(checks.iter());
        assert_eq!(counts.passed, 2);
        assert_eq!(counts.warnings, 1);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.na, 1);
        assert_eq!(counts.total, 5);
        assert_eq!(counts.scorable(), 4);
    }

    #[test]
    fn benchmark_status_thresholds() {
        let metric = |actual: f64, benchmark: f64| BenchmarkMetric {
            metric: "CTR".to_string(),
            actual,
            benchmark,
            unit: "%".to_string(),
        };

        assert_eq!(metric(2.3, 2.4).status(), CheckStatus::Pass);
        assert_eq!(metric(2.0, 2.4).status(), CheckStatus::Warning);
        assert_eq!(metric(1.0, 2.4).status(), CheckStatus::Fail);
        assert_eq!(metric(1.0, 0.0).status(), CheckStatus::NotApplicable);
        assert_eq!(metric(1.0, 0.0).delta_percent(), None);

        let delta = metric(3.0, 2.4).delta_percent().unwrap();
        assert!((delta - 25.0).abs() < 1e-9);
    }

    #[test]
    fn exit_fails_below_min_score() {
        let report = report_with(vec![check("1", Severity::Low, CheckStatus::Pass)]);
        let exit = evaluate_exit(55.0, &report, &config(FailOn::None, 60.0));
        assert!(!exit.ok);
        assert!(exit.reason_line().contains("below min_score"));
    }

    #[test]
    fn fail_on_high_ignores_medium_failures() {
        let medium_fail = report_with(vec![check("1", Severity::Medium, CheckStatus::Fail)]);
        let exit = evaluate_exit(90.0, &medium_fail, &config(FailOn::High, 0.0));
        assert!(exit.ok);

        let critical_fail = report_with(vec![check("1", Severity::Critical, CheckStatus::Fail)]);
        let exit = evaluate_exit(90.0, &critical_fail, &config(FailOn::High, 0.0));
        assert!(!exit.ok);
    }

    #[test]
    fn fail_on_only_counts_fail_status() {
        // a critical WARNING is not a failed check
        let report = report_with(vec![check("1", Severity::Critical, CheckStatus::Warning)]);
        let exit = evaluate_exit(90.0, &report, &config(FailOn::Any, 0.0));
        assert!(exit.ok);
    }
}
