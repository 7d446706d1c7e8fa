use crate::core::report::{CategoryScore, CheckResult, CheckStatus, Grade, ScoredPlatform};

// Evaluated top-down, first satisfied minimum wins. The 0.0 floor guarantees
// every finite score resolves to a grade.
pub const GRADE_THRESHOLDS: [(f64, Grade, &str); 5] = [
    (90.0, Grade::A, "Excellent"),
    (75.0, Grade::B, "Good"),
    (60.0, Grade::C, "Needs Improvement"),
    (40.0, Grade::D, "Poor"),
    (0.0, Grade::F, "Critical"),
];

pub fn score_category(checks: &[CheckResult], category: &str, weight: f64) -> CategoryScore {
    let mut earned = 0.0;
    let mut possible = 0.0;
    let mut total_checks = 0;
    let mut passed = 0;
    let mut warnings = 0;
    let mut failed = 0;
    let mut na = 0;

    for check in checks.iter().filter(|c| c.category == category) {
        total_checks += 1;

        // N/A counts toward the category total but carries no score mass
        let Some(points) = check.status.points() else {
            na += 1;
            continue;
        };

        let sev = check.severity.weight();
        possible += sev;
        earned += points * sev;

        match check.status {
            CheckStatus::Pass => passed += 1,
            CheckStatus::Warning => warnings += 1,
            _ => failed += 1,
        }
    }

    CategoryScore {
        name: category.to_string(),
        weight,
        score: if possible > 0.0 {
            earned / possible * 100.0
        } else {
            0.0
        },
        total_checks,
        passed,
        warnings,
        failed,
        na,
    }
}

pub fn score_platform(categories: &[CategoryScore]) -> f64 {
    weighted_mean(categories.iter().map(|cat| (cat.score, cat.weight)))
}

// Account-level roll-up: platform scores weighted by budget share. When no
// share information exists the platforms count equally.
pub fn score_overall(platforms: &[ScoredPlatform]) -> f64 {
    let share_total: f64 = platforms.iter().map(|p| p.budget_share).sum();
    if share_total > 0.0 {
        weighted_mean(platforms.iter().map(|p| (p.score, p.budget_share)))
    } else if platforms.is_empty() {
        0.0
    } else {
        platforms.iter().map(|p| p.score).sum::<f64>() / platforms.len() as f64
    }
}

fn weighted_mean(pairs: impl Iterator<Item = (f64, f64)>) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (value, weight) in pairs {
        weighted_sum += value * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

pub fn resolve_grade(score: f64) -> Grade {
    for (min, grade, _) in GRADE_THRESHOLDS {
        if score >= min {
            return grade;
        }
    }
    Grade::F
}

pub fn grade_label(grade: Grade) -> &'static str {
    GRADE_THRESHOLDS
        .iter()
        .find(|(_, candidate, _)| *candidate == grade)
        .map(|(_, _, label)| *label)
        .unwrap_or("Unknown")
}
