use crate::core::report::{
    AuditReport, Budget, BenchmarkMetric, CategoryScore, CheckResult, CheckStatus, CreativeAlert,
    ScoredPlatform, Severity, StatusCounts, Summary,
};
use crate::core::score;
use crate::core::select::SelectedCheck;
use colored::Colorize;

pub fn print_dashboard(summary: &Summary) {
    println!(
        "Ad Account Audit — {} ({})",
        summary.business_type, summary.industry
    );
    println!("generated: {}", summary.generated_at);
    println!();
    println!(
        "Overall Health Score: {:.1}/100 ({} — {})",
        summary.score,
        summary.grade.colored(),
        score::grade_label(summary.grade)
    );
    println!(
        "{} checks: {} passed, {} warnings, {} failed, {} n/a",
        summary.counts.total,
        summary.counts.passed,
        summary.counts.warnings,
        summary.counts.failed,
        summary.counts.na
    );

    println!();
    println!("{}", "Platform Breakdown".bold());
    for platform in &summary.platforms {
        println!(
            "{:<16} {:>5.1}/100 ({})  {:.0}% of budget",
            platform.name,
            platform.score,
            platform.grade.colored(),
            platform.budget_share * 100.0
        );
        for category in &platform.categories {
            println!("    {}", category_line(category));
        }
    }

    println!();
    print_highlight_list("Top Issues", "No critical issues found.", &summary.top_issues);
    println!();
    print_highlight_list("Quick Wins", "No quick wins identified.", &summary.quick_wins);

    println!();
    if summary.exit.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", summary.exit.reason_line());
    }
}

pub fn print_platform(platform: &ScoredPlatform) {
    println!(
        "{} — {:.1}/100 ({} — {})",
        platform.name.as_str().bold(),
        platform.score,
        platform.grade.colored(),
        score::grade_label(platform.grade)
    );
    println!(
        "{} checks across {} categories, {:.0}% of total budget",
        platform.checks.len(),
        platform.categories.len(),
        platform.budget_share * 100.0
    );

    println!();
    println!("{}", "Categories".bold());
    for category in &platform.categories {
        println!("  {}", category_line(category));
    }

    println!();
    println!("{}", "Checks".bold());
    for check in &platform.checks {
        println!(
            "  [{}] {} ({}) [{}] {}",
            check.status.colored(),
            check.id,
            check.category,
            check.severity.colored(),
            check.check
        );
        if !check.finding.is_empty() {
            println!("      {}", check.finding);
        }
    }
}

pub fn print_highlight_list(title: &str, empty_message: &str, items: &[SelectedCheck]) {
    println!("{}", title.bold());
    if items.is_empty() {
        println!("  {}", empty_message);
        return;
    }

    for item in items {
        let origin = if item.platform_name.is_empty() {
            String::new()
        } else {
            format!(" ({})", item.platform_name)
        };
        println!(
            "  [{}] {}{} {}",
            item.check.severity.colored(),
            item.check.id,
            origin,
            item.check.check
        );
        if !item.check.finding.is_empty() {
            println!("      {}", item.check.finding);
        }
        println!("      -> fix: {}{}", item.check.recommendation, time_suffix(&item.check));
    }
}

pub fn print_plan(report: &AuditReport) {
    let counts = StatusCounts::from_checks(report.all_checks().map(|(_, check)| check));
    let actionable: Vec<(&str, &CheckResult)> = report
        .all_checks()
        .filter(|(_, check)| matches!(check.status, CheckStatus::Fail | CheckStatus::Warning))
        .map(|(platform, check)| (platform.name.as_str(), check))
        .collect();

    println!("{}", "Action Plan".bold());
    let progress = if counts.scorable() > 0 {
        counts.passed as f64 / counts.scorable() as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "{} of {} items addressed ({:.0}%)",
        counts.passed,
        counts.scorable(),
        progress
    );

    if actionable.is_empty() {
        println!();
        println!("Nothing left to action.");
        return;
    }

    for severity in [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ] {
        let mut section: Vec<(&str, &CheckResult)> = actionable
            .iter()
            .copied()
            .filter(|(_, check)| check.severity == severity)
            .collect();

        if section.is_empty() {
            continue;
        }

        // failures first, then id order, within each severity group
        section.sort_by(|(_, a), (_, b)| {
            let a_fail = a.status == CheckStatus::Fail;
            let b_fail = b.status == CheckStatus::Fail;
            b_fail.cmp(&a_fail).then_with(|| a.id.cmp(&b.id))
        });

        println!();
        println!("{} ({})", severity.colored(), section.len());
        for (platform_name, check) in section {
            println!(
                "  [{}] {} ({}) {}",
                check.status.colored(),
                check.id,
                platform_name,
                check.check
            );
            println!("      -> fix: {}{}", check.recommendation, time_suffix(check));
        }
    }
}

pub fn print_budget(budget: &Budget) {
    let total_recommended: f64 = budget
        .allocations
        .iter()
        .map(|alloc| alloc.recommended_spend)
        .sum();

    println!("{}", "Budget Analysis".bold());
    println!(
        "Total monthly: {}, recommended: {}",
        format_currency(budget.total_monthly),
        format_currency(total_recommended)
    );

    println!();
    for alloc in &budget.allocations {
        let delta_points = alloc.recommended_percent - alloc.current_percent;
        let delta_spend = alloc.recommended_spend - alloc.monthly_spend;
        println!(
            "{:<16} {:>3.0}% ({}) -> {:>3.0}% ({})  {}{:.0}pp ({}{})",
            alloc.platform.display_name(),
            alloc.current_percent,
            format_currency(alloc.monthly_spend),
            alloc.recommended_percent,
            format_currency(alloc.recommended_spend),
            if delta_points >= 0.0 { "+" } else { "" },
            delta_points,
            if delta_spend >= 0.0 { "+" } else { "" },
            format_currency(delta_spend)
        );
    }

    if !budget.scale_list.is_empty() {
        println!();
        println!("{}", "Scale".green().bold());
        for entry in &budget.scale_list {
            println!("  - {}", entry);
        }
    }

    if !budget.kill_list.is_empty() {
        println!();
        println!("{}", "Kill".red().bold());
        for entry in &budget.kill_list {
            println!("  - {}", entry);
        }
    }
}

pub fn print_benchmarks(benchmarks: &[BenchmarkMetric]) {
    println!("{}", "Benchmarks".bold());
    if benchmarks.is_empty() {
        println!("  No benchmark data in this report.");
        return;
    }

    for metric in benchmarks {
        let delta = match metric.delta_percent() {
            Some(delta) => format!(" ({}{:.1}%)", if delta >= 0.0 { "+" } else { "" }, delta),
            None => String::new(),
        };
        println!(
            "  [{}] {:<24} {} vs {}{}",
            metric.status().colored(),
            metric.metric,
            format_metric(metric.actual, &metric.unit),
            format_metric(metric.benchmark, &metric.unit),
            delta
        );
    }
}

pub fn print_creative(alerts: &[CreativeAlert]) {
    println!("{}", "Creative Analysis".bold());
    if alerts.is_empty() {
        println!("  No creative alerts.");
        return;
    }

    use crate::core::report::AlertKind;
    for kind in [
        AlertKind::Fatigue,
        AlertKind::MissingFormat,
        AlertKind::LowDiversity,
        AlertKind::SpecViolation,
    ] {
        let group: Vec<&CreativeAlert> = alerts.iter().filter(|a| a.kind == kind).collect();
        if group.is_empty() {
            continue;
        }

        println!();
        println!("{} ({})", kind.label(), group.len());
        for alert in group {
            println!(
                "  [{}] {} — {}",
                alert.severity.colored(),
                alert.platform.display_name(),
                alert.message
            );
            println!("      {}", alert.detail);
        }
    }
}

fn category_line(category: &CategoryScore) -> String {
    format!(
        "{:<22} {:>5.1}/100  weight {:.2}  [{} pass, {} warn, {} fail, {} n/a]",
        category.name,
        category.score,
        category.weight,
        category.passed,
        category.warnings,
        category.failed,
        category.na
    )
}

fn time_suffix(check: &CheckResult) -> String {
    match &check.estimated_time {
        Some(time) => format!(" (est. {})", time),
        None => String::new(),
    }
}

fn format_currency(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();

    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn format_metric(value: f64, unit: &str) -> String {
    match unit {
        "%" => format!("{value:.1}%"),
        "$" => format!("${value:.2}"),
        "x" => format!("{value:.1}x"),
        _ if value >= 1000.0 => format!("{:.1}k", value / 1000.0),
        _ => format!("{value:.2}"),
    }
}
