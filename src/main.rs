mod cli;
mod config;
mod core;
mod loader;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use core::report::JsonReport;
use core::{render, summarize};
use std::path::PathBuf;

enum View {
    Dashboard,
    Platform(String),
    Issues,
    Wins,
    Plan,
    Budget,
    Benchmarks,
    Creative,
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Audit(args) => run_view(args, View::Dashboard),
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!("warning: --config is ignored by `adaudit init`; writing ./adaudit.toml");
            }

            let path = std::env::current_dir()?.join("adaudit.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
        Commands::Platform(args) => run_view(args.run, View::Platform(args.id)),
        Commands::Issues(args) => run_view(args, View::Issues),
        Commands::Wins(args) => run_view(args, View::Wins),
        Commands::Plan(args) => run_view(args, View::Plan),
        Commands::Budget(args) => run_view(args, View::Budget),
        Commands::Benchmarks(args) => run_view(args, View::Benchmarks),
        Commands::Creative(args) => run_view(args, View::Creative),
    }
}

fn run_view(args: RunArgs, view: View) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;

    let report_path: Option<PathBuf> = args
        .report
        .or_else(|| loaded.config.report.path.clone());
    let report = loader::load_report(report_path.as_deref())?;
    let summary = summarize(&report, &loaded.config);

    let output_json = args.json || loaded.config.general.json;

    match view {
        View::Dashboard => {
            if output_json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonReport::from(&summary))?
                );
            } else {
                render::print_dashboard(&summary);
            }
            // only the full audit gates the exit code
            return if summary.exit.ok { Ok(0) } else { Ok(1) };
        }
        View::Platform(id) => {
            let Some(platform) = summary
                .platforms
                .iter()
                .find(|p| p.platform.as_str() == id.to_lowercase())
            else {
                let known: Vec<&str> = summary
                    .platforms
                    .iter()
                    .map(|p| p.platform.as_str())
                    .collect();
                bail!(
                    "no platform \"{}\" in this report (present: {})",
                    id,
                    known.join(", ")
                );
            };

            if output_json {
                println!("{}", serde_json::to_string_pretty(platform)?);
            } else {
                render::print_platform(platform);
            }
        }
        View::Issues => {
            if output_json {
                println!("{}", serde_json::to_string_pretty(&summary.top_issues)?);
            } else {
                render::print_highlight_list(
                    "Top Issues",
                    "No critical issues found.",
                    &summary.top_issues,
                );
            }
        }
        View::Wins => {
            if output_json {
                println!("{}", serde_json::to_string_pretty(&summary.quick_wins)?);
            } else {
                render::print_highlight_list(
                    "Quick Wins",
                    "No quick wins identified.",
                    &summary.quick_wins,
                );
            }
        }
        View::Plan => {
            if output_json {
                let actionable: Vec<&core::report::CheckResult> = report
                    .all_checks()
                    .map(|(_, check)| check)
                    .filter(|check| {
                        matches!(
                            check.status,
                            core::report::CheckStatus::Fail | core::report::CheckStatus::Warning
                        )
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&actionable)?);
            } else {
                render::print_plan(&report);
            }
        }
        View::Budget => {
            if output_json {
                println!("{}", serde_json::to_string_pretty(&report.budget)?);
            } else {
                render::print_budget(&report.budget);
            }
        }
        View::Benchmarks => {
            if output_json {
                println!("{}", serde_json::to_string_pretty(&report.benchmarks)?);
            } else {
                render::print_benchmarks(&report.benchmarks);
            }
        }
        View::Creative => {
            if output_json {
                println!("{}", serde_json::to_string_pretty(&report.creative_alerts)?);
            } else {
                render::print_creative(&report.creative_alerts);
            }
        }
    }

    Ok(0)
}
