// ABOUTME: Command-line entry point for the IdeaCenter API suite
// ABOUTME: Runs or lists scenarios and prints a table or JSON report with a meaningful exit code

use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, ContentArrangement, Table,
};
use ideacenter_client::{Config, IdeaCenterError};
use ideacenter_suite::{resolve_token, OutcomeStatus, RunOptions, SuiteReport, SuiteRunner};

/// Exit code for configuration or credential failures
const EXIT_FATAL: i32 = 2;

#[derive(Parser)]
#[command(name = "ideacenter-suite")]
#[command(about = "Ordered API scenarios for the IdeaCenter service")]
#[command(version)]
struct Cli {
    /// Override IDEACENTER_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scenario sequence
    Run {
        /// Only run these ranks (repeatable)
        #[arg(long = "only", value_name = "RANK")]
        only: Vec<u32>,

        /// Stop after the first failing scenario
        #[arg(long)]
        fail_fast: bool,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List scenarios in execution order
    List,
    /// Resolve credentials and print the bearer token
    Token,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let code = match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            EXIT_FATAL
        }
    };

    process::exit(code);
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(base_url: Option<&str>) -> Result<Config, IdeaCenterError> {
    let config = Config::from_env()?;
    match base_url {
        Some(url) => Ok(config.with_base_url(url)?),
        None => Ok(config),
    }
}

async fn execute(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::List => {
            list_scenarios()?;
            Ok(0)
        }
        Commands::Token => {
            let config = load_config(cli.base_url.as_deref())?;
            let token = resolve_token(&config, &config.credentials())
                .await
                .context("Failed to resolve credentials")?;
            println!("{}", token);
            Ok(0)
        }
        Commands::Run {
            only,
            fail_fast,
            json,
        } => {
            let config = load_config(cli.base_url.as_deref())?;
            let options = RunOptions {
                only: (!only.is_empty()).then(|| only.into_iter().collect()),
                fail_fast,
            };
            let runner = SuiteRunner::with_default_sequence()?.with_options(options)?;

            let report = runner
                .run_with_config(&config)
                .await
                .context("Suite aborted")?;

            if json {
                println!("{}", report.to_json()?);
            } else {
                print_report(&report);
            }

            Ok(if report.is_success() { 0 } else { 1 })
        }
    }
}

fn list_scenarios() -> anyhow::Result<()> {
    let runner = SuiteRunner::with_default_sequence()?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Scenario"]);

    for scenario in runner.scenarios() {
        table.add_row(vec![scenario.rank().to_string(), scenario.name().to_string()]);
    }

    println!("{}", table);
    Ok(())
}

fn print_report(report: &SuiteReport) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Scenario", "Result", "Time", "Details"]);

    for outcome in &report.outcomes {
        let (label, color) = match outcome.status {
            OutcomeStatus::Passed => ("PASS", Color::Green),
            OutcomeStatus::Failed => ("FAIL", Color::Red),
            OutcomeStatus::Skipped => ("SKIP", Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(outcome.rank),
            Cell::new(outcome.name),
            Cell::new(label).fg(color),
            Cell::new(format!("{} ms", outcome.elapsed_ms)),
            Cell::new(outcome.message.as_deref().unwrap_or("")),
        ]);
    }

    println!("{}", table);

    let summary = format!(
        "{} passed, {} failed, {} skipped",
        report.passed(),
        report.failed(),
        report.skipped()
    );
    if report.is_success() {
        println!("{} {}", "✓".green().bold(), summary.green());
    } else {
        println!("{} {}", "✗".red().bold(), summary.red());
    }
}
