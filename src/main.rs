mod aggregate;
mod cli;
mod config;
mod engine;
mod error;
mod input;
mod report;
mod types;

use crate::error::ScoreError;
use crate::types::config::{ReportStyle, ScoreConfig};
use crate::types::report::ScoreReport;
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Config lives next to the file being scored.
fn config_for(path: &Path) -> Result<ScoreConfig, ScoreError> {
    let root = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    config::load_config(root)
}

fn output_format(flag: Option<cli::ReportFormat>, cfg: &ScoreConfig) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match cfg.report_style() {
            Some(ReportStyle::Json) => report::OutputFormat::Json,
            Some(ReportStyle::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn run(cli: cli::Cli) -> Result<i32, ScoreError> {
    match cli.command {
        cli::Commands::Score(cmd) => {
            let cfg = config_for(&cmd.profile)?;
            let profile = input::load_profile(&cmd.profile)?;
            let aggregation = aggregate::aggregate(&profile)?;
            let card = engine::evaluate(&aggregation.input, &cfg.weights())?;
            info!(score = card.overall, "estimated credit score");

            let score_report = ScoreReport::new(&card, Some(&aggregation), &cfg);
            let rendered = report::render(&score_report, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Aggregate(cmd) => {
            let profile = input::load_profile(&cmd.profile)?;
            let aggregation = aggregate::aggregate(&profile)?;
            println!("{}", serde_json::to_string_pretty(&aggregation.input)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Evaluate(cmd) => {
            let cfg = config_for(&cmd.input)?;
            let score_input = input::load_score_input(&cmd.input)?;
            let card = engine::evaluate(&score_input, &cfg.weights())?;
            info!(score = card.overall, "estimated credit score");

            let score_report = ScoreReport::new(&card, None, &cfg);
            let rendered = report::render(&score_report, output_format(cmd.format, &cfg))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let profile = input::load_profile(&cmd.profile)?;
            aggregate::aggregate(&profile)?;
            println!("check: ok ({} accounts)", profile.accounts.len());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            input::write_sample_profile(&cmd.path, cmd.force)?;
            println!("sample profile: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                ScoreError::InvalidInput(_) => exit_code::INVALID_INPUT,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
