use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "creditscore",
    version,
    about = "Estimate a FICO-like credit score from self-reported credit history"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate a profile and score it
    Score(ScoreCommand),
    /// Print the normalized score input for a profile
    Aggregate(AggregateCommand),
    /// Score an already normalized input record
    Evaluate(EvaluateCommand),
    /// Validate a profile without scoring it
    Check(CheckCommand),
    /// Write a sample profile
    Init(InitCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub profile: PathBuf,
    /// Defaults to `report.format` from config, then md
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct AggregateCommand {
    pub profile: PathBuf,
}

#[derive(Args)]
pub struct EvaluateCommand {
    pub input: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CheckCommand {
    pub profile: PathBuf,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
