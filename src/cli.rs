use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quizscore",
    version,
    about = "Inline documentation quiz generator and scorer"
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
    /// Render `<?quiz?>` blocks of a markdown page into quiz markup
    Render(RenderCommand),
    /// Scan a page, or a directory of pages, and report initial quiz state
    Inspect(InspectCommand),
    /// Replay answer submissions against a page and report the outcome
    Score(ScoreCommand),
}

#[derive(Args)]
pub struct RenderCommand {
    pub path: PathBuf,
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct InspectCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    #[arg(long)]
    pub answers: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
