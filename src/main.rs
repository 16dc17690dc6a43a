mod cli;
mod config;
mod error;
mod markup;
mod page;
mod report;
mod scan;
mod scoring;
mod types;

use crate::error::QuizError;
use crate::page::{PageController, SubmissionOutcome};
use crate::types::config::QuizConfig;
use crate::types::report::SubmissionRecord;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INCOMPLETE: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn load_quiz_config(path: &std::path::Path) -> Result<QuizConfig, QuizError> {
    let root = config::config_root(path);
    Ok(config::load_config(&root)?.unwrap_or_default())
}

fn run(cli: cli::Cli) -> Result<i32, QuizError> {
    info!("quizscore v{}", env!("CARGO_PKG_VERSION"));
    match cli.command {
        cli::Commands::Render(cmd) => {
            if !cmd.path.is_file() {
                return Err(QuizError::PathNotFound(cmd.path.display().to_string()));
            }
            let markdown = std::fs::read_to_string(&cmd.path)?;
            let rendered = markup::render_page(&markdown);
            match &cmd.output {
                Some(out) => {
                    std::fs::write(out, &rendered.text)?;
                    println!("rendered {} quiz(zes) to {}", rendered.quizzes, out.display());
                }
                None => print!("{}", rendered.text),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Inspect(cmd) => {
            let pages = scan::discover_pages(&cmd.path)?;
            let cfg = load_quiz_config(&cmd.path)?;
            let feedback = cfg.feedback_classes();

            let mut reports = Vec::with_capacity(pages.len());
            for path in &pages {
                let model = scan::load_page(path, &feedback)?;
                let controller = PageController::initialize(model, &cfg);
                reports.push(report::build_report(&controller, Vec::new()));
            }

            let rendered = report::render_all(&reports, output_format(&cmd.format))?;
            println!("{rendered}");

            if reports.iter().all(|page| page.quizzes.is_empty()) {
                warn!(path = %cmd.path.display(), "no quizzes found");
                Ok(exit_code::INCOMPLETE)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Score(cmd) => {
            if !cmd.path.is_file() {
                return Err(QuizError::PathNotFound(cmd.path.display().to_string()));
            }
            let cfg = load_quiz_config(&cmd.path)?;
            let model = scan::load_page(&cmd.path, &cfg.feedback_classes())?;
            let plan = types::submission::load_submissions(&cmd.answers)?;
            let mut controller = PageController::initialize(model, &cfg);

            let mut records = Vec::with_capacity(plan.submission.len());
            for submission in plan.submission {
                let (selected, outcome) = match submission.selected {
                    Some(selected) => {
                        let outcome = controller.submit_selection(&submission.quiz, &selected)?;
                        (selected, outcome)
                    }
                    None => {
                        let current = controller.current_selection(&submission.quiz)?;
                        (current, controller.submit(&submission.quiz)?)
                    }
                };
                let (verdict, awarded) = match outcome {
                    SubmissionOutcome::Ignored => (None, 0),
                    SubmissionOutcome::Evaluated { verdict, awarded } => (Some(verdict), awarded),
                };
                records.push(SubmissionRecord {
                    quiz: submission.quiz,
                    selected,
                    verdict,
                    awarded,
                });
            }

            let page_report = report::build_report(&controller, records);
            let rendered = report::render(&page_report, output_format(&cmd.format))?;
            println!("{rendered}");

            if controller.all_answered() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::INCOMPLETE)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
