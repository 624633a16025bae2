//! # Built-Up Beam Designer CLI
//!
//! Single entry point for the design search.
//!
//! ```text
//! beam_cli [TARGET_LB] [--settings PATH] [--json PATH] [--verbose]
//! ```
//!
//! Without a target on the command line the load is read from stdin. The
//! compact text rendering goes to stdout followed by a readable summary;
//! progress and errors go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use beam_core::errors::DesignError;
use beam_core::file_io::{load_settings, save_report};
use beam_core::optimize::LbfgsMinimizer;
use beam_core::report::{render_summary, render_text, DesignReport};
use beam_core::search::{search_with, SearchProgress};
use beam_core::settings::SearchSettings;

const DEFAULT_TARGET_LB: f64 = 1_250.0;

/// Print a progress line every this many configurations
const PROGRESS_INTERVAL: usize = 500;

/// Find the built-up beam section whose failure loads match a target load
#[derive(Parser, Debug)]
#[command(name = "beam_cli", version, about)]
struct Cli {
    /// Target load in lb (prompted for when omitted)
    #[arg(value_name = "TARGET_LB", allow_negative_numbers = true)]
    target_lb: Option<f64>,

    /// JSON file with search settings
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Save the design report as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Print search progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn report_error(e: &DesignError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.settings {
        Some(path) => match load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                report_error(&e);
                return ExitCode::FAILURE;
            }
        },
        None => SearchSettings::default(),
    };

    let target_lb = cli.target_lb.unwrap_or_else(|| {
        prompt_f64(&format!("Target load (lb) [{}]: ", DEFAULT_TARGET_LB), DEFAULT_TARGET_LB)
    });

    let total = match settings.validate().and_then(|_| settings.combination_count()) {
        Ok(total) => total,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose {
        eprintln!("Searching {} configurations for a {:.1} lb target...", total, target_lb);
    }

    let mut log_progress = |progress: &SearchProgress| {
        if progress.evaluated % PROGRESS_INTERVAL == 0 || progress.evaluated == progress.total {
            eprintln!(
                "  [{}/{}] best residual {:.3} lb",
                progress.evaluated, progress.total, progress.best_residual
            );
        }
    };
    let observer: Option<&mut dyn FnMut(&SearchProgress)> =
        if cli.verbose { Some(&mut log_progress) } else { None };

    let result = match search_with(target_lb, &settings, &LbfgsMinimizer::default(), observer) {
        Ok(result) => result,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", render_text(&result));
    println!();
    println!("{}", render_summary(target_lb, &result));

    if let Some(path) = &cli.json {
        let report = DesignReport::new(target_lb, settings, result);
        if let Err(e) = save_report(&report, path) {
            report_error(&e);
            return ExitCode::FAILURE;
        }
        if cli.verbose {
            eprintln!("Report saved to {}", path.display());
        }
    }

    ExitCode::SUCCESS
}
