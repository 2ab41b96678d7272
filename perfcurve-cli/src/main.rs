mod config;
mod output;
mod scores;

use clap::Parser;
use log::{info, warn};
use perfcurve_core::{enumerate_with, TiePolicy};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::PerfcurveConfig;
use crate::output::{CurveFormat, Summary};

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "perfcurve", version, about = "Precision-recall curves and average precision from classifier scores")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Evaluate scores of positive and negative examples
    Eval(EvalArgs),
    /// Create a default config file at ~/.config/perfcurve/config.toml
    Init,
}

#[derive(Parser)]
struct EvalArgs {
    /// File with one score per line for the positive examples ("-" for stdin)
    positives: PathBuf,

    /// File with one score per line for the negative examples ("-" for stdin)
    negatives: PathBuf,

    /// Write the curve table to this file
    output: Option<PathBuf>,

    /// Curve layout: "pr", "confusion", "roc" or "json"
    #[arg(long)]
    format: Option<String>,

    /// Tied scores: "distinct" (one row per example) or "collapse" (one row per score)
    #[arg(long, value_parser = parse_ties)]
    ties: Option<TiePolicy>,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Show progress during execution
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/perfcurve/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Log to stderr. `--verbose` raises the default level; RUST_LOG still wins.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn parse_ties(name: &str) -> Result<TiePolicy, String> {
    match name {
        "distinct" => Ok(TiePolicy::Distinct),
        "collapse" => Ok(TiePolicy::Collapse),
        other => Err(format!("unknown tie policy \"{other}\", use \"distinct\" or \"collapse\"")),
    }
}

fn parse_format(name: &str) -> CurveFormat {
    CurveFormat::from_name(name).unwrap_or_else(|| {
        bail(format!("Unknown format \"{name}\". Use \"pr\", \"confusion\", \"roc\" or \"json\"."))
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Eval(args) => {
            init_logging(args.verbose);
            run_eval(args);
        }
        Commands::Init => {
            init_logging(false);
            let path = config::default_path();
            config::write_template(&path)
                .unwrap_or_else(|e| bail(format!("Failed to create config at {}: {e}", path.display())));
            println!("Created config at {}", path.display());
            println!("Edit it to set your default format and tie policy.");
        }
    }
}

fn run_eval(args: EvalArgs) {
    // Load config file, merge with CLI args (CLI wins)
    let config_path = args.config.clone().unwrap_or_else(config::default_path);
    let cfg = PerfcurveConfig::load(&config_path);

    let format = parse_format(args.format.as_deref().or(cfg.format.as_deref()).unwrap_or("pr"));
    let ties = args.ties.or(cfg.ties).unwrap_or_default();
    let json = args.json || cfg.json.unwrap_or(false);

    let stdin = PathBuf::from(scores::STDIN_PATH);
    if args.positives == stdin && args.negatives == stdin {
        bail("Only one of the score inputs can be read from stdin.");
    }

    let positives = scores::read_scores(&args.positives).unwrap_or_else(|e| bail(e));
    let negatives = scores::read_scores(&args.negatives).unwrap_or_else(|e| bail(e));

    if positives.is_empty() {
        warn!("no positive scores: recall is undefined and average precision is 0");
    }
    if negatives.is_empty() {
        warn!("no negative scores: false positive rate is undefined");
    }

    let path = enumerate_with(&positives, &negatives, ties);
    info!(
        "{} positives, {} negatives, {} thresholds ({:?} ties)",
        path.positives(),
        path.negatives(),
        path.len(),
        ties,
    );

    if let Some(ref output_path) = args.output {
        let file = File::create(output_path)
            .unwrap_or_else(|e| bail(format!("Failed to create {}: {e}", output_path.display())));
        let mut writer = BufWriter::new(file);
        output::write_curve(&mut writer, &path, format)
            .unwrap_or_else(|e| bail(format!("Failed to write {}: {e}", output_path.display())));
        info!("wrote {:?} curve to {}", format, output_path.display());
    }

    let summary = Summary::from_path(&path);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if json {
        output::write_summary_json(&mut out, &summary)
    } else {
        output::write_summary(&mut out, &summary)
    };
    written
        .and_then(|_| out.flush())
        .unwrap_or_else(|e| bail(format!("Failed to write summary: {e}")));
}
