mod ordering;
mod parser;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pose_core::PoseSequence;
use pose_eval::{Evaluation, Evaluator, RuleBook};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pose-trainer")]
#[command(about = "Check exercise form from OpenPose keypoint sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rule book JSON file (defaults to the built-in rules)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a keypoint file
    Evaluate {
        /// Keypoint file written by `parse`
        #[arg(long)]
        file: PathBuf,

        /// Exercise to evaluate
        #[arg(long, default_value = "bicep_curl")]
        exercise: String,

        /// Write the full evaluation report as JSON
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Evaluate a folder of OpenPose JSON frames for one video
    EvaluateJson {
        #[arg(long)]
        folder: PathBuf,

        #[arg(long, default_value = "bicep_curl")]
        exercise: String,
    },

    /// Convert per-video OpenPose JSON folders into keypoint files
    Parse {
        #[arg(long, default_value = "poses")]
        input_folder: PathBuf,

        #[arg(long, default_value = "poses_compressed")]
        output_folder: PathBuf,
    },

    /// Evaluate every keypoint file in a folder
    Batch {
        #[arg(long)]
        folder: PathBuf,

        #[arg(long, default_value = "bicep_curl")]
        exercise: String,
    },

    /// Print the default rule book as JSON
    Rules,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let book = match &cli.rules {
        Some(path) => RuleBook::load(path)?,
        None => RuleBook::default(),
    };
    let evaluator = Evaluator::new(book);

    match cli.command {
        Commands::Evaluate {
            file,
            exercise,
            report,
        } => {
            let seq = parser::load_sequence(&file)?;
            let evaluation = evaluator.evaluate(&seq, &exercise)?;
            print_verdict(&evaluation);
            if let Some(path) = report {
                export_json(&evaluation, &path)?;
            }
        }
        Commands::EvaluateJson { folder, exercise } => {
            let frames = parser::parse_sequence(&folder)?;
            let seq = PoseSequence::from_frames(&frames)
                .with_context(|| format!("Cannot build pose sequence from {:?}", folder))?;
            print_verdict(&evaluator.evaluate(&seq, &exercise)?);
        }
        Commands::Parse {
            input_folder,
            output_folder,
        } => {
            let written = parser::convert_folders(&input_folder, &output_folder)?;
            println!("Wrote {} keypoint files to {:?}", written.len(), output_folder);
        }
        Commands::Batch { folder, exercise } => batch(&evaluator, &folder, &exercise)?,
        Commands::Rules => println!("{}", RuleBook::default().to_json()?),
    }

    Ok(())
}

fn print_verdict(evaluation: &Evaluation) {
    if evaluation.correct {
        println!("Exercise performed correctly:");
    } else {
        println!("Exercise could be improved:");
    }
    println!("{}", evaluation.feedback);
}

fn batch(evaluator: &Evaluator, folder: &Path, exercise: &str) -> Result<()> {
    let files = ordering::files_in_order(folder)?;

    let mut names = Vec::new();
    let mut sequences = Vec::new();
    let mut skipped = 0;
    for file in &files {
        match parser::load_sequence(file) {
            Ok(seq) => {
                names.push(file.clone());
                sequences.push(seq);
            }
            Err(e) => {
                skipped += 1;
                println!("{:?}: skipped ({:#})", file, e);
            }
        }
    }

    let results = evaluator.evaluate_batch(&sequences, exercise);

    let mut correct = 0;
    let mut failed = 0;
    for (name, result) in names.iter().zip(results) {
        match result {
            Ok(evaluation) => {
                if evaluation.correct {
                    correct += 1;
                }
                println!(
                    "{:?}: {}",
                    name,
                    if evaluation.correct { "correct" } else { "could be improved" }
                );
            }
            Err(e) => {
                failed += 1;
                println!("{:?}: error ({})", name, e);
            }
        }
    }

    println!(
        "Evaluated {} sequences: {} correct, {} to improve, {} errors, {} skipped",
        names.len(),
        correct,
        names.len() - correct - failed,
        failed,
        skipped
    );
    Ok(())
}

fn export_json(evaluation: &Evaluation, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(evaluation)
        .context("Failed to serialize evaluation report")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write report: {:?}", path))?;
    println!("Report saved: {:?}", path);
    Ok(())
}
