//! Batch command - process a folder of card images into a spreadsheet.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use buletin_core::{BatchError, BatchProgress, run_batch};

use crate::spreadsheet::{self, SheetFormat};

use super::{Method, build_extractor, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input folder containing card images
    #[arg(required = true)]
    input_dir: PathBuf,

    /// Output spreadsheet path
    #[arg(short, long)]
    output: PathBuf,

    /// Extraction method
    #[arg(short, long, value_enum, default_value = "tesseract")]
    method: Method,

    /// API key for the vision-model method (falls back to OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Spreadsheet format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: SheetFormat,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Configuration errors are detected before any processing starts.
    if !args.input_dir.is_dir() {
        anyhow::bail!("Input folder not found: {}", args.input_dir.display());
    }
    let extractor = build_extractor(args.method, args.api_key.as_deref(), &config)?;

    // The whole batch runs on one worker thread; progress flows back to the
    // interface over a channel, never through shared variables.
    let (progress_tx, progress_rx) = mpsc::channel::<BatchProgress>();
    let input_dir = args.input_dir.clone();
    let worker = thread::spawn(move || {
        run_batch(&input_dir, extractor.as_ref(), |progress| {
            let _ = progress_tx.send(progress.clone());
        })
    });

    let progress_bar = new_progress_bar();
    for progress in progress_rx {
        progress_bar.set_length(progress.total as u64);
        progress_bar.set_position(progress.index as u64 + 1);
        progress_bar.set_message(progress.status());
    }

    // The channel closes when the worker is done; collect its outcome.
    let outcome = worker
        .join()
        .map_err(|_| anyhow::anyhow!("batch worker panicked"))?;
    progress_bar.finish_and_clear();

    match outcome {
        Ok(records) => {
            spreadsheet::write(&args.output, args.format, &records)?;

            println!(
                "{} Processed {} cards in {:?}",
                style("✓").green(),
                records.len(),
                start.elapsed()
            );
            println!(
                "{} Results written to {}",
                style("✓").green(),
                args.output.display()
            );
            Ok(())
        }
        Err(BatchError::EmptyInput) => {
            println!(
                "{} No image files found in {}",
                style("ℹ").blue(),
                args.input_dir.display()
            );
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn new_progress_bar() -> ProgressBar {
    let progress_bar = ProgressBar::new(0);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );
    progress_bar
}
