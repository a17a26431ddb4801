//! Process command - extract fields from a single card image.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use buletin_core::ExtractionRecord;

use super::{Method, build_extractor, load_config};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input card image (.jpg, .jpeg, .png)
    #[arg(required = true)]
    input: PathBuf,

    /// Extraction method
    #[arg(short, long, value_enum, default_value = "tesseract")]
    method: Method,

    /// API key for the vision-model method (falls back to OPENAI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON record
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extractor = build_extractor(args.method, args.api_key.as_deref(), &config)?;

    info!("Processing file: {}", args.input.display());

    let fields = extractor.extract(&args.input)?;
    let filename = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let record = ExtractionRecord::new(filename, fields);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&record)?,
        OutputFormat::Text => format_text(&record),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_text(record: &ExtractionRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!("Filename:  {}\n", record.filename));
    output.push_str(&format!("Nume:      {}\n", record.fields.nume));
    output.push_str(&format!("Domiciliu: {}\n", record.fields.domiciliu));
    output.push_str(&format!("CNP:       {}\n", record.fields.cnp));

    output
}
