// CLI front end for the batch converter: collects file paths and options,
// validates them up front, then drives a background batch run and renders
// its progress events. All conversion logic lives in the library.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use image_converter::{BatchEvent, BatchJob, BatchWorker, OutputFormat, parse_dimension};

#[derive(Parser, Debug)]
#[command(
    name = "image-converter",
    version,
    about = "Convert and resize PNG/JPG images in batch"
)]
struct Cli {
    /// Input image files, processed in order
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Output directory, created if absent (default: ~/Pictures)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Target width in pixels; resizing happens only when both width and
    /// height are given
    #[arg(long, value_name = "WIDTH")]
    width: Option<String>,

    /// Target height in pixels
    #[arg(long, value_name = "HEIGHT")]
    height: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "jpeg")]
    format: OutputFormat,

    /// Emit progress events as JSON lines instead of log output
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    // All input validation happens here, before any background work starts.
    let width = parse_dimension("width", cli.width.as_deref().unwrap_or(""))?;
    let height = parse_dimension("height", cli.height.as_deref().unwrap_or(""))?;

    let output_dir = match cli.output_dir {
        Some(dir) => dir,
        None => default_output_dir()?,
    };

    let job = BatchJob::new(cli.files, output_dir.clone(), width, height, cli.format)?;

    let (sender, receiver) = bounded(64);
    let handle = BatchWorker::new().spawn(job, sender)?;

    // The worker thread owns all blocking I/O; this loop only renders events,
    // in the order the worker emitted them.
    for event in receiver {
        if cli.json {
            println!("{}", serde_json::to_string(&event)?);
        } else {
            render_event(&event);
        }
    }

    let summary = handle.join()?;
    if !cli.json {
        info!(
            "Conversion complete! {}/{} files saved to {}",
            summary.succeeded,
            summary.total,
            output_dir.display()
        );
    }

    if summary.succeeded < summary.total {
        std::process::exit(1);
    }
    Ok(())
}

fn default_output_dir() -> Result<PathBuf> {
    dirs::picture_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Pictures")))
        .context("could not determine a default output directory")
}

fn render_event(event: &BatchEvent) {
    match event {
        BatchEvent::Progress {
            completed,
            total,
            current_file,
        } => {
            info!(
                "[{:>3}%] {}/{}: {}",
                event.percentage(),
                completed,
                total,
                current_file
            );
        }
        BatchEvent::FileError { file_name, error } => {
            warn!("Error converting {}: {}", file_name, error);
        }
        BatchEvent::Complete { .. } => {}
    }
}
