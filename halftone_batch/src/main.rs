mod batch;
mod cli;

use anyhow::Context;
use batch::{BatchRunner, collect_inputs};
use clap::Parser;
use halftone_grid::HalftonePipeline;
use log::{info, warn};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- 1. Argument Parsing & Setup ---
    let args = cli::Args::parse();
    let config = args.resolve_config().context("invalid halftone settings")?;
    let pipeline = HalftonePipeline::new(config)?;

    // --- 2. Input Discovery ---
    let inputs = collect_inputs(&args.input_dir)
        .with_context(|| format!("failed to scan {}", args.input_dir.display()))?;
    if inputs.is_empty() {
        warn!("No images found in {}", args.input_dir.display());
        return Ok(());
    }
    info!("Rendering {} images from {}", inputs.len(), args.input_dir.display());

    // --- 3. Main Processing Loop ---
    let summary = BatchRunner::new(&pipeline, &args.filled_dir, &args.outline_dir).run(&inputs);

    if !summary.failed.is_empty() {
        anyhow::bail!("{} of {} images failed", summary.failed.len(), inputs.len());
    }
    Ok(())
}
