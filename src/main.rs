// Command-line front end for the repair engine. The library does the work;
// this binary only decodes the input, runs the parallel repair driver, and
// encodes the result. Every failure prints a diagnostic to stderr and exits
// with code 1; nothing is ever written to the output path on failure.

use anyhow::Context;
use clap::Parser;
use descratch::core_modules::utils::image_io::image_io;
use descratch::parallel_pipeline::repair_parallel;
use descratch::pipeline::Repairer;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "descratch")]
#[command(about = "Remove a uniform scratch-marker color from a damaged image")]
struct Args {
    /// Damaged input image; the pixel at its top-left corner is taken as the
    /// defect color
    input: PathBuf,

    /// Path the repaired PNG is written to
    output: PathBuf,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => {
            // Help and version output; not a failure.
            let _ = err.print();
            std::process::exit(0);
        }
    };

    if let Err(err) = run(args).await {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let input = image_io::read_file(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    info!(
        "loaded {} ({}x{})",
        args.input.display(),
        input.bounds().width(),
        input.bounds().height()
    );

    let repairer = Repairer::from_origin(&input)?;
    let repaired = repair_parallel(&repairer, input).await?;

    image_io::write_file(&args.output, &repaired)
        .with_context(|| format!("failed to save {}", args.output.display()))?;
    info!("wrote {}", args.output.display());
    Ok(())
}
