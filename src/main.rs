//! rambutan - generate .pptx files from JSON slide descriptions

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rambutan::{build_presentation, PresentationSpec};

#[derive(Parser)]
#[command(name = "rambutan")]
#[command(version, about = "Generate PowerPoint files from structured slide data", long_about = None)]
#[command(after_help = "EXAMPLES:
    rambutan slides.json deck.pptx    Render a JSON description to a .pptx file
    RUST_LOG=warn rambutan slides.json deck.pptx")]
struct Cli {
    /// Input JSON file with the presentation description
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output .pptx file
    #[arg(value_name = "OUTPUT")]
    output: String,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match run(&cli.input, &cli.output, cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(input: &str, output: &str, quiet: bool) -> rambutan::Result<()> {
    let json = std::fs::read_to_string(input)?;
    let spec: PresentationSpec = serde_json::from_str(&json)?;

    let deck = build_presentation(&spec);
    deck.save(output)?;

    if !quiet {
        println!("{}: {} slides", output, deck.slide_count());
    }

    Ok(())
}
