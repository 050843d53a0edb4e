use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use trace_namer::{Figure, Trace};

#[derive(Parser, Debug)]
#[command(name = "trace-namer")]
#[command(about = "Set plotly trace names and legend groups for batches of traces")]
struct Cli {
    /// JSON file with the trace batches to label
    file: PathBuf,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// No logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print the labeled traces on a single line
    #[arg(long)]
    compact: bool,
}

fn init_logging(cli: &Cli) {
    let builder = tracing_subscriber::fmt().with_writer(std::io::stderr);
    if std::env::var("RUST_LOG").is_ok() {
        builder
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    } else if cli.quiet {
        builder.with_env_filter("off").init();
    } else if cli.verbose {
        builder.with_env_filter("debug").init();
    } else {
        builder.with_env_filter("warn").init();
    }
}

fn run(cli: &Cli) -> Result<String> {
    let figure = Figure::from_file(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    let data = figure
        .label()
        .with_context(|| format!("failed to label traces from {}", cli.file.display()))?;
    info!(traces = data.len(), "labeled traces");
    Ok(render(&data, cli.compact)?)
}

fn render(data: &[Trace], compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    println!("{}", run(&cli)?);
    Ok(())
}
