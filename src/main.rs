use anyhow::Result;
use clap::Parser;
use pinout_header::{run, Config};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pinout_header")]
#[command(about = "Generate a C header of pin #defines from a pinout CSV")]
struct Args {
    /// Pinout CSV; the first row is a header and is skipped
    #[arg(default_value = "Pinout.csv")]
    input: PathBuf,

    /// Header file to create or overwrite
    #[arg(short, long, default_value = "PINOUT.h")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let level = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) load + emit ──────────────────────────────────────────────
    let config = Config {
        input: args.input,
        output: args.output,
    };
    info!(input = %config.input.display(), output = %config.output.display(), "startup");

    match run(&config) {
        Ok(summary) => {
            info!(
                defines = summary.defines,
                blank_lines = summary.blank_lines,
                "all done"
            );
            Ok(())
        }
        Err(e) => {
            error!("generating {} failed: {:#}", config.output.display(), e);
            Err(e)
        }
    }
}
