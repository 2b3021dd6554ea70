//! # chatpulse CLI
//!
//! Command-line interface for the chatpulse library.

use std::fs;
use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatpulse::ChatpulseError;
use chatpulse::cli::Args;
use chatpulse::config::OutputConfig;
use chatpulse::core::FilterConfig;
use chatpulse::format::{to_format_string, write_to_format};
use chatpulse::pipeline::Pipeline;
use chatpulse::progress::stderr_progress;

fn main() {
    let args = <Args as ClapParser>::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chatpulse={}", args.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        eprintln!("   {}", e.hint());
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatpulseError> {
    let started = Instant::now();
    debug!("chatpulse v{} starting", env!("CARGO_PKG_VERSION"));

    let mut filter = FilterConfig::new();
    if let Some(after) = &args.after {
        filter = filter.with_date_from(after)?;
    }
    if let Some(before) = &args.before {
        filter = filter.with_date_to(before)?;
    }

    let raw = fs::read_to_string(&args.input)?;
    let progress = (!args.quiet).then(stderr_progress);
    let analysis = Pipeline::new().run_filtered(&raw, &filter, progress.as_ref())?;

    let format = args.report_format();
    let config = OutputConfig::new()
        .with_pretty(args.pretty)
        .with_csv_delimiter(args.delimiter);

    match &args.output {
        Some(path) => {
            write_to_format(&analysis, path, format, &config)?;
            if !args.quiet {
                eprintln!(
                    "✅ {} report for {} messages saved to {} ({:.2}s)",
                    format,
                    analysis.total_messages,
                    path,
                    started.elapsed().as_secs_f64()
                );
            }
        }
        None => {
            let report = to_format_string(&analysis, format, &config)?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", report.trim_end())?;
        }
    }
    Ok(())
}
