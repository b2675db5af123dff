//! CLI tool for finding DNI, NIF and NIE numbers in a directory of PDFs.
//!
//! Results go to stdout; diagnostics go to stderr through `tracing`.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use busqueitor::{write_csv, ColorMode, ConsoleReporter, ScanConfig, ScanTarget, Scanner};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Busqueitor - scan PDF files for Spanish identity numbers (DNI, NIF, NIE)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing the PDF files to scan
    directory: PathBuf,

    /// Also scan PDF files in subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Report each identifier only once per file
    #[arg(short, long)]
    unique: bool,

    /// Export the results to this CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Treat PDF files larger than this many bytes as unreadable
    #[arg(long, value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("\n❌ Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let target = ScanTarget::resolve(&cli.directory)?;

    let config = ScanConfig {
        recursive: cli.recursive,
        unique: cli.unique,
        max_file_size: cli.max_file_size,
    };

    // Colors only make sense on a terminal; piped output stays plain.
    let color = ColorMode(!cli.no_color && std::io::stdout().is_terminal());
    let mut reporter = ConsoleReporter::new(std::io::stdout(), color);

    let report = Scanner::with_config(config).scan(&target, &mut reporter)?;

    if let Some(csv_path) = cli.csv {
        write_csv(&report, &csv_path)
            .with_context(|| format!("failed to export results to {}", csv_path.display()))?;
        println!("💾 Results saved to {}", csv_path.display());
    }

    Ok(())
}
