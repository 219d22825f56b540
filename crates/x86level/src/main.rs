//! x86level - minimum x86-64 microarchitecture level of an assembly listing
//!
//! Usage:
//!   go tool objdump prog | x86level            Print sGOAMD64=v<N>
//!   x86level -i listing.txt -s --extended      Per-level instruction statistics
//!   x86level -i a.txt -i b.txt --format json   Merged report as JSON

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, error, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use x86level_analysis::{Aggregate, Classification, JsonReport, ReportOptions, StreamScanner, TextReport};
use x86level_catalog::Catalog;
use x86level_core::{InstructionLine, Level};

#[derive(Parser)]
#[command(name = "x86level")]
#[command(version, about = "Find the minimum x86-64 microarchitecture level an assembly listing needs", long_about = None)]
struct Cli {
    /// Report every v2+ instruction found and print a readable summary
    #[arg(short, long)]
    verbose: bool,

    /// Include per-instruction counts in the statistics
    #[arg(long)]
    extended: bool,

    /// Print per-level statistics
    #[arg(short = 's', long = "statistics")]
    statistics: bool,

    /// Input file; may be repeated. Reads standard input when absent
    #[arg(short, long, value_name = "PATH")]
    input: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Statistics and the sGOAMD64 line
    Text,
    /// A JSON document
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let catalog = Catalog::x86_64();
    debug!(
        "catalog: v1 {}, v2 {}, v3 {}, v4 {} mnemonics",
        catalog.tier_len(Level::V1),
        catalog.tier_len(Level::V2),
        catalog.tier_len(Level::V3),
        catalog.tier_len(Level::V4)
    );
    // Findings would corrupt a JSON document on stdout.
    let print_findings = cli.verbose && cli.format == Format::Text;

    let aggregate = if cli.input.is_empty() {
        let stdin = io::stdin();
        scan_stream("<stdin>", stdin.lock(), catalog, print_findings)
    } else {
        // Open everything up front so a bad path fails before any output.
        let readers = cli
            .input
            .iter()
            .map(|path| {
                File::open(path)
                    .map(BufReader::new)
                    .with_context(|| format!("Failed to open input: {}", path.display()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut total = Aggregate::new();
        for (path, reader) in cli.input.iter().zip(readers) {
            let name = path.display().to_string();
            total.merge(&scan_stream(&name, reader, catalog, print_findings));
        }
        total
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => {
            let options = ReportOptions {
                statistics: cli.statistics,
                extended: cli.extended,
                verbose: cli.verbose,
            };
            TextReport::new(options)
                .render(&aggregate, &mut out)
                .context("Failed to write report")?;
        }
        Format::Json => {
            JsonReport::pretty()
                .render(&aggregate, &mut out)
                .context("Failed to write report")?;
        }
    }

    Ok(())
}

/// Scans one input into its own aggregate.
///
/// A read error is logged and whatever was recorded before it is kept.
fn scan_stream<'c, R: BufRead>(name: &str, reader: R, catalog: &'c Catalog<'c>, print_findings: bool) -> Aggregate {
    let mut scanner = StreamScanner::new(catalog);
    let mut aggregate = Aggregate::new();

    let result = scanner.scan(reader, &mut aggregate, |line, classification| {
        if print_findings {
            report_findings(line, classification);
        }
    });

    match result {
        Ok(lines) => info!("{}: {} lines, minimum level {}", name, lines, aggregate.global_max()),
        Err(e) => error!("{}: {}", name, e),
    }
    aggregate
}

fn report_findings(line: &InstructionLine<'_>, classification: &Classification<'_>) {
    for finding in classification.findings.iter().filter(|f| f.level >= Level::V2) {
        println!(
            "Found {} instruction {} in function {} {}",
            finding.level,
            finding.mnemonic,
            line.function().unwrap_or(""),
            line.context().unwrap_or("")
        );
    }
}
