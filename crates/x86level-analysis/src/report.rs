//! Rendering of aggregate results.
//!
//! The text layout is what existing tooling greps for: per-level counts
//! under `-s`, and a final `sGOAMD64=v<N>` line.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use x86level_core::Level;

use crate::Aggregate;

/// What the text report includes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print per-level operation counts.
    pub statistics: bool,
    /// With `statistics`, also print per-mnemonic counts.
    pub extended: bool,
    /// Use the human-readable final line.
    pub verbose: bool,
}

/// Heading used for a level in the statistics block.
fn heading(level: Level) -> &'static str {
    match level {
        Level::V1 => "x86",
        other => other.name(),
    }
}

/// Returns the final summary line for `level`, without a newline.
pub fn summary_line(level: Level, verbose: bool) -> String {
    if verbose {
        format!("Minimum required GOAMD64={}", level.goamd64())
    } else {
        format!("sGOAMD64={}", level.goamd64())
    }
}

/// Renders an aggregate in the plain text layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReport {
    options: ReportOptions,
}

impl TextReport {
    /// Creates a text report with the given options.
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Writes the report to `writer`.
    pub fn render<W: Write>(&self, aggregate: &Aggregate, mut writer: W) -> io::Result<()> {
        if self.options.statistics {
            for level in Level::TIERS {
                writeln!(writer, "{} {}", heading(level), aggregate.operations(level))?;
                if self.options.extended {
                    for (mnemonic, count) in aggregate.ranked(level) {
                        writeln!(writer, "     {} {}", mnemonic, count)?;
                    }
                }
                writeln!(writer)?;
            }
        }
        writeln!(writer, "{}", summary_line(aggregate.global_max(), self.options.verbose))
    }

    /// Renders the report into a String.
    pub fn render_to_string(&self, aggregate: &Aggregate) -> String {
        let mut buf = Vec::new();
        self.render(aggregate, &mut buf).expect("writing to Vec should not fail");
        String::from_utf8(buf).expect("report output should be valid UTF-8")
    }
}

/// JSON representation of one level.
#[derive(Serialize)]
struct JsonLevel<'a> {
    level: Level,
    operations: u64,
    instructions: &'a BTreeMap<String, u64>,
}

/// JSON representation of an aggregate.
#[derive(Serialize)]
struct JsonSummary<'a> {
    minimum_level: Level,
    goamd64: String,
    total_operations: u64,
    levels: Vec<JsonLevel<'a>>,
}

/// Renders an aggregate as a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReport {
    /// Whether to pretty-print the JSON output.
    pretty: bool,
}

impl JsonReport {
    /// Create a JSON report with compact output.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a JSON report with pretty-printed output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Writes the report to `writer`, followed by a newline.
    pub fn render<W: Write>(&self, aggregate: &Aggregate, mut writer: W) -> io::Result<()> {
        let levels = Level::TIERS
            .iter()
            .filter_map(|&level| {
                aggregate.frequencies(level).map(|instructions| JsonLevel {
                    level,
                    operations: aggregate.operations(level),
                    instructions,
                })
            })
            .collect();

        let summary = JsonSummary {
            minimum_level: aggregate.global_max(),
            goamd64: aggregate.global_max().goamd64(),
            total_operations: aggregate.total_operations(),
            levels,
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, &summary).map_err(io::Error::from)?;
        } else {
            serde_json::to_writer(&mut writer, &summary).map_err(io::Error::from)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Renders the report into a String.
    pub fn render_to_string(&self, aggregate: &Aggregate) -> String {
        let mut buf = Vec::new();
        self.render(aggregate, &mut buf).expect("writing to Vec should not fail");
        String::from_utf8(buf).expect("JSON output should be valid UTF-8")
    }
}
