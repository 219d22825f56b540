//! # x86level-analysis
//!
//! Classification of assembly listings by x86-64 microarchitecture level.
//!
//! This crate provides:
//! - Per-line classification with register-width disambiguation
//! - Per-stream aggregation of operation counts and mnemonic frequencies
//! - Line-oriented scanning of listings with context tracking
//! - Text and JSON reports
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use x86level_analysis::{Aggregate, StreamScanner};
//! use x86level_catalog::Catalog;
//! use x86level_core::Level;
//!
//! let mut scanner = StreamScanner::new(Catalog::x86_64());
//! let mut aggregate = Aggregate::new();
//! let listing = "TEXT main.f(SB)\nPOPCNT AX, BX\nVMOVNTDQ Y0, (AX)\n";
//! scanner.scan(Cursor::new(listing), &mut aggregate, |_, _| {}).unwrap();
//! assert_eq!(aggregate.global_max(), Level::V3);
//! ```

pub mod aggregate;
pub mod classify;
pub mod error;
pub mod report;
pub mod scan;

pub use aggregate::Aggregate;
pub use classify::{Classification, Finding, LineClassifier, Resolution};
pub use error::ScanError;
pub use report::{summary_line, JsonReport, ReportOptions, TextReport};
pub use scan::{StreamScanner, MAX_LINE_LEN};
