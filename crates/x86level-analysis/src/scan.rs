//! Line-oriented scanning of assembly listings.

use std::io::{BufRead, Read};

use log::{debug, trace};
use x86level_catalog::Catalog;
use x86level_core::{InstructionLine, Line};

use crate::{Aggregate, Classification, LineClassifier, ScanError};

/// Longest accepted line in bytes, not counting the `\n` terminator.
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// Drives the classifier over one input stream.
///
/// The scanner carries the current context label from line to line; a new
/// scanner should be used for every independent stream.
#[derive(Debug, Clone)]
pub struct StreamScanner<'c> {
    classifier: LineClassifier<'c>,
    context: String,
}

impl<'c> StreamScanner<'c> {
    /// Creates a scanner over `catalog` with an empty context.
    pub fn new(catalog: &'c Catalog<'c>) -> Self {
        Self {
            classifier: LineClassifier::new(catalog),
            context: String::new(),
        }
    }

    /// Returns the label of the most recent context line.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Classifies a single line (without its terminator) and records it in
    /// `aggregate`.
    ///
    /// Context lines update the label and return `None`. Instruction lines
    /// are passed to `observer` with the current context attached.
    pub fn scan_line<'l, F>(&mut self, text: &'l str, aggregate: &mut Aggregate, mut observer: F) -> Option<Classification<'l>>
    where
        F: FnMut(&InstructionLine<'_>, &Classification<'_>),
    {
        match Line::parse(text) {
            Line::Context(label) => {
                debug!("entering {}", label);
                self.context = label.to_string();
                None
            }
            Line::Instruction(line) => {
                let classification = self.classifier.classify(&line);
                aggregate.record(&classification);
                observer(&line.with_context(&self.context), &classification);
                Some(classification)
            }
        }
    }

    /// Reads `reader` to the end, recording every line in `aggregate`.
    ///
    /// `observer` sees each instruction line, with its context attached,
    /// together with its classification. Input that is not valid UTF-8 is
    /// decoded lossily. A line longer than [`MAX_LINE_LEN`] stops the scan
    /// with [`ScanError::LineTooLong`]. On any error the lines already
    /// recorded stay in `aggregate`. Returns the number of lines read.
    pub fn scan<R, F>(&mut self, mut reader: R, aggregate: &mut Aggregate, mut observer: F) -> Result<u64, ScanError>
    where
        R: BufRead,
        F: FnMut(&InstructionLine<'_>, &Classification<'_>),
    {
        let mut buf = Vec::new();
        let mut lines = 0u64;

        loop {
            buf.clear();
            let read = reader
                .by_ref()
                .take(MAX_LINE_LEN as u64 + 1)
                .read_until(b'\n', &mut buf)
                .map_err(|e| ScanError::read(lines + 1, e))?;
            if read == 0 {
                break;
            }
            if buf.len() > MAX_LINE_LEN && buf.last() != Some(&b'\n') {
                return Err(ScanError::line_too_long(lines + 1, MAX_LINE_LEN));
            }
            lines += 1;

            let decoded = String::from_utf8_lossy(&buf);
            let text = decoded.trim_end_matches(|c: char| c == '\n' || c == '\r');

            if let Some(classification) = self.scan_line(text, aggregate, &mut observer) {
                trace!("line {}: {}", lines, classification.level);
            }
        }

        debug!("scanned {} lines, minimum level {}", lines, aggregate.global_max());
        Ok(lines)
    }
}
