//! Streaming zip report.
//!
//! Groups contributions by (recipient committee, zip5) and writes one line
//! per accepted record, in input arrival order, carrying the group's
//! running median, count, and total as of that record.
//!
//! # Memory complexity
//!
//! O(n) in accepted records: every amount is retained so the running median
//! stays exact.

use crate::accumulator::GroupAccumulator;
use crate::output::ReportWriter;
use crate::record::{Record, Result};
use crate::rules::{ReportRule, ZipRule};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Streaming zip report command.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipReportCommand;

impl ZipReportCommand {
    pub fn new() -> Self {
        Self
    }

    /// Execute the zip report over an input file.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        input_path: P,
        output: &mut W,
    ) -> Result<ZipReportStats> {
        let file = File::open(input_path.as_ref())?;
        let reader = BufReader::with_capacity(64 * 1024, file);
        self.run_streaming(reader, output)
    }

    /// Core streaming pass: validate, accumulate, emit per record.
    pub fn run_streaming<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        output: &mut W,
    ) -> Result<ZipReportStats> {
        let mut stats = ZipReportStats::default();
        let mut writer = ReportWriter::new(output);
        let mut accumulator = GroupAccumulator::new();
        let rule = ZipRule;

        let mut line = String::with_capacity(256);
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            stats.lines_read += 1;

            let record = Record::from_line(line.trim());
            if !rule.is_valid(&record) {
                stats.records_skipped += 1;
                continue;
            }
            // Non-numeric amounts are filtered, not fatal.
            let Some(amount) = record.amount() else {
                stats.records_skipped += 1;
                continue;
            };

            let key = rule.key_of(&record);
            let snapshot = accumulator.update(key, amount);
            let zip5 = record.zip5().unwrap_or("");
            writer.write_row(
                record.committee_id(),
                zip5,
                snapshot.median(),
                snapshot.count,
                snapshot.total,
            )?;
            stats.lines_written += 1;
        }

        writer.flush()?;
        Ok(stats)
    }
}

/// Statistics from a zip report pass.
#[derive(Debug, Default, Clone)]
pub struct ZipReportStats {
    /// Number of input lines read.
    pub lines_read: usize,
    /// Number of records rejected by validation.
    pub records_skipped: usize,
    /// Number of report lines written (== accepted records).
    pub lines_written: usize,
}

impl std::fmt::Display for ZipReportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Read: {}, Skipped: {}, Written: {}",
            self.lines_read, self.records_skipped, self.lines_written
        )
    }
}
