//! Batched date report.
//!
//! Groups contributions by (recipient committee, MMDDYYYY) over the whole
//! input, then emits exactly one line per distinct group, sorted ascending
//! by (committee id, date string) as literal strings.
//!
//! # Algorithm
//!
//! 1. Accumulate: validate each line and fold accepted amounts into the
//!    group map. No output during this phase.
//! 2. Emit: iterate the groups in sorted key order and write each group's
//!    final median, count, and total.

use crate::accumulator::GroupAccumulator;
use crate::output::ReportWriter;
use crate::record::{Record, Result};
use crate::rules::{DateRule, ReportRule};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// Batched date report command.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateReportCommand;

impl DateReportCommand {
    pub fn new() -> Self {
        Self
    }

    /// Execute the date report over an input file.
    pub fn run<P: AsRef<Path>, W: Write>(
        &self,
        input_path: P,
        output: &mut W,
    ) -> Result<DateReportStats> {
        let file = File::open(input_path.as_ref())?;
        let reader = BufReader::with_capacity(64 * 1024, file);
        self.run_streaming(reader, output)
    }

    /// Accumulate the whole input, then emit sorted groups.
    pub fn run_streaming<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        output: &mut W,
    ) -> Result<DateReportStats> {
        let mut stats = DateReportStats::default();
        let mut accumulator = GroupAccumulator::new();
        let rule = DateRule;

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
            let Some(amount) = record.amount() else {
                stats.records_skipped += 1;
                continue;
            };

            accumulator.update(rule.key_of(&record), amount);
        }

        let mut writer = ReportWriter::new(output);
        for (key, group) in accumulator.sorted_entries() {
            writer.write_row(
                &key.committee_id,
                &key.bucket,
                group.median(),
                group.count,
                group.total,
            )?;
            stats.groups_written += 1;
        }
        writer.flush()?;
        Ok(stats)
    }
}

/// Statistics from a date report pass.
#[derive(Debug, Default, Clone)]
pub struct DateReportStats {
    /// Number of input lines read.
    pub lines_read: usize,
    /// Number of records rejected by validation.
    pub records_skipped: usize,
    /// Number of distinct groups written.
    pub groups_written: usize,
}

impl std::fmt::Display for DateReportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Read: {}, Skipped: {}, Groups: {}",
            self.lines_read, self.records_skipped, self.groups_written
        )
    }
}
