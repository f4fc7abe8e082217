//! Report line formatting.
//!
//! Uses itoa for integer formatting to avoid allocation in the hot path:
//! the zip report writes one line per accepted record.

use crate::record::{ReportError, DELIMITER};
use std::io::{BufWriter, Write};

/// Buffer size for ReportWriter (64KB default).
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Buffered report output writer.
///
/// Both reports render the same shape:
/// `committee|bucket|median|count|total\n`.
pub struct ReportWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> ReportWriter<W> {
    /// Create a new ReportWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new ReportWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write one report row followed by newline.
    #[inline]
    pub fn write_row(
        &mut self,
        committee_id: &str,
        bucket: &str,
        median: i64,
        count: u64,
        total: i64,
    ) -> Result<(), ReportError> {
        self.writer.write_all(committee_id.as_bytes())?;
        self.writer.write_all(&[DELIMITER])?;
        self.writer.write_all(bucket.as_bytes())?;
        self.writer.write_all(&[DELIMITER])?;
        self.writer
            .write_all(self.itoa_buf.format(median).as_bytes())?;
        self.writer.write_all(&[DELIMITER])?;
        self.writer
            .write_all(self.itoa_buf.format(count).as_bytes())?;
        self.writer.write_all(&[DELIMITER])?;
        self.writer
            .write_all(self.itoa_buf.format(total).as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}
