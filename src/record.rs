//! Pipe-delimited contribution record parsing.

use memchr::memchr_iter;
use std::io;
use thiserror::Error;

/// Errors that can occur while producing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Field delimiter used by the FEC itemized contribution format.
pub const DELIMITER: u8 = b'|';

/// Minimum number of fields a record must carry to be considered at all.
pub const MIN_FIELDS: usize = 21;

/// Recipient committee identifier.
pub const IDX_CMTE_ID: usize = 0;
/// Contributor zip code (only the first five characters are significant).
pub const IDX_ZIP_CODE: usize = 10;
/// Transaction date, MMDDYYYY concatenation.
pub const IDX_TRANSACTION_DT: usize = 13;
/// Transaction amount in whole currency units.
pub const IDX_TRANSACTION_AMT: usize = 14;
/// Non-empty when the contribution came from another committee.
pub const IDX_OTHER_ID: usize = 15;

/// Number of significant zip characters.
pub const ZIP_LEN: usize = 5;

/// Split a line on the pipe delimiter.
///
/// Uses memchr for SIMD-accelerated delimiter scanning. The delimiter is
/// ASCII, so slicing the str at delimiter offsets is always valid.
#[inline]
pub fn split_fields(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut fields = Vec::with_capacity(MIN_FIELDS);
    let mut start = 0;
    for pos in memchr_iter(DELIMITER, bytes) {
        fields.push(&line[start..pos]);
        start = pos + 1;
    }
    fields.push(&line[start..]);
    fields
}

/// Fast signed amount parsing - no allocation, no error formatting.
///
/// Accepts an optional leading `-` followed by at least one ASCII digit.
/// Returns None on empty input, stray characters, or overflow.
#[inline(always)]
pub fn parse_amount(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    let (negative, digits) = match bytes.first()? {
        b'-' => (true, &bytes[1..]),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return None;
    }
    let mut n: i64 = 0;
    for &b in digits {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        n = n.checked_mul(10)?.checked_add(d as i64)?;
    }
    Some(if negative { -n } else { n })
}

/// Borrowed view over one parsed record line.
///
/// Accessors never panic: indices beyond the field count read as empty
/// strings, so short lines flow through validation and get rejected there.
#[derive(Debug)]
pub struct Record<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    /// Parse one raw line into its positional fields.
    pub fn from_line(line: &'a str) -> Self {
        Self {
            fields: split_fields(line),
        }
    }

    /// Number of fields present on the line.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn field(&self, idx: usize) -> &'a str {
        self.fields.get(idx).copied().unwrap_or("")
    }

    pub fn committee_id(&self) -> &'a str {
        self.field(IDX_CMTE_ID)
    }

    /// The raw zip code field, which may carry a +4 suffix or junk.
    pub fn zip_field(&self) -> &'a str {
        self.field(IDX_ZIP_CODE)
    }

    /// First five characters of the zip field, if present.
    pub fn zip5(&self) -> Option<&'a str> {
        self.zip_field().get(..ZIP_LEN)
    }

    /// The raw 8-character MMDDYYYY date field.
    pub fn transaction_date(&self) -> &'a str {
        self.field(IDX_TRANSACTION_DT)
    }

    pub fn amount_field(&self) -> &'a str {
        self.field(IDX_TRANSACTION_AMT)
    }

    /// Parsed transaction amount, if the field holds a valid integer.
    pub fn amount(&self) -> Option<i64> {
        parse_amount(self.amount_field())
    }

    pub fn other_id(&self) -> &'a str {
        self.field(IDX_OTHER_ID)
    }
}
