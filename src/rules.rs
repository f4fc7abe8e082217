//! Eligibility rules and group key extraction for the two reports.
//!
//! Each report is described by a [`ReportRule`]: a pure validity predicate
//! plus a key extractor. The engines in `commands` stay identical in shape
//! and differ only in the rule they drive and how they emit.

use crate::record::{Record, MIN_FIELDS, ZIP_LEN};

/// Composite grouping key: recipient committee plus a report-specific bucket
/// (zip5 for the zip report, MMDDYYYY string for the date report).
///
/// The derived `Ord` compares committee id first, then the bucket as a
/// literal string. Date buckets therefore sort by the raw MMDDYYYY text,
/// not calendar order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    pub committee_id: String,
    pub bucket: String,
}

impl GroupKey {
    pub fn new(committee_id: &str, bucket: &str) -> Self {
        Self {
            committee_id: committee_id.to_string(),
            bucket: bucket.to_string(),
        }
    }
}

/// Validity predicate + key extractor for one report.
pub trait ReportRule {
    /// Whether the record is eligible for this report. Pure, no side effects.
    fn is_valid(&self, record: &Record) -> bool;

    /// Grouping key for an eligible record. Only meaningful when
    /// `is_valid` returned true.
    fn key_of(&self, record: &Record) -> GroupKey;
}

/// Checks shared by both reports: enough fields, not an inter-committee
/// transfer, committee id and amount present.
#[inline]
fn base_eligible(record: &Record) -> bool {
    record.field_count() >= MIN_FIELDS
        && record.other_id().is_empty()
        && !record.committee_id().is_empty()
        && !record.amount_field().is_empty()
}

/// Rule for the zip report: groups by (committee id, zip5).
#[derive(Debug, Clone, Copy, Default)]
pub struct ZipRule;

impl ReportRule for ZipRule {
    fn is_valid(&self, record: &Record) -> bool {
        if !base_eligible(record) {
            return false;
        }
        // Only the first five characters matter; "12345-6789" is fine.
        match record.zip5() {
            Some(zip5) => zip5.bytes().all(|b| b.is_ascii_digit()),
            None => false,
        }
    }

    fn key_of(&self, record: &Record) -> GroupKey {
        let zip5 = record.zip_field().get(..ZIP_LEN).unwrap_or("");
        GroupKey::new(record.committee_id(), zip5)
    }
}

/// Rule for the date report: groups by (committee id, MMDDYYYY).
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRule;

impl ReportRule for DateRule {
    fn is_valid(&self, record: &Record) -> bool {
        base_eligible(record) && is_calendar_date(record.transaction_date())
    }

    fn key_of(&self, record: &Record) -> GroupKey {
        GroupKey::new(record.committee_id(), record.transaction_date())
    }
}

/// Whether an 8-character MMDDYYYY string decodes to a real calendar date.
pub fn is_calendar_date(date: &str) -> bool {
    let bytes = date.as_bytes();
    if bytes.len() != 8 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let num = |range: std::ops::Range<usize>| -> u32 {
        bytes[range].iter().fold(0, |n, &b| n * 10 + (b - b'0') as u32)
    };
    let month = num(0..2);
    let day = num(2..4);
    let year = num(4..8);
    year >= 1 && (1..=12).contains(&month) && day >= 1 && day <= days_in_month(month, year)
}

fn days_in_month(month: u32, year: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
