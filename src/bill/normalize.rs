//! Turns raw bill records into display-ready bills and orders them.

use super::{
    format::{date_label, format_date, format_status},
    record::{BillRecord, NormalizedBill},
};

/// Format the date and status of every record.
///
/// Every record produces exactly one bill, in the same order, including
/// records with malformed dates or unknown statuses.
pub fn normalize(records: &[BillRecord]) -> Vec<NormalizedBill> {
    records.iter().map(normalize_bill).collect()
}

/// Format the date and status of a single record.
pub fn normalize_bill(record: &BillRecord) -> NormalizedBill {
    let _span = tracing::debug_span!("normalize_bill", bill_id = %record.id).entered();

    NormalizedBill {
        display_date: format_date(&record.date),
        display_status: format_status(&record.status),
        date_label: date_label(&record.date),
        record: record.clone(),
    }
}

/// Sort bills from the most recent to the oldest.
///
/// Bills are compared by their display date as plain strings. This is
/// chronological for well-formed dates only: a bill whose date could not be
/// parsed is placed wherever its raw date string falls. Bills with equal
/// dates keep their original relative order.
pub fn sort_by_date_desc(mut bills: Vec<NormalizedBill>) -> Vec<NormalizedBill> {
    bills.sort_by(|a, b| b.display_date.cmp(&a.display_date));
    bills
}
