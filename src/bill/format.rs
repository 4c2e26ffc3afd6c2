//! Converts the raw date and status of a bill into display strings.

use time::{
    Date, OffsetDateTime, format_description::BorrowedFormatItem,
    format_description::well_known::Rfc3339, macros::format_description,
};

/// The date format the store is expected to use.
const STORE_DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Three letter French month abbreviations, capitalised and with a trailing dot.
const MONTH_LABELS: [&str; 12] = [
    "Jan.", "Fév.", "Mar.", "Avr.", "Mai.", "Jui.", "Jui.", "Aoû.", "Sep.", "Oct.", "Nov.", "Déc.",
];

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_ACCEPTED: &str = "accepted";
pub const STATUS_REFUSED: &str = "refused";

/// Parse a bill date as either `YYYY-MM-DD` or an RFC 3339 date-time.
///
/// Leading and trailing whitespace is ignored. Returns `None` for anything
/// that is not a calendar date.
pub fn parse_bill_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();

    Date::parse(raw, STORE_DATE_FORMAT)
        .ok()
        .or_else(|| {
            OffsetDateTime::parse(raw, &Rfc3339)
                .ok()
                .map(|date_time| date_time.date())
        })
}

/// Format a raw bill date as a fixed-width `YYYY-MM-DD` string.
///
/// Dates that cannot be parsed are returned unchanged and a warning is logged.
/// Fixed-width output means the formatted dates sort chronologically as
/// plain strings.
pub fn format_date(raw: &str) -> String {
    match parse_bill_date(raw) {
        Some(date) => format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            u8::from(date.month()),
            date.day()
        ),
        None => {
            tracing::warn!("Could not parse the bill date {raw:?}, displaying it as is.");
            raw.to_owned()
        }
    }
}

/// A short French label for a bill date, e.g. "4 Avr. 04" for 2004-04-04.
pub fn date_label(raw: &str) -> Option<String> {
    let date = parse_bill_date(raw)?;
    let month = MONTH_LABELS[usize::from(u8::from(date.month())) - 1];

    Some(format!(
        "{} {} {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

/// Map a status code to its label, passing unknown codes through unchanged.
pub fn format_status(code: &str) -> String {
    match code {
        STATUS_PENDING => "En attente".to_owned(),
        STATUS_ACCEPTED => "Accepté".to_owned(),
        STATUS_REFUSED => "Refusé".to_owned(),
        other => other.to_owned(),
    }
}


#[cfg(test)]
mod format_status_tests {
    use super::format_status;

    #[test]
    fn labels_known_statuses() {
        assert_eq!(format_status("pending"), "En attente");
        assert_eq!(format_status("accepted"), "Accepté");
        assert_eq!(format_status("refused"), "Refusé");
    }

    #[test]
    fn passes_unknown_status_through() {
        assert_eq!(format_status("unknown-code"), "unknown-code");
        assert_eq!(format_status("Pending"), "Pending");
        assert_eq!(format_status(""), "");
    }
}
