//! The bill records returned by the data store and their display-ready form.

use serde::{Deserialize, Deserializer, Serialize};

/// The store's identifier for a bill.
///
/// Identifiers are opaque strings and are expected to be unique within a
/// single list of bills. They are never deduplicated.
pub type BillId = String;

/// An expense bill exactly as the data store returns it.
///
/// `date` and `status` are kept as raw strings since the store does not
/// guarantee that they are well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub id: BillId,
    pub date: String,
    pub status: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub vat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pct: Option<f64>,
    /// The URL of the receipt image.
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    /// The email of the employee that submitted the bill.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    /// The kind of expense, e.g. "Transports".
    #[serde(default, rename = "type")]
    pub expense_type: Option<String>,
    #[serde(default)]
    pub commentary: Option<String>,
    #[serde(default)]
    pub comment_admin: Option<String>,
}

/// A bill with its date and status formatted for display.
///
/// A fresh [NormalizedBill] is created each time the bills are fetched and it
/// keeps every field of the original record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedBill {
    #[serde(flatten)]
    pub record: BillRecord,
    /// `YYYY-MM-DD` for well-formed dates, otherwise the raw date.
    pub display_date: String,
    pub display_status: String,
    /// A short human label for the date, e.g. "4 Avr. 04".
    ///
    /// `None` when the raw date could not be parsed.
    pub date_label: Option<String>,
}

/// Accept a JSON number, a numeric string or an empty string.
///
/// The store sends some numeric fields as strings, and an empty string means
/// that the field was left blank.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(number)) => Ok(Some(number)),
        Some(NumberOrText::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
