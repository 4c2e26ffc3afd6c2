//! The data store seam and the classification of its failures.

use std::future::Future;

use super::record::BillRecord;

/// A rejection from the data store.
///
/// The message is the only thing that describes the failure, so it is shown
/// to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    /// Create an error carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message the store rejected with.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A source of bill records.
pub trait BillStore {
    /// Fetch every bill the current user can see, in no particular order.
    fn list(&self) -> impl Future<Output = Result<Vec<BillRecord>, StoreError>> + Send;
}

/// The kind of failure a store rejection describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// The bills could not be found, e.g. "Erreur 404".
    NotFound,
    /// The store failed internally, e.g. "Erreur 500".
    ServerFault,
    /// Any other rejection.
    Unclassified,
}

/// Substrings of a rejection message and the class they mark, checked in order.
///
/// A message that matches none of these is [FailureClass::Unclassified].
const FAILURE_RULES: &[(&str, FailureClass)] = &[
    ("404", FailureClass::NotFound),
    ("500", FailureClass::ServerFault),
];

impl FailureClass {
    /// Classify a rejection message by the first rule whose pattern it contains.
    pub fn classify(message: &str) -> Self {
        FAILURE_RULES
            .iter()
            .find(|(pattern, _)| message.contains(pattern))
            .map(|&(_, class)| class)
            .unwrap_or(FailureClass::Unclassified)
    }
}
