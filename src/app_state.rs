//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, bill::create_bill_table, session::Session};

/// The default width of the receipt preview modal in pixels.
pub const DEFAULT_MODAL_WIDTH: u32 = 800;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection
    pub db_connection: Arc<Mutex<Connection>>,

    /// The signed-in user, read once when the server starts.
    pub session: Session,

    /// The width of the receipt preview modal in pixels.
    pub modal_width: u32,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the bill table.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, session: Session) -> Result<Self, Error> {
        create_bill_table(&db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            session,
            modal_width: DEFAULT_MODAL_WIDTH,
        })
    }

    /// Set the width of the receipt preview modal.
    pub fn with_modal_width(mut self, modal_width: u32) -> Self {
        self.modal_width = modal_width;
        self
    }
}
