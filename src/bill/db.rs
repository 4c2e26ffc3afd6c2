//! Database operations for bills and the SQLite-backed bill store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row, named_params};

use crate::Error;

use super::{
    record::BillRecord,
    store::{BillStore, StoreError},
};

const BILL_COLUMNS: &str = "id, date, status, amount, vat, pct, file_url, file_name, email, \
    name, expense_type, commentary, comment_admin";

/// Initialize the bill table.
pub fn create_bill_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS bill (
            id TEXT PRIMARY KEY,
            date TEXT NOT NULL,
            status TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            vat REAL,
            pct REAL,
            file_url TEXT,
            file_name TEXT,
            email TEXT NOT NULL,
            name TEXT,
            expense_type TEXT,
            commentary TEXT,
            comment_admin TEXT
        )",
        (),
    )?;

    Ok(())
}

/// Insert a bill exactly as given.
///
/// # Errors
///
/// Returns [Error::DuplicateBillId] if a bill with the same ID already exists.
pub fn insert_bill(bill: &BillRecord, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        &format!(
            "INSERT INTO bill ({BILL_COLUMNS}) VALUES (:id, :date, :status, :amount, :vat, :pct, \
            :file_url, :file_name, :email, :name, :expense_type, :commentary, :comment_admin)"
        ),
        named_params! {
            ":id": bill.id,
            ":date": bill.date,
            ":status": bill.status,
            ":amount": bill.amount,
            ":vat": bill.vat,
            ":pct": bill.pct,
            ":file_url": bill.file_url,
            ":file_name": bill.file_name,
            ":email": bill.email,
            ":name": bill.name,
            ":expense_type": bill.expense_type,
            ":commentary": bill.commentary,
            ":comment_admin": bill.comment_admin,
        },
    )?;

    Ok(())
}

/// Retrieve a single bill by ID.
pub fn get_bill(bill_id: &str, connection: &Connection) -> Result<BillRecord, Error> {
    connection
        .prepare(&format!("SELECT {BILL_COLUMNS} FROM bill WHERE id = :id"))?
        .query_row(&[(":id", bill_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all bills in insertion order.
pub fn get_all_bills(connection: &Connection) -> Result<Vec<BillRecord>, Error> {
    connection
        .prepare(&format!("SELECT {BILL_COLUMNS} FROM bill ORDER BY rowid"))?
        .query_map([], map_row)?
        .map(|maybe_bill| maybe_bill.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<BillRecord, rusqlite::Error> {
    Ok(BillRecord {
        id: row.get(0)?,
        date: row.get(1)?,
        status: row.get(2)?,
        amount: row.get(3)?,
        vat: row.get(4)?,
        pct: row.get(5)?,
        file_url: row.get(6)?,
        file_name: row.get(7)?,
        email: row.get(8)?,
        name: row.get(9)?,
        expense_type: row.get(10)?,
        commentary: row.get(11)?,
        comment_admin: row.get(12)?,
    })
}

/// A [BillStore] backed by the application's SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteBillStore {
    db_connection: Arc<Mutex<Connection>>,
}

impl SqliteBillStore {
    pub fn new(db_connection: Arc<Mutex<Connection>>) -> Self {
        Self { db_connection }
    }

    fn list_bills(&self) -> Result<Vec<BillRecord>, Error> {
        let connection = self
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_all_bills(&connection)
    }
}

impl BillStore for SqliteBillStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        self.list_bills().map_err(StoreError::from)
    }
}

impl From<Error> for StoreError {
    fn from(error: Error) -> Self {
        match error {
            Error::NotFound => StoreError::new("Erreur 404 : aucune note de frais trouvée"),
            error => StoreError::new(format!("Erreur 500 : {error}")),
        }
    }
}
