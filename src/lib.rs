//! Billed is a web app for employees to keep track of their expense bills.
//!
//! This library serves the bills page as HTML. The page is driven by
//! [bill::BillsController], which fetches the bills from a [bill::BillStore],
//! orders them from the most recent to the oldest and paints either the bills
//! table, a loading view or an error view.

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

pub mod bill;
mod app_state;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
pub mod session;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use endpoints::{BILLS_VIEW, NEW_BILL_VIEW};
pub use logging::logging_middleware;
pub use routing::build_router;

use crate::{internal_server_error::InternalServerError, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A bill with the same ID is already in the database.
    #[error("the bill ID already exists in the database")]
    DuplicateBillId,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 1555 occurs when a PRIMARY KEY constraint failed, 2067 for UNIQUE.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if (sql_error.extended_code == 1555 || sql_error.extended_code == 2067)
                    && desc.ends_with("bill.id") =>
            {
                Error::DuplicateBillId
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
