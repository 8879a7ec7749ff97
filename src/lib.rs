//! Salestats is a small REST backend for browsing and summarising a product
//! transaction dataset.
//!
//! On start-up the server seeds a SQLite database from a remote JSON dataset
//! and then serves read-only JSON endpoints for listing, searching, and
//! aggregating those transactions (monthly totals, a price histogram, and a
//! category breakdown).

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod bar_chart;
mod combined_data;
mod db;
mod endpoints;
mod listing;
mod models;
mod month;
mod pie_chart;
mod routing;
mod seed;
mod state;
mod statistics;
pub mod stores;

#[cfg(test)]
mod test_utils;

pub use db::initialize as initialize_db;
pub use models::Transaction;
pub use routing::build_router;
pub use seed::seed_database;
pub use state::AppState;

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
    /// The client sent a missing, non-numeric, or out-of-range month query
    /// parameter. No database query is attempted for these requests.
    #[error("Valid month is required (1-12)")]
    InvalidMonth,

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    ///
    /// The error details should only be logged for debugging on the server.
    /// Clients receive a generic internal server error message instead.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// The remote dataset could not be fetched or decoded during seeding.
    ///
    /// Seeding failures are logged and never surfaced to clients.
    #[error("could not fetch the dataset: {0}")]
    DatasetFetch(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidMonth => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": Error::InvalidMonth.to_string() })),
            )
                .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "message": "An unexpected error occurred, check the server logs for more details."
                    })),
                )
                    .into_response()
            }
        }
    }
}
