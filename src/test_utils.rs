//! Shared helpers for setting up stores, servers, and sample data in tests.

use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use rusqlite::Connection;
use time::{Date, Month, PrimitiveDateTime, Time};

use crate::{
    AppState, Error, Transaction, build_router,
    db::initialize,
    stores::{
        BUCKET_COUNT, CategoryCount, MonthlyTotals, SQLiteTransactionStore, SearchQuery,
        SearchResults, TransactionStore,
    },
};

/// Create a transaction store backed by an in-memory database.
pub(crate) fn get_test_store() -> SQLiteTransactionStore {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    initialize(&connection).expect("Could not initialize database.");

    SQLiteTransactionStore::new(Arc::new(Mutex::new(connection)))
}

/// Create a sample transaction dated to the 15th of `month` in 2022.
///
/// Tests that care about other fields override them with struct update
/// syntax.
pub(crate) fn transaction(id: i64, month: u8, price: f64) -> Transaction {
    let month = Month::try_from(month).expect("month must be between 1 and 12");
    let date = Date::from_calendar_date(2022, month, 15).expect("Could not create date.");

    Transaction {
        id,
        title: format!("Product {id}"),
        price,
        description: format!("Description for product {id}"),
        category: "misc".to_string(),
        image: format!("https://example.com/{id}.jpg"),
        sold: false,
        date_of_sale: PrimitiveDateTime::new(date, Time::MIDNIGHT).assume_utc(),
    }
}

/// Create a test server whose store is seeded with `transactions`.
pub(crate) fn get_test_server(transactions: Vec<Transaction>) -> TestServer {
    let mut store = get_test_store();
    store
        .replace_all(transactions)
        .expect("Could not load the dataset.");

    TestServer::try_new(build_router(AppState::new(store))).expect("Could not create test server.")
}

/// A store whose every operation fails, for exercising error responses and
/// proving that request validation short-circuits before the store is called.
#[derive(Debug, Clone)]
pub(crate) struct FailingStore;

impl TransactionStore for FailingStore {
    fn replace_all(&mut self, _transactions: Vec<Transaction>) -> Result<(), Error> {
        Err(Error::DatabaseLockError)
    }

    fn search(&self, _query: &SearchQuery) -> Result<SearchResults, Error> {
        Err(Error::DatabaseLockError)
    }

    fn monthly_totals(&self, _month: u8) -> Result<MonthlyTotals, Error> {
        Err(Error::DatabaseLockError)
    }

    fn price_histogram(&self, _month: u8) -> Result<[u64; BUCKET_COUNT], Error> {
        Err(Error::DatabaseLockError)
    }

    fn category_counts(&self, _month: u8) -> Result<Vec<CategoryCount>, Error> {
        Err(Error::DatabaseLockError)
    }
}
