//! Defines the transaction store trait and its SQLite implementation.

mod sqlite;

pub use sqlite::SQLiteTransactionStore;

use serde::Serialize;

use crate::{Error, models::Transaction};

/// The number of price buckets in the histogram.
pub const BUCKET_COUNT: usize = 10;

/// The width of each bounded price bucket.
///
/// Bucket `i` covers prices in `[i * 100, (i + 1) * 100)`; the final bucket is
/// unbounded above.
pub const BUCKET_WIDTH: f64 = 100.0;

/// Handles the bulk loading and querying of transactions.
pub trait TransactionStore {
    /// Delete all transactions in the store and insert `transactions` in bulk.
    ///
    /// The replace is atomic with respect to other store operations: queries
    /// observe either the old or the new dataset, never a mix.
    fn replace_all(&mut self, transactions: Vec<Transaction>) -> Result<(), Error>;

    /// Count and retrieve the transactions matching `query`.
    ///
    /// Matching rows are returned in insertion order. The order is the
    /// store's default and is not guaranteed stable across dataset reloads.
    fn search(&self, query: &SearchQuery) -> Result<SearchResults, Error>;

    /// Sum prices and count sold/unsold transactions whose sale date falls in
    /// the calendar month `month` (1-12, any year).
    fn monthly_totals(&self, month: u8) -> Result<MonthlyTotals, Error>;

    /// Count the transactions in each fixed price bucket for the calendar
    /// month `month`.
    ///
    /// The result always has exactly [BUCKET_COUNT] entries, in ascending
    /// price order.
    fn price_histogram(&self, month: u8) -> Result<[u64; BUCKET_COUNT], Error>;

    /// Count the transactions per category for the calendar month `month`.
    ///
    /// The order of the returned groups is not guaranteed.
    fn category_counts(&self, month: u8) -> Result<Vec<CategoryCount>, Error>;
}

/// Defines which transactions [TransactionStore::search] should fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Match transactions whose title or description contains this text,
    /// case-insensitively. The empty string matches everything.
    pub search: String,
    /// Additionally match transactions whose price equals this exact value.
    pub price: Option<f64>,
    /// Selects up to the first N (`limit`) matching transactions.
    pub limit: i64,
    /// Skips the first N (`offset`) matching transactions.
    pub offset: i64,
}

/// The outcome of a [TransactionStore::search] call.
#[derive(Debug, PartialEq)]
pub struct SearchResults {
    /// The number of matching transactions before pagination was applied.
    pub total: u64,
    /// The requested page of matching transactions.
    pub transactions: Vec<Transaction>,
}

/// Aggregate totals for one calendar month.
#[derive(Debug, Default, PartialEq)]
pub struct MonthlyTotals {
    /// The sum of prices over all of the month's transactions.
    pub total_sales: f64,
    /// The number of the month's transactions marked as sold.
    pub sold: u64,
    /// The number of the month's transactions not marked as sold.
    pub not_sold: u64,
}

/// The number of transactions in one category.
///
/// Serialises with the category under `_id`, the wire shape the pie-chart
/// endpoint's consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    /// The category name.
    #[serde(rename = "_id")]
    pub category: String,
    /// The number of transactions in the category.
    pub count: u64,
}
