//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Row, params};

use crate::{
    Error,
    models::Transaction,
    stores::{BUCKET_COUNT, BUCKET_WIDTH, CategoryCount, MonthlyTotals, SearchQuery, SearchResults},
};

use super::TransactionStore;

/// The filter shared by the count and page queries of a search.
///
/// `?1` is the escaped LIKE pattern, `?2` the optional exact price. A NULL
/// price never matches, so text-only searches simply bind NULL.
const SEARCH_FILTER: &str =
    "title LIKE ?1 ESCAPE '\\' OR description LIKE ?1 ESCAPE '\\' OR price = ?2";

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|_| Error::DatabaseLockError)
    }

    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(0)?,
            title: row.get(1)?,
            price: row.get(2)?,
            description: row.get(3)?,
            category: row.get(4)?,
            image: row.get(5)?,
            sold: row.get(6)?,
            date_of_sale: row.get(7)?,
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Delete all transactions and insert `transactions` in bulk.
    ///
    /// The delete and inserts run inside a single SQL transaction, so
    /// concurrent queries observe either the old or the new dataset.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn replace_all(&mut self, transactions: Vec<Transaction>) -> Result<(), Error> {
        let connection = self.connection()?;

        let tx = connection.unchecked_transaction()?;
        tx.execute("DELETE FROM \"transaction\"", [])?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO \"transaction\"
                 (product_id, title, price, description, category, image, sold, date_of_sale, sale_month)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            )?;

            for transaction in &transactions {
                stmt.execute(params![
                    transaction.id,
                    transaction.title,
                    transaction.price,
                    transaction.description,
                    transaction.category,
                    transaction.image,
                    transaction.sold,
                    transaction.date_of_sale,
                    transaction.sale_month(),
                ])?;
            }
        }

        tx.commit()?;

        Ok(())
    }

    /// Count and retrieve the transactions matching `query`.
    ///
    /// Case-insensitivity follows SQLite's LIKE semantics (ASCII only), and
    /// LIKE wildcards in the search text are escaped so they match literally.
    /// Rows are returned in rowid order, which is the insertion order of the
    /// most recent bulk load.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn search(&self, query: &SearchQuery) -> Result<SearchResults, Error> {
        let connection = self.connection()?;
        let pattern = like_pattern(&query.search);

        let total: i64 = connection
            .prepare(&format!(
                "SELECT COUNT(*) FROM \"transaction\" WHERE {SEARCH_FILTER}"
            ))?
            .query_row(params![pattern, query.price], |row| row.get(0))?;

        let transactions = connection
            .prepare(&format!(
                "SELECT product_id, title, price, description, category, image, sold, date_of_sale
                 FROM \"transaction\"
                 WHERE {SEARCH_FILTER}
                 ORDER BY rowid
                 LIMIT ?3 OFFSET ?4"
            ))?
            .query_map(
                params![pattern, query.price, query.limit, query.offset],
                Self::map_row,
            )?
            .map(|result| result.map_err(Error::SqlError))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchResults {
            total: total as u64,
            transactions,
        })
    }

    /// Sum prices and count sold/unsold transactions for the calendar month
    /// `month`.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn monthly_totals(&self, month: u8) -> Result<MonthlyTotals, Error> {
        let connection = self.connection()?;

        let totals = connection
            .prepare(
                "SELECT COALESCE(SUM(price), 0.0),
                        COUNT(*) FILTER (WHERE sold),
                        COUNT(*) FILTER (WHERE NOT sold)
                 FROM \"transaction\"
                 WHERE sale_month = ?1",
            )?
            .query_row(params![month], |row| {
                Ok(MonthlyTotals {
                    total_sales: row.get(0)?,
                    sold: row.get::<_, i64>(1)? as u64,
                    not_sold: row.get::<_, i64>(2)? as u64,
                })
            })?;

        Ok(totals)
    }

    /// Count the calendar month's transactions per fixed price bucket.
    ///
    /// Buckets are half-open on the lower bound and the final bucket is
    /// unbounded above, so a price of exactly 100 lands in the second bucket
    /// and anything from 900 up lands in the last.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn price_histogram(&self, month: u8) -> Result<[u64; BUCKET_COUNT], Error> {
        let connection = self.connection()?;
        let mut buckets = [0u64; BUCKET_COUNT];

        let rows = connection
            .prepare(
                "SELECT MIN(CAST(price / ?2 AS INTEGER), ?3) AS bucket, COUNT(*)
                 FROM \"transaction\"
                 WHERE sale_month = ?1
                 GROUP BY bucket",
            )?
            .query_map(
                params![month, BUCKET_WIDTH, (BUCKET_COUNT - 1) as i64],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)),
            )?
            .map(|result| result.map_err(Error::SqlError))
            .collect::<Result<Vec<_>, _>>()?;

        for (bucket, count) in rows {
            // CAST truncates toward zero, so prices in (-100, 0) land in the
            // first bucket; only prices at or below -100 produce a negative
            // bucket, which is dropped.
            if let Ok(index) = usize::try_from(bucket) {
                buckets[index] = count as u64;
            }
        }

        Ok(buckets)
    }

    /// Count the calendar month's transactions per category.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn category_counts(&self, month: u8) -> Result<Vec<CategoryCount>, Error> {
        let connection = self.connection()?;

        connection
            .prepare(
                "SELECT category, COUNT(*)
                 FROM \"transaction\"
                 WHERE sale_month = ?1
                 GROUP BY category",
            )?
            .query_map(params![month], |row| {
                Ok(CategoryCount {
                    category: row.get(0)?,
                    count: row.get::<_, i64>(1)? as u64,
                })
            })?
            .map(|result| result.map_err(Error::SqlError))
            .collect()
    }
}

/// Wrap `search` in LIKE wildcards, escaping any wildcard characters it
/// contains so they match literally.
fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');

    for character in search.chars() {
        if matches!(character, '%' | '_' | '\\') {
            pattern.push('\\');
        }

        pattern.push(character);
    }

    pattern.push('%');
    pattern
}
