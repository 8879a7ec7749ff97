//! Sets up the schema for the application's SQLite database.

use rusqlite::Connection;

use crate::Error;

/// Create the transaction table and its indexes if they do not exist.
///
/// The upstream dataset does not guarantee unique IDs, so the upstream ID is
/// stored as a plain column (`product_id`) and rows are identified by rowid.
/// The sale month is computed once at insert time and stored in its own
/// indexed column since every aggregate query filters on it.
///
/// # Errors
/// Returns an [Error::SqlError] if the schema could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            product_id INTEGER NOT NULL,
            title TEXT NOT NULL,
            price REAL NOT NULL,
            description TEXT NOT NULL,
            category TEXT NOT NULL,
            image TEXT NOT NULL,
            sold INTEGER NOT NULL,
            date_of_sale TEXT NOT NULL,
            sale_month INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS transaction_sale_month ON \"transaction\" (sale_month);",
    )?;

    Ok(())
}
