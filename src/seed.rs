//! One-shot seeding of the database from the remote dataset.

use crate::{AppState, Error, models::Transaction, stores::TransactionStore};

/// Fetch the remote dataset and replace the store's contents with it.
///
/// Intended to be spawned at start-up as a fire-and-forget task: the server
/// accepts requests while seeding runs, so early requests may observe an
/// empty dataset. On success the state's seed-complete flag is set.
///
/// Any failure (network, bad status, malformed payload, store error) is
/// logged and the store keeps whatever it already held. There are no retries.
pub async fn seed_database<S: TransactionStore>(mut state: AppState<S>, dataset_url: String) {
    let transactions = match fetch_dataset(&dataset_url).await {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("Could not fetch the seed dataset from {dataset_url}: {error}");
            return;
        }
    };

    let count = transactions.len();

    match state.store.replace_all(transactions) {
        Ok(()) => {
            state.mark_seeded();
            tracing::info!("Seeded the database with {count} transactions.");
        }
        Err(error) => tracing::error!("Could not load the seed dataset into the database: {error}"),
    }
}

async fn fetch_dataset(url: &str) -> Result<Vec<Transaction>, Error> {
    let response = reqwest::get(url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|error| Error::DatasetFetch(error.to_string()))?;

    response
        .json()
        .await
        .map_err(|error| Error::DatasetFetch(error.to_string()))
}
