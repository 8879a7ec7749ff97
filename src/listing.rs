//! The transaction listing endpoint: a paginated search over the dataset.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    models::Transaction,
    stores::{SearchQuery, TransactionStore},
};

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PER_PAGE: i64 = 10;

/// The query parameters for the listing endpoint.
///
/// All values arrive as untyped text. Page numbers that are missing,
/// non-numeric, or below one fall back to their defaults rather than failing
/// the request.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingParams {
    page: Option<String>,
    #[serde(rename = "perPage")]
    per_page: Option<String>,
    search: Option<String>,
}

/// A page of matching transactions plus the pre-pagination match count.
#[derive(Debug, Serialize)]
pub(crate) struct ListingResponse {
    total: u64,
    transactions: Vec<Transaction>,
}

/// Handles requests for a paginated, searchable transaction listing.
///
/// `search` matches the title or description as a case-insensitive substring.
/// When the search text also parses as a number, transactions priced at
/// exactly that value match as well. An empty search matches everything.
pub(crate) async fn get_transactions<S: TransactionStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListingParams>,
) -> Result<Json<ListingResponse>, Error> {
    let page = positive_or_default(params.page.as_deref(), DEFAULT_PAGE);
    let per_page = positive_or_default(params.per_page.as_deref(), DEFAULT_PER_PAGE);
    let search = params.search.unwrap_or_default();

    let query = SearchQuery {
        price: if search.is_empty() {
            None
        } else {
            search.trim().parse().ok()
        },
        search,
        limit: per_page,
        offset: (page - 1).saturating_mul(per_page),
    };

    let results = state.store.search(&query)?;

    Ok(Json(ListingResponse {
        total: results.total,
        transactions: results.transactions,
    }))
}

fn positive_or_default(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|&value| value >= 1)
        .unwrap_or(default)
}

#[cfg(test)]
mod listing_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::{
        AppState, Transaction, build_router,
        endpoints,
        test_utils::{FailingStore, get_test_server, transaction},
    };

    #[tokio::test]
    async fn returns_first_page_and_total_by_default() {
        let dataset: Vec<Transaction> = (1..=25).map(|id| transaction(id, 6, id as f64)).collect();
        let server = get_test_server(dataset);

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total"], 25);
        let transactions = body["transactions"].as_array().unwrap();
        assert_eq!(transactions.len(), 10);
        assert_eq!(transactions[0]["id"], 1);
    }

    #[tokio::test]
    async fn paginates_with_page_and_per_page() {
        let dataset: Vec<Transaction> = (1..=25).map(|id| transaction(id, 6, id as f64)).collect();
        let server = get_test_server(dataset);

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_query_param("page", "2")
            .add_query_param("perPage", "5")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total"], 25);
        let ids: Vec<i64> = body["transactions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|transaction| transaction["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![6, 7, 8, 9, 10]);
    }

    #[tokio::test]
    async fn searches_title_and_description() {
        let server = get_test_server(vec![
            Transaction {
                title: "Red Scarf".to_string(),
                ..transaction(1, 1, 25.0)
            },
            Transaction {
                description: "A SCARF for winter".to_string(),
                ..transaction(2, 2, 30.0)
            },
            Transaction {
                title: "Blue Hat".to_string(),
                description: "A warm hat".to_string(),
                ..transaction(3, 3, 35.0)
            },
        ]);

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_query_param("search", "scarf")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total"], 2);
    }

    #[tokio::test]
    async fn numeric_search_matches_exact_price() {
        let server = get_test_server(vec![
            Transaction {
                title: "Socks".to_string(),
                description: "Plain socks".to_string(),
                ..transaction(1, 1, 150.0)
            },
            transaction(2, 2, 20.0),
        ]);

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_query_param("search", "150")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total"], 1);
        assert_eq!(body["transactions"][0]["id"], 1);
    }

    #[tokio::test]
    async fn malformed_pagination_falls_back_to_defaults() {
        let dataset: Vec<Transaction> = (1..=12).map(|id| transaction(id, 6, id as f64)).collect();
        let server = get_test_server(dataset);

        let response = server
            .get(endpoints::TRANSACTIONS)
            .add_query_param("page", "not-a-number")
            .add_query_param("perPage", "-5")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["total"], 12);
        assert_eq!(body["transactions"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn store_error_returns_internal_server_error() {
        let server = TestServer::try_new(build_router(AppState::new(FailingStore)))
            .expect("Could not create test server.");

        let response = server.get(endpoints::TRANSACTIONS).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}
