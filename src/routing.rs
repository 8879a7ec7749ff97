//! Application router configuration.

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    AppState, bar_chart::get_bar_chart, combined_data::get_combined_data, endpoints,
    listing::get_transactions, pie_chart::get_pie_chart, statistics::get_statistics,
    stores::TransactionStore,
};

/// Return a router with all the app's routes.
///
/// All origins are permitted through CORS; the API is read-only and
/// unauthenticated.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(endpoints::TRANSACTIONS, get(get_transactions::<S>))
        .route(endpoints::STATISTICS, get(get_statistics::<S>))
        .route(endpoints::BAR_CHART, get(get_bar_chart::<S>))
        .route(endpoints::PIE_CHART, get(get_pie_chart::<S>))
        .route(endpoints::COMBINED_DATA, get(get_combined_data::<S>))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
