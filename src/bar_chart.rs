//! The price histogram endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState, Error,
    month::MonthParam,
    stores::{BUCKET_COUNT, TransactionStore},
};

/// Handles requests for a month's price histogram.
///
/// The response is a bare array of ten counts, one per fixed price bucket in
/// ascending price order: [0,100), [100,200), ..., [800,900), [900,∞).
pub(crate) async fn get_bar_chart<S: TransactionStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<MonthParam>,
) -> Result<Json<[u64; BUCKET_COUNT]>, Error> {
    let month = params.parse()?;
    let buckets = state.store.price_histogram(month)?;

    Ok(Json(buckets))
}
