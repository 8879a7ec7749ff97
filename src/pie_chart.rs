//! The category distribution endpoint.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState, Error,
    month::MonthParam,
    stores::{CategoryCount, TransactionStore},
};

/// Handles requests for a month's per-category transaction counts.
///
/// Each entry carries the category under `_id`. The order of the entries is
/// not guaranteed.
pub(crate) async fn get_pie_chart<S: TransactionStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<MonthParam>,
) -> Result<Json<Vec<CategoryCount>>, Error> {
    let month = params.parse()?;
    let counts = state.store.category_counts(month)?;

    Ok(Json(counts))
}
