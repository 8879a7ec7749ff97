//! The combined bundle endpoint: statistics, histogram, and category
//! breakdown in one response.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

use crate::{
    AppState, Error,
    month::MonthParam,
    statistics::StatisticsResponse,
    stores::{BUCKET_COUNT, CategoryCount, TransactionStore},
};

/// The three monthly aggregates bundled into one payload.
///
/// Each field has exactly the same shape as the corresponding dedicated
/// endpoint's response, so clients can switch between the bundle and the
/// individual endpoints without remapping.
#[derive(Debug, Serialize)]
pub(crate) struct CombinedDataResponse {
    statistics: StatisticsResponse,
    #[serde(rename = "barChartData")]
    bar_chart_data: [u64; BUCKET_COUNT],
    #[serde(rename = "pieChartData")]
    pie_chart_data: Vec<CategoryCount>,
}

/// Handles requests for a month's statistics, full price histogram, and
/// category breakdown in a single response.
pub(crate) async fn get_combined_data<S: TransactionStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<MonthParam>,
) -> Result<Json<CombinedDataResponse>, Error> {
    let month = params.parse()?;

    let statistics = state.store.monthly_totals(month)?.into();
    let bar_chart_data = state.store.price_histogram(month)?;
    let pie_chart_data = state.store.category_counts(month)?;

    Ok(Json(CombinedDataResponse {
        statistics,
        bar_chart_data,
        pie_chart_data,
    }))
}
