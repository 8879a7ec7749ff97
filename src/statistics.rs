//! The monthly statistics endpoint.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;

use crate::{
    AppState, Error,
    month::MonthParam,
    stores::{MonthlyTotals, TransactionStore},
};

/// Sale totals for one calendar month.
#[derive(Debug, Serialize)]
pub(crate) struct StatisticsResponse {
    /// The sum of prices over the month's transactions.
    #[serde(rename = "totalSales")]
    total_sales: f64,
    /// The number of the month's transactions marked as sold.
    #[serde(rename = "totalSold")]
    total_sold: u64,
    /// The number of the month's transactions not marked as sold.
    #[serde(rename = "totalNotSold")]
    total_not_sold: u64,
}

impl From<MonthlyTotals> for StatisticsResponse {
    fn from(totals: MonthlyTotals) -> Self {
        Self {
            total_sales: totals.total_sales,
            total_sold: totals.sold,
            total_not_sold: totals.not_sold,
        }
    }
}

/// Handles requests for a month's sale totals.
///
/// The month matches the calendar month of the sale date across any year.
pub(crate) async fn get_statistics<S: TransactionStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<MonthParam>,
) -> Result<Json<StatisticsResponse>, Error> {
    let month = params.parse()?;
    let totals = state.store.monthly_totals(month)?;

    Ok(Json(totals.into()))
}
