//! The API endpoint URIs.

/// The route for the paginated transaction listing.
pub const TRANSACTIONS: &str = "/api/transactions";
/// The route for a month's sale totals.
pub const STATISTICS: &str = "/api/statistics";
/// The route for a month's price histogram.
pub const BAR_CHART: &str = "/api/bar-chart";
/// The route for a month's per-category counts.
pub const PIE_CHART: &str = "/api/pie-chart";
/// The route bundling the three aggregates into one response.
pub const COMBINED_DATA: &str = "/api/combined-data";
