//! The domain model for the product transaction dataset.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single product sale record from the upstream dataset.
///
/// The field names on the wire match the upstream JSON, so the same struct is
/// used for decoding the seed dataset and for serialising API responses.
/// The upstream `id` is carried through as-is and is not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The upstream product ID.
    pub id: i64,
    /// The product title.
    pub title: String,
    /// The sale price.
    pub price: f64,
    /// A text description of the product.
    pub description: String,
    /// The product category, e.g. "electronics".
    pub category: String,
    /// A URL pointing to the product image.
    pub image: String,
    /// Whether the product has been sold.
    pub sold: bool,
    /// When the sale happened. The calendar month of this date is the primary
    /// query dimension for all the aggregate endpoints.
    #[serde(rename = "dateOfSale", with = "time::serde::rfc3339")]
    pub date_of_sale: OffsetDateTime,
}

impl Transaction {
    /// The calendar month (1-12) of the sale date, as written in the dataset.
    pub fn sale_month(&self) -> u8 {
        u8::from(self.date_of_sale.month())
    }
}
