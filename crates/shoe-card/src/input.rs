//! Product card input record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Fields a card is rendered from.
///
/// Deserializes from the catalog's camelCase JSON. Shape errors (a string
/// sale price, a negative color count) are rejected here, before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardInput {
    /// Opaque identifier, only used to build the link target.
    pub slug: String,
    pub name: String,
    /// Image URL or path. Not validated.
    pub image_src: String,
    /// Price in minor units.
    pub price: i64,
    /// Sale price in minor units. Presence alone marks the shoe as on sale.
    #[serde(default)]
    pub sale_price: Option<i64>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl ProductCardInput {
    /// Create an input with no sale price.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        image_src: impl Into<String>,
        price: i64,
        release_date: DateTime<Utc>,
        num_of_colors: u32,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            image_src: image_src.into(),
            price,
            sale_price: None,
            release_date,
            num_of_colors,
        }
    }

    /// Set the sale price.
    pub fn with_sale_price(mut self, sale_price: i64) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    /// Parse a single product from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a JSON array of products.
    pub fn parse_catalog(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}
