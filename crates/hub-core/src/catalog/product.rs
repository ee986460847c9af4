//! Featured product records.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A product a creator features on their profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Listed price in `currency`, as a plain decimal.
    pub price: f64,
    pub currency: Currency,
    pub image_url: String,
    /// Tracked link to the listing.
    pub affiliate_url: String,
    #[serde(default)]
    pub is_best_seller: bool,
}

impl ProductRecord {
    /// Price as a `Money` value for display.
    pub fn price(&self) -> Money {
        Money::from_decimal(self.price, self.currency)
    }
}
