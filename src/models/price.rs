//! Product price models.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::{PriceListId, ProductId};

/// The aggregated result of a price lookup: product id to a mapping from
/// price-list id to the quantity-break-at-1 price.
pub type PriceBook = BTreeMap<ProductId, BTreeMap<PriceListId, Decimal>>;

/// One product row from a `product-price` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPrice {
    /// The product this row prices.
    pub product_id: ProductId,
    /// Per-price-list entries for the product.
    #[serde(default)]
    pub price_lists: Vec<PriceListEntry>,
}

/// A single price-list entry within a [`ProductPrice`] row.
///
/// `quantity_price` maps quantity breaks (as strings, `"1"`, `"10"`, ...)
/// to the unit price at that break.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceListEntry {
    /// Which price list this entry belongs to.
    pub price_list_id: PriceListId,
    /// Quantity-break to unit-price mapping.
    #[serde(default)]
    pub quantity_price: BTreeMap<String, Decimal>,
}

impl PriceListEntry {
    /// The unit price at the quantity-1 break, if the list carries one.
    pub fn unit_price(&self) -> Option<Decimal> {
        self.quantity_price.get("1").copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deserialize_price_row() {
        let row: ProductPrice = serde_json::from_value(serde_json::json!({
            "productId": 1001,
            "priceLists": [
                {
                    "priceListId": 0,
                    "quantityPrice": { "1": "5.00", "10": "4.50" }
                }
            ]
        }))
        .unwrap();

        assert_eq!(row.product_id, ProductId::new(1001));
        assert_eq!(row.price_lists.len(), 1);
        assert_eq!(row.price_lists[0].unit_price(), Some(dec!(5.00)));
    }

    #[test]
    fn test_missing_quantity_one_break() {
        let row: ProductPrice = serde_json::from_value(serde_json::json!({
            "productId": 1002,
            "priceLists": [
                { "priceListId": 3, "quantityPrice": { "10": "4.50" } }
            ]
        }))
        .unwrap();

        assert_eq!(row.price_lists[0].unit_price(), None);
    }
}
