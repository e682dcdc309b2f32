//! Prices service.

use std::collections::BTreeMap;
use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{PriceBook, PriceListId, ProductPrice, Service};
use crate::{Error, Result};

/// Service for product price lookups.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: brightpearl_rs::BrightpearlClient) -> brightpearl_rs::Result<()> {
/// let book = client.prices().product_prices("10001-10002").await?;
/// for (product, lists) in &book {
///     for (list, price) in lists {
///         println!("product {product} is {price} on list {list}");
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub struct PricesService {
    inner: Arc<ClientInner>,
}

impl PricesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the prices for a product range across every price list,
    /// merged into one [`PriceBook`].
    pub async fn product_prices(&self, range: &str) -> Result<PriceBook> {
        let uris = self
            .inner
            .sub_request_uris(Service::ProductPrice, range)
            .await?;
        let responses = self.collect_price_responses(&uris, None).await?;
        merge_prices(&responses)
    }

    /// Fetch the prices for a product range on a single price list.
    pub async fn product_prices_in_list(
        &self,
        range: &str,
        price_list: PriceListId,
    ) -> Result<PriceBook> {
        let uris = self
            .inner
            .sub_request_uris(Service::ProductPrice, range)
            .await?;
        let suffix = format!("/price-list/{price_list}");
        let responses = self.collect_price_responses(&uris, Some(&suffix)).await?;
        merge_prices(&responses)
    }

    /// GET each sub-request in order. A rejected single-item lookup whose
    /// body carries an error indicator means "no prices for this item"
    /// and is skipped; any other failure aborts.
    async fn collect_price_responses(
        &self,
        uris: &[String],
        suffix: Option<&str>,
    ) -> Result<Vec<Value>> {
        let mut responses = Vec::new();
        for uri in uris {
            let uri = match suffix {
                Some(suffix) => format!("{uri}{suffix}"),
                None => uri.clone(),
            };
            match self.inner.send(Method::GET, &uri, None).await {
                Ok(value) => responses.push(value),
                Err(Error::Api { body, .. }) if body.get("errors").is_some() => {
                    tracing::debug!(%uri, "no prices for chunk, skipping");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(responses)
    }
}

/// Fold per-chunk price responses into one [`PriceBook`].
///
/// A response carrying an `"errors"` indicator contributes nothing. A
/// price-list entry with no quantity-1 break is skipped rather than
/// leaving a gap entry.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] when a response carries neither
/// an error indicator nor a `"response"` list of price rows.
pub fn merge_prices(responses: &[Value]) -> Result<PriceBook> {
    let mut book = PriceBook::new();

    for response in responses {
        if response.get("errors").is_some() {
            continue;
        }

        let rows = response
            .get("response")
            .and_then(|r| r.as_array())
            .ok_or_else(|| Error::malformed("price response: expected a \"response\" list"))?;

        for row in rows {
            let row: ProductPrice = serde_json::from_value(row.clone())
                .map_err(|err| Error::malformed(format!("price row: {err}")))?;

            let mut lists = BTreeMap::new();
            for entry in &row.price_lists {
                if let Some(price) = entry.unit_price() {
                    lists.insert(entry.price_list_id, price);
                }
            }
            if !lists.is_empty() {
                book.entry(row.product_id).or_default().extend(lists);
            }
        }
    }

    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductId;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_merge_two_chunks() {
        let responses = vec![
            json!({
                "response": [{
                    "productId": 1001,
                    "priceLists": [
                        { "priceListId": 0, "quantityPrice": { "1": "5.00" } }
                    ]
                }]
            }),
            json!({
                "response": [{
                    "productId": 1002,
                    "priceLists": [
                        { "priceListId": 0, "quantityPrice": { "1": "6.00" } }
                    ]
                }]
            }),
        ];

        let book = merge_prices(&responses).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(
            book[&ProductId::new(1001)][&PriceListId::new(0)],
            dec!(5.00)
        );
        assert_eq!(
            book[&ProductId::new(1002)][&PriceListId::new(0)],
            dec!(6.00)
        );
    }

    #[test]
    fn test_merge_multiple_price_lists() {
        let responses = vec![json!({
            "response": [{
                "productId": 1001,
                "priceLists": [
                    { "priceListId": 0, "quantityPrice": { "1": "5.00" } },
                    { "priceListId": 3, "quantityPrice": { "1": "4.10", "10": "3.80" } }
                ]
            }]
        })];

        let book = merge_prices(&responses).unwrap();
        let lists = &book[&ProductId::new(1001)];
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[&PriceListId::new(0)], dec!(5.00));
        assert_eq!(lists[&PriceListId::new(3)], dec!(4.10));
    }

    #[test]
    fn test_error_indicator_is_skipped() {
        let responses = vec![
            json!({ "errors": [{ "code": "PRDC-000", "message": "no prices" }] }),
            json!({
                "response": [{
                    "productId": 1002,
                    "priceLists": [
                        { "priceListId": 0, "quantityPrice": { "1": "6.00" } }
                    ]
                }]
            }),
        ];

        let book = merge_prices(&responses).unwrap();
        assert_eq!(book.len(), 1);
        assert!(book.contains_key(&ProductId::new(1002)));
    }

    #[test]
    fn test_missing_quantity_one_break_leaves_no_gap() {
        let responses = vec![json!({
            "response": [{
                "productId": 1003,
                "priceLists": [
                    { "priceListId": 7, "quantityPrice": { "10": "3.00" } }
                ]
            }]
        })];

        let book = merge_prices(&responses).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let responses = vec![json!({ "response": { "unexpected": "object" } })];
        let err = merge_prices(&responses).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(merge_prices(&[]).unwrap().is_empty());
    }
}
