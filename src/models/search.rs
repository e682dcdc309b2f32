//! Search result models.
//!
//! Brightpearl search endpoints return a compact positional-array form:
//! each result row is a JSON array whose columns are identified only by
//! position. The mapping lives in [`product_columns`] so schema drift is a
//! one-line diff rather than a hunt for inlined literals.

use serde_json::Value;

use super::ProductId;
use crate::{Error, Result};

/// Column positions for product search rows.
///
/// The remote schema is undocumented; these offsets were established
/// against live responses and are exercised index-by-index in the unit
/// tests below.
pub mod product_columns {
    /// Numeric product identifier.
    pub const PRODUCT_ID: usize = 0;
    /// Display name.
    pub const PRODUCT_NAME: usize = 1;
    /// Stock-keeping unit.
    pub const SKU: usize = 2;
    /// European article number (may be null).
    pub const EAN: usize = 4;
    /// Whether stock levels are tracked for the product.
    pub const STOCK_TRACKED: usize = 7;
    /// Brightpearl category code (may be null).
    pub const CATEGORY_CODE: usize = 11;
    /// Product group identifier.
    pub const PRODUCT_GROUP_ID: usize = 12;
}

/// A product search row with the positional columns flattened into named
/// fields.
///
/// Only SKU/EAN lookups produce this form; other search methods return
/// the raw rows unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSearchRecord {
    /// Numeric product identifier.
    pub product_id: ProductId,
    /// Display name.
    pub product_name: String,
    /// Stock-keeping unit.
    pub sku: String,
    /// European article number, when the product carries one.
    pub ean: Option<String>,
    /// Whether stock levels are tracked for the product.
    pub stock_tracked: bool,
    /// Brightpearl category code, when assigned.
    pub category_code: Option<String>,
    /// Product group identifier.
    pub product_group_id: i64,
}

impl ProductSearchRecord {
    /// Build a record from one positional result row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedResponse`] naming the offending column
    /// when the row is too short or a column has an unexpected type.
    pub fn from_row(row: &[Value]) -> Result<Self> {
        use product_columns as col;

        Ok(Self {
            product_id: ProductId::new(col_i64(row, col::PRODUCT_ID, "productId")?),
            product_name: col_string(row, col::PRODUCT_NAME, "productName")?,
            sku: col_string(row, col::SKU, "sku")?,
            ean: col_opt_string(row, col::EAN, "ean")?,
            stock_tracked: col_bool(row, col::STOCK_TRACKED, "stockTracked")?,
            category_code: col_opt_string(row, col::CATEGORY_CODE, "categoryCode")?,
            product_group_id: col_i64(row, col::PRODUCT_GROUP_ID, "productGroupId")?,
        })
    }
}

fn col<'a>(row: &'a [Value], index: usize, name: &str) -> Result<&'a Value> {
    row.get(index).ok_or_else(|| {
        Error::malformed(format!(
            "search row has no column {index} ({name}); row length {}",
            row.len()
        ))
    })
}

fn col_i64(row: &[Value], index: usize, name: &str) -> Result<i64> {
    col(row, index, name)?
        .as_i64()
        .ok_or_else(|| Error::malformed(format!("search column {index} ({name}) is not an integer")))
}

fn col_bool(row: &[Value], index: usize, name: &str) -> Result<bool> {
    col(row, index, name)?
        .as_bool()
        .ok_or_else(|| Error::malformed(format!("search column {index} ({name}) is not a boolean")))
}

fn col_string(row: &[Value], index: usize, name: &str) -> Result<String> {
    col(row, index, name)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::malformed(format!("search column {index} ({name}) is not a string")))
}

/// Nullable string column; numeric values are stringified, which the
/// remote uses for some code columns.
fn col_opt_string(row: &[Value], index: usize, name: &str) -> Result<Option<String>> {
    match col(row, index, name)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(Error::malformed(format!(
            "search column {index} ({name}) is not a string or null"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_row() -> Vec<Value> {
        // 13 columns, shaped like a live product-search row
        vec![
            json!(251),                // 0 productId
            json!("Mizzen Mast"),      // 1 productName
            json!("MAST-001"),         // 2 sku
            json!("mast-001"),         // 3 (unmapped)
            json!("5012345678900"),    // 4 ean
            json!(null),               // 5 (unmapped)
            json!(null),               // 6 (unmapped)
            json!(true),               // 7 stockTracked
            json!("LIVE"),             // 8 (unmapped)
            json!(null),               // 9 (unmapped)
            json!(null),               // 10 (unmapped)
            json!("276"),              // 11 categoryCode
            json!(12),                 // 12 productGroupId
        ]
    }

    #[test]
    fn test_every_mapped_index() {
        use product_columns::*;
        // One assertion per mapped column; schema drift lands here first.
        assert_eq!(PRODUCT_ID, 0);
        assert_eq!(PRODUCT_NAME, 1);
        assert_eq!(SKU, 2);
        assert_eq!(EAN, 4);
        assert_eq!(STOCK_TRACKED, 7);
        assert_eq!(CATEGORY_CODE, 11);
        assert_eq!(PRODUCT_GROUP_ID, 12);
    }

    #[test]
    fn test_from_row() {
        let record = ProductSearchRecord::from_row(&sample_row()).unwrap();
        assert_eq!(record.product_id, ProductId::new(251));
        assert_eq!(record.product_name, "Mizzen Mast");
        assert_eq!(record.sku, "MAST-001");
        assert_eq!(record.ean.as_deref(), Some("5012345678900"));
        assert!(record.stock_tracked);
        assert_eq!(record.category_code.as_deref(), Some("276"));
        assert_eq!(record.product_group_id, 12);
    }

    #[test]
    fn test_nullable_columns() {
        let mut row = sample_row();
        row[product_columns::EAN] = Value::Null;
        row[product_columns::CATEGORY_CODE] = Value::Null;

        let record = ProductSearchRecord::from_row(&row).unwrap();
        assert_eq!(record.ean, None);
        assert_eq!(record.category_code, None);
    }

    #[test]
    fn test_numeric_category_code() {
        let mut row = sample_row();
        row[product_columns::CATEGORY_CODE] = json!(276);

        let record = ProductSearchRecord::from_row(&row).unwrap();
        assert_eq!(record.category_code.as_deref(), Some("276"));
    }

    #[test]
    fn test_short_row_is_malformed() {
        let row = vec![json!(251), json!("Mizzen Mast")];
        let err = ProductSearchRecord::from_row(&row).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_wrong_type_names_column() {
        let mut row = sample_row();
        row[product_columns::PRODUCT_ID] = json!("not-a-number");

        let err = ProductSearchRecord::from_row(&row).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("column 0"));
        assert!(text.contains("productId"));
    }
}
