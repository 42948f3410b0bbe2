// Product catalog records as the backend serves them
//
// A product carries separate price and tax columns for each side of the
// trade; which pair a row uses depends on whether the enclosing
// transaction buys or sells.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a transaction buys from a vendor or sells to a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionDirection {
    Sales,
    Purchase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Goods,
    Service,
}

/// One catalog record from `/master-data/products/`.
///
/// Price and tax fields are optional on the wire; a missing value
/// resolves to zero, matching how the editor treats absent numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(default)]
    pub sales_price: Option<Decimal>,
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
    #[serde(default)]
    pub sale_tax_percent: Option<Decimal>,
    #[serde(default)]
    pub purchase_tax_percent: Option<Decimal>,
    #[serde(default)]
    pub hsn_code: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    pub fn price_for(&self, direction: TransactionDirection) -> Decimal {
        match direction {
            TransactionDirection::Sales => self.sales_price,
            TransactionDirection::Purchase => self.purchase_price,
        }
        .unwrap_or(Decimal::ZERO)
    }

    pub fn tax_percent_for(&self, direction: TransactionDirection) -> Decimal {
        match direction {
            TransactionDirection::Sales => self.sale_tax_percent,
            TransactionDirection::Purchase => self.purchase_tax_percent,
        }
        .unwrap_or(Decimal::ZERO)
    }

    /// Resolve this record into the one-shot payload a selected row
    /// receives, using the price/tax pair for `direction`.
    pub fn details_for(&self, direction: TransactionDirection) -> ProductDetails {
        ProductDetails {
            product_id: self.id.to_string(),
            name: self.name.clone(),
            price: self.price_for(direction),
            tax_percent: self.tax_percent_for(direction),
            hsn_code: self.hsn_code.clone(),
            category: self.category.clone(),
        }
    }
}

/// Resolved attributes handed to the ledger when the user picks a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetails {
    pub product_id: String,
    pub name: String,
    pub price: Decimal,
    pub tax_percent: Decimal,
    pub hsn_code: Option<String>,
    pub category: Option<String>,
}
