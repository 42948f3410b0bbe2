// LineItem model with eager derived-field recalculation
//
// A line item is one editable row of a purchase order, sales order,
// vendor bill or customer invoice. The three monetary outputs are
// recomputed from the inputs on every edit, so a rendered row can never
// show a stale subtotal.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::coerce_decimal;
use crate::products::ProductDetails;

/// Editable input fields of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    ProductId,
    Quantity,
    UnitPrice,
    TaxPercent,
}

/// One row of a transaction being edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    /// Stable identity assigned when the row is inserted. Survives removal
    /// of earlier rows, unlike the display position.
    pub row_id: u64,

    /// Opaque reference into the product catalog. Raw text as entered or
    /// selected; empty means the row is incomplete.
    pub product_id: String,

    /// Display cache populated from product lookup, not authoritative.
    pub product_name: String,

    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// Tax rate as a percentage, e.g. `18` for 18% GST.
    pub tax_percent: Decimal,

    /// Derived: quantity × unit_price
    pub subtotal: Decimal,
    /// Derived: subtotal × tax_percent / 100
    pub tax_amount: Decimal,
    /// Derived: subtotal + tax_amount
    pub total: Decimal,
}

impl LineItem {
    /// A fresh row the way the editor seeds it: quantity 1, everything
    /// else zero or empty.
    pub fn blank(row_id: u64) -> Self {
        let mut item = Self {
            row_id,
            product_id: String::new(),
            product_name: String::new(),
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
            tax_percent: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        };
        item.recalculate();
        item
    }

    /// Recompute the derived fields from the current inputs.
    pub fn recalculate(&mut self) {
        self.subtotal = self.quantity * self.unit_price;
        self.tax_amount = self.subtotal * self.tax_percent / Decimal::ONE_HUNDRED;
        self.total = self.subtotal + self.tax_amount;
    }

    /// Set one input field from raw widget text and recompute.
    ///
    /// Numeric fields coerce unparseable input to zero; the row never
    /// rejects an edit. A product id change leaves the derived fields
    /// alone until product lookup resolves.
    pub fn set_field(&mut self, field: LineItemField, raw: &str) {
        match field {
            LineItemField::ProductId => {
                self.product_id = raw.to_string();
                return;
            }
            LineItemField::Quantity => self.quantity = coerce_decimal(raw),
            LineItemField::UnitPrice => self.unit_price = coerce_decimal(raw),
            LineItemField::TaxPercent => self.tax_percent = coerce_decimal(raw),
        }
        self.recalculate();
    }

    /// Overwrite price, tax and display name from resolved catalog details,
    /// keeping the quantity the user already entered.
    pub fn apply_product_details(&mut self, details: &ProductDetails) {
        if !details.product_id.is_empty() {
            self.product_id = details.product_id.clone();
        }
        self.product_name = details.name.clone();
        self.unit_price = details.price;
        self.tax_percent = details.tax_percent;
        self.recalculate();
    }

    /// Whether the row satisfies submission requirements: a product
    /// reference, positive quantity and non-negative price.
    pub fn is_complete(&self) -> bool {
        !self.product_id.trim().is_empty()
            && self.quantity > Decimal::ZERO
            && self.unit_price >= Decimal::ZERO
    }
}
