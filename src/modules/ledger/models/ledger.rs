// LineItemLedger: the ordered row collection behind a transaction editor
//
// The ledger owns the rows for exactly one in-progress transaction. It is
// created when the editing form mounts and discarded after submission, so
// nothing here persists. Grand totals are folded from the rows on every
// read; with a handful of rows per transaction there is nothing to gain
// from incremental bookkeeping.

use rust_decimal::Decimal;
use serde::Serialize;

use super::line_item::{LineItem, LineItemField};
use crate::products::ProductDetails;

/// Sums of the per-row derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrandTotals {
    pub subtotal: Decimal,
    pub tax_total: Decimal,
    pub grand_total: Decimal,
}

impl GrandTotals {
    pub const ZERO: GrandTotals = GrandTotals {
        subtotal: Decimal::ZERO,
        tax_total: Decimal::ZERO,
        grand_total: Decimal::ZERO,
    };
}

/// Ordered, editable collection of [`LineItem`]s.
///
/// Rows are addressed by display position for user edits, and by their
/// stable `row_id` for callbacks that may land after the collection has
/// changed (product lookup resolutions).
#[derive(Debug, Clone, Default)]
pub struct LineItemLedger {
    rows: Vec<LineItem>,
    next_row_id: u64,
}

impl LineItemLedger {
    /// An empty ledger. Valid, but not submittable until a complete row
    /// is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger seeded with one blank row, the way creation forms mount.
    pub fn with_blank_row() -> Self {
        let mut ledger = Self::new();
        ledger.add_row();
        ledger
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&LineItem> {
        self.rows.get(index)
    }

    pub fn row_by_id(&self, row_id: u64) -> Option<&LineItem> {
        self.rows.iter().find(|r| r.row_id == row_id)
    }

    /// Append a blank row and return its stable id.
    pub fn add_row(&mut self) -> u64 {
        self.next_row_id += 1;
        let row_id = self.next_row_id;
        self.rows.push(LineItem::blank(row_id));
        row_id
    }

    /// Remove the row at `index`. Out-of-range indices are ignored;
    /// later rows shift down one position.
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Remove the row carrying `row_id`, wherever it currently sits.
    pub fn remove_row_by_id(&mut self, row_id: u64) {
        self.rows.retain(|r| r.row_id != row_id);
    }

    /// Set one input field on the row at `index` and recompute its
    /// derived fields. Out-of-range indices are ignored.
    pub fn update_field(&mut self, index: usize, field: LineItemField, raw: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set_field(field, raw);
        }
    }

    /// Apply resolved product details to the row at `index`.
    pub fn apply_product_details(&mut self, index: usize, details: &ProductDetails) {
        if let Some(row) = self.rows.get_mut(index) {
            row.apply_product_details(details);
        }
    }

    /// Apply resolved product details to the row carrying `row_id`.
    ///
    /// Product lookup resolves asynchronously; addressing the row by id
    /// keeps a late resolution from landing on whichever row happens to
    /// occupy the captured position by then. A resolution for a row that
    /// was removed mid-flight is dropped.
    pub fn apply_product_details_by_id(&mut self, row_id: u64, details: &ProductDetails) {
        match self.rows.iter_mut().find(|r| r.row_id == row_id) {
            Some(row) => row.apply_product_details(details),
            None => {
                tracing::debug!(row_id, "product details arrived for a removed row, dropping");
            }
        }
    }

    /// Fold the per-row derived fields into order-level totals.
    pub fn grand_totals(&self) -> GrandTotals {
        self.rows.iter().fold(GrandTotals::ZERO, |acc, row| GrandTotals {
            subtotal: acc.subtotal + row.subtotal,
            tax_total: acc.tax_total + row.tax_amount,
            grand_total: acc.grand_total + row.total,
        })
    }
}
