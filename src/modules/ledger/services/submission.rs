// Submission-side validation of an edited ledger
//
// The calculator itself never rejects input; everything the user typed is
// coerced and displayed. This is the gate in front of the backend call:
// every row must be fully specified before the transaction leaves the
// client, and nothing is sent when validation fails.

use rust_decimal::Decimal;
use serde::Serialize;

use super::super::models::LineItemLedger;
use crate::core::{AppError, Result};

/// One line item in the shape the backend accepts.
///
/// Derived fields are deliberately absent: the backend recomputes
/// authoritative totals from these inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionItem {
    pub product_id: i64,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub tax_percent: Decimal,
}

/// Check every row and convert the ledger into backend line items.
///
/// Rules: at least one row; each row needs a resolvable product reference,
/// quantity > 0, unit price ≥ 0 and a tax rate within 0–100%. Messages
/// carry the 1-based row number the user sees.
pub fn validate_for_submission(ledger: &LineItemLedger) -> Result<Vec<SubmissionItem>> {
    if ledger.is_empty() {
        return Err(AppError::validation(
            "Transaction must have at least one line item",
        ));
    }

    let hundred = Decimal::ONE_HUNDRED;
    let mut items = Vec::with_capacity(ledger.len());

    for (idx, row) in ledger.rows().iter().enumerate() {
        let line = idx + 1;

        let product_ref = row.product_id.trim();
        if product_ref.is_empty() {
            return Err(AppError::validation(format!(
                "Line {}: product is required",
                line
            )));
        }
        let product_id: i64 = product_ref.parse().map_err(|_| {
            AppError::validation(format!(
                "Line {}: product reference '{}' is not a valid id",
                line, product_ref
            ))
        })?;

        if row.quantity <= Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Line {}: quantity must be positive",
                line
            )));
        }

        if row.unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Line {}: unit price must be non-negative",
                line
            )));
        }

        if row.tax_percent < Decimal::ZERO || row.tax_percent > hundred {
            return Err(AppError::validation(format!(
                "Line {}: tax percent must be between 0 and 100",
                line
            )));
        }

        items.push(SubmissionItem {
            product_id,
            quantity: row.quantity,
            unit_price: row.unit_price,
            tax_percent: row.tax_percent,
        });
    }

    Ok(items)
}
