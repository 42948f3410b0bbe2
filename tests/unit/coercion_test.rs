// Permissive numeric coercion: bad input becomes zero, never an error
//
// The editor deliberately accepts anything typed into a numeric cell and
// treats unparseable text as zero. These tests pin that contract.

use ledgerdesk::ledger::{LineItemField, LineItemLedger};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_non_numeric_quantity_yields_zero_subtotal() {
    let mut ledger = LineItemLedger::with_blank_row();
    ledger.update_field(0, LineItemField::UnitPrice, "100");
    ledger.update_field(0, LineItemField::Quantity, "abc");

    let row = ledger.row(0).unwrap();
    assert_eq!(row.subtotal, Decimal::ZERO);
    assert_eq!(row.total, Decimal::ZERO);
}

#[test]
fn test_empty_string_is_zero() {
    let mut ledger = LineItemLedger::with_blank_row();
    ledger.update_field(0, LineItemField::Quantity, "5");
    ledger.update_field(0, LineItemField::UnitPrice, "");

    assert_eq!(ledger.row(0).unwrap().subtotal, Decimal::ZERO);
}

#[test]
fn test_whitespace_padding_is_tolerated() {
    let mut ledger = LineItemLedger::with_blank_row();
    ledger.update_field(0, LineItemField::Quantity, "  2 ");
    ledger.update_field(0, LineItemField::UnitPrice, " 100.00");

    assert_eq!(ledger.row(0).unwrap().subtotal, dec!(200.00));
}

#[test]
fn test_bad_tax_percent_drops_tax_to_zero() {
    let mut ledger = LineItemLedger::with_blank_row();
    ledger.update_field(0, LineItemField::Quantity, "2");
    ledger.update_field(0, LineItemField::UnitPrice, "100");
    ledger.update_field(0, LineItemField::TaxPercent, "18");
    assert_eq!(ledger.row(0).unwrap().tax_amount, dec!(36));

    ledger.update_field(0, LineItemField::TaxPercent, "18%");

    let row = ledger.row(0).unwrap();
    assert_eq!(row.tax_percent, Decimal::ZERO);
    assert_eq!(row.tax_amount, Decimal::ZERO);
    assert_eq!(row.total, dec!(200));
}

#[test]
fn test_coerced_zeros_still_sum_cleanly() {
    let mut ledger = LineItemLedger::new();
    ledger.add_row();
    ledger.add_row();
    ledger.update_field(0, LineItemField::Quantity, "oops");
    ledger.update_field(0, LineItemField::UnitPrice, "100");
    ledger.update_field(1, LineItemField::Quantity, "1");
    ledger.update_field(1, LineItemField::UnitPrice, "50");

    assert_eq!(ledger.grand_totals().grand_total, dec!(50));
}
