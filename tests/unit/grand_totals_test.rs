// Property-based checks for grand total aggregation

use ledgerdesk::ledger::{LineItemField, LineItemLedger};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn build_ledger(rows: &[(u32, u64, u8)]) -> LineItemLedger {
    let mut ledger = LineItemLedger::new();
    for (idx, (qty, price_paise, tax)) in rows.iter().enumerate() {
        ledger.add_row();
        let price = Decimal::new(*price_paise as i64, 2);
        ledger.update_field(idx, LineItemField::Quantity, &qty.to_string());
        ledger.update_field(idx, LineItemField::UnitPrice, &price.to_string());
        ledger.update_field(idx, LineItemField::TaxPercent, &tax.to_string());
    }
    ledger
}

proptest! {
    #[test]
    fn test_grand_totals_equal_row_sums(
        rows in prop::collection::vec((0u32..1_000, 0u64..10_000_000, 0u8..=100), 0..8)
    ) {
        let ledger = build_ledger(&rows);
        let totals = ledger.grand_totals();

        let subtotal: Decimal = ledger.rows().iter().map(|r| r.subtotal).sum();
        let tax_total: Decimal = ledger.rows().iter().map(|r| r.tax_amount).sum();
        let grand_total: Decimal = ledger.rows().iter().map(|r| r.total).sum();

        prop_assert_eq!(totals.subtotal, subtotal);
        prop_assert_eq!(totals.tax_total, tax_total);
        prop_assert_eq!(totals.grand_total, grand_total);
    }

    #[test]
    fn test_grand_total_is_subtotal_plus_tax(
        rows in prop::collection::vec((0u32..1_000, 0u64..10_000_000, 0u8..=100), 0..8)
    ) {
        let totals = build_ledger(&rows).grand_totals();
        prop_assert_eq!(totals.grand_total, totals.subtotal + totals.tax_total);
    }

    #[test]
    fn test_grand_totals_read_is_idempotent(
        rows in prop::collection::vec((0u32..1_000, 0u64..10_000_000, 0u8..=100), 0..8)
    ) {
        let ledger = build_ledger(&rows);
        prop_assert_eq!(ledger.grand_totals(), ledger.grand_totals());
    }

    #[test]
    fn test_totals_never_negative_for_non_negative_inputs(
        rows in prop::collection::vec((0u32..1_000, 0u64..10_000_000, 0u8..=100), 0..8)
    ) {
        let totals = build_ledger(&rows).grand_totals();
        prop_assert!(totals.subtotal >= Decimal::ZERO);
        prop_assert!(totals.tax_total >= Decimal::ZERO);
        prop_assert!(totals.grand_total >= totals.subtotal);
    }

    #[test]
    fn test_removing_a_row_subtracts_exactly_its_totals(
        rows in prop::collection::vec((0u32..1_000, 0u64..10_000_000, 0u8..=100), 1..8),
        victim_seed in 0usize..8
    ) {
        let mut ledger = build_ledger(&rows);
        let victim = victim_seed % ledger.len();
        let row = ledger.row(victim).unwrap().clone();
        let before = ledger.grand_totals();

        ledger.remove_row(victim);
        let after = ledger.grand_totals();

        prop_assert_eq!(after.subtotal, before.subtotal - row.subtotal);
        prop_assert_eq!(after.tax_total, before.tax_total - row.tax_amount);
        prop_assert_eq!(after.grand_total, before.grand_total - row.total);
    }
}
