// Product selection: direction-aware resolution feeding the ledger

use ledgerdesk::ledger::{LineItemField, LineItemLedger};
use ledgerdesk::products::{Product, ProductType, TransactionDirection};
use ledgerdesk::transactions::TransactionKind;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn catalog_sofa() -> Product {
    Product {
        id: 7,
        name: "Sofa".to_string(),
        product_type: Some(ProductType::Goods),
        sales_price: Some(dec!(45000)),
        purchase_price: Some(dec!(30000)),
        sale_tax_percent: Some(dec!(12)),
        purchase_tax_percent: Some(dec!(5)),
        hsn_code: Some("9401".to_string()),
        category: Some("Living Room".to_string()),
    }
}

#[test]
fn test_sales_selection_scenario() {
    // Selecting a product on a customer invoice row with quantity 1.
    let mut ledger = LineItemLedger::with_blank_row();
    let details = catalog_sofa().details_for(TransactionKind::CustomerInvoice.direction());

    ledger.apply_product_details(0, &details);

    let row = ledger.row(0).unwrap();
    assert_eq!(row.unit_price, dec!(45000));
    assert_eq!(row.tax_percent, dec!(12));
    assert_eq!(row.subtotal, dec!(45000));
    assert_eq!(row.tax_amount, dec!(5400));
    assert_eq!(row.total, dec!(50400));
}

#[test]
fn test_purchase_selection_uses_purchase_pair() {
    let mut ledger = LineItemLedger::with_blank_row();
    ledger.update_field(0, LineItemField::Quantity, "2");
    let details = catalog_sofa().details_for(TransactionKind::PurchaseOrder.direction());

    ledger.apply_product_details(0, &details);

    let row = ledger.row(0).unwrap();
    assert_eq!(row.unit_price, dec!(30000));
    assert_eq!(row.tax_percent, dec!(5));
    assert_eq!(row.quantity, dec!(2));
    assert_eq!(row.subtotal, dec!(60000));
}

#[test]
fn test_selection_overwrites_manual_price() {
    let mut ledger = LineItemLedger::with_blank_row();
    ledger.update_field(0, LineItemField::UnitPrice, "123");
    ledger.update_field(0, LineItemField::TaxPercent, "18");

    let details = catalog_sofa().details_for(TransactionDirection::Sales);
    ledger.apply_product_details(0, &details);

    let row = ledger.row(0).unwrap();
    assert_eq!(row.unit_price, dec!(45000));
    assert_eq!(row.tax_percent, dec!(12));
    assert_eq!(row.product_name, "Sofa");
    assert_eq!(row.product_id, "7");
}

#[test]
fn test_product_without_prices_resolves_to_zero() {
    let product = Product {
        sales_price: None,
        sale_tax_percent: None,
        ..catalog_sofa()
    };

    let details = product.details_for(TransactionDirection::Sales);
    assert_eq!(details.price, Decimal::ZERO);
    assert_eq!(details.tax_percent, Decimal::ZERO);

    let mut ledger = LineItemLedger::with_blank_row();
    ledger.update_field(0, LineItemField::Quantity, "4");
    ledger.apply_product_details(0, &details);
    assert_eq!(ledger.row(0).unwrap().total, Decimal::ZERO);
}

#[test]
fn test_apply_to_missing_index_is_noop() {
    let mut ledger = LineItemLedger::new();
    let details = catalog_sofa().details_for(TransactionDirection::Sales);

    ledger.apply_product_details(3, &details);
    assert!(ledger.is_empty());
}
