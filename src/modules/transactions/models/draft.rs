// Transaction drafts
//
// A draft is the validated, submittable form of an edited ledger plus its
// header fields. It exists only between "user pressed submit" and "backend
// answered"; identity (real ids, document numbers, authoritative totals)
// is assigned server-side.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::core::Result;
use crate::ledger::{validate_for_submission, LineItemLedger, SubmissionItem};
use crate::products::TransactionDirection;

/// The four document types the editor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    PurchaseOrder,
    SalesOrder,
    VendorBill,
    CustomerInvoice,
}

impl TransactionKind {
    /// Which side of the trade this document sits on; selects the
    /// product price/tax pair during lookup.
    pub fn direction(&self) -> TransactionDirection {
        match self {
            TransactionKind::PurchaseOrder | TransactionKind::VendorBill => {
                TransactionDirection::Purchase
            }
            TransactionKind::SalesOrder | TransactionKind::CustomerInvoice => {
                TransactionDirection::Sales
            }
        }
    }

    /// Backend endpoint that creates this document together with its items.
    pub fn create_endpoint(&self) -> &'static str {
        match self {
            TransactionKind::PurchaseOrder => "/transactions/purchase-orders/create-with-items/",
            TransactionKind::SalesOrder => "/transactions/sales-orders/create-with-items/",
            TransactionKind::VendorBill => "/transactions/vendor-bills/create-with-items/",
            TransactionKind::CustomerInvoice => {
                "/transactions/customer-invoices/create-with-items/"
            }
        }
    }

    /// JSON key naming the counterparty for this document type.
    pub fn partner_field(&self) -> &'static str {
        match self.direction() {
            TransactionDirection::Purchase => "vendor_id",
            TransactionDirection::Sales => "customer_id",
        }
    }

    /// JSON key naming the document date for this document type.
    pub fn date_field(&self) -> &'static str {
        match self {
            TransactionKind::PurchaseOrder => "po_date",
            TransactionKind::SalesOrder => "so_date",
            TransactionKind::VendorBill => "bill_date",
            TransactionKind::CustomerInvoice => "invoice_date",
        }
    }

    /// Whether this document type carries an expected delivery date.
    pub fn has_delivery_date(&self) -> bool {
        matches!(
            self,
            TransactionKind::PurchaseOrder | TransactionKind::SalesOrder
        )
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::PurchaseOrder => write!(f, "purchase order"),
            TransactionKind::SalesOrder => write!(f, "sales order"),
            TransactionKind::VendorBill => write!(f, "vendor bill"),
            TransactionKind::CustomerInvoice => write!(f, "customer invoice"),
        }
    }
}

/// A validated transaction ready for submission.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    /// Contact id of the vendor or customer.
    pub partner_id: i64,
    pub date: NaiveDate,
    pub delivery_date: Option<NaiveDate>,
    /// Client-generated reference, useful for correlating retries.
    pub reference: Uuid,
    pub items: Vec<SubmissionItem>,
}

impl TransactionDraft {
    /// Build a draft from an edited ledger, running submission validation.
    ///
    /// Fails with the first validation problem; nothing is sent to the
    /// backend when this errors.
    pub fn from_ledger(
        kind: TransactionKind,
        partner_id: i64,
        date: NaiveDate,
        ledger: &LineItemLedger,
    ) -> Result<Self> {
        let items = validate_for_submission(ledger)?;

        Ok(Self {
            kind,
            partner_id,
            date,
            delivery_date: None,
            reference: Uuid::new_v4(),
            items,
        })
    }

    pub fn with_delivery_date(mut self, delivery_date: NaiveDate) -> Self {
        self.delivery_date = Some(delivery_date);
        self
    }

    /// Serialize into the request body the create-with-items endpoint
    /// expects: header fields keyed per document type plus the raw items.
    pub fn payload(&self) -> Value {
        let mut body = serde_json::Map::new();
        body.insert(self.kind.partner_field().to_string(), json!(self.partner_id));
        body.insert(
            self.kind.date_field().to_string(),
            json!(self.date.format("%Y-%m-%d").to_string()),
        );
        body.insert(
            "client_reference".to_string(),
            json!(self.reference.to_string()),
        );
        body.insert("items".to_string(), json!(self.items));

        if self.kind.has_delivery_date() {
            if let Some(delivery) = self.delivery_date {
                body.insert(
                    "delivery_date".to_string(),
                    json!(delivery.format("%Y-%m-%d").to_string()),
                );
            }
        }

        Value::Object(body)
    }
}

/// The accepted document as the backend returns it. Totals here are the
/// authoritative server-side recomputation, not the editor's preview.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedTransaction {
    pub id: i64,
    #[serde(
        default,
        alias = "po_number",
        alias = "so_number",
        alias = "bill_number",
        alias = "invoice_number"
    )]
    pub number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub subtotal: Option<Decimal>,
    #[serde(default)]
    pub tax_total: Option<Decimal>,
    #[serde(default)]
    pub grand_total: Option<Decimal>,
}
