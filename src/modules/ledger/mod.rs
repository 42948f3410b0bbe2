// Ledger module: the line-items editor state

pub mod models;
pub mod services;

pub use models::{GrandTotals, LineItem, LineItemField, LineItemLedger};
pub use services::{validate_for_submission, SubmissionItem};
