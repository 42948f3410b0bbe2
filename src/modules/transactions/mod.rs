// Transactions module: drafts built from an edited ledger and the REST
// client that submits them

pub mod models;
pub mod services;

pub use models::{SubmittedTransaction, TransactionDraft, TransactionKind};
pub use services::TransactionsClient;
