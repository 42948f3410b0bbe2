mod draft;

pub use draft::{SubmittedTransaction, TransactionDraft, TransactionKind};
