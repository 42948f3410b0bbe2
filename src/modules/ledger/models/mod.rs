mod ledger;
mod line_item;

pub use ledger::{GrandTotals, LineItemLedger};
pub use line_item::{LineItem, LineItemField};
