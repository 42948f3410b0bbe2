pub mod ledger;
pub mod products;
pub mod transactions;
