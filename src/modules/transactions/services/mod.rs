mod client;

pub use client::TransactionsClient;
