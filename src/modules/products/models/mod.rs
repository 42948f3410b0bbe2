mod product;

pub use product::{Product, ProductDetails, ProductType, TransactionDirection};
