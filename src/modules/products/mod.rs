// Products module: catalog lookup collaborator for the line-items editor

pub mod models;
pub mod services;

pub use models::{Product, ProductDetails, ProductType, TransactionDirection};
pub use services::{DebouncedSearch, HsnCode, HsnLookup, HsnQueryKind, ProductCatalog, ProductSearchClient};
