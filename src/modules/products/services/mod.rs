mod hsn;
mod search;

pub use hsn::{HsnCode, HsnLookup, HsnQueryKind};
pub use search::{DebouncedSearch, ProductCatalog, ProductSearchClient};
