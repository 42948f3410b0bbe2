// HSN lookup degrades to the built-in table when the backend is down

use ledgerdesk::config::ApiConfig;
use ledgerdesk::products::{HsnLookup, HsnQueryKind};

fn unreachable_api() -> ApiConfig {
    // Nothing listens on port 9; connection fails immediately.
    ApiConfig {
        base_url: "http://127.0.0.1:9/api".to_string(),
        timeout_secs: 1,
        retry_max_attempts: 0,
    }
}

#[tokio::test]
async fn test_code_search_falls_back_offline() {
    let lookup = HsnLookup::new(&unreachable_api()).unwrap();

    let results = lookup.search("9403", HsnQueryKind::Code).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].hsn_code, "9403");
    assert_eq!(results[0].gst_rate, "12");
}

#[tokio::test]
async fn test_description_search_falls_back_offline() {
    let lookup = HsnLookup::new(&unreachable_api()).unwrap();

    let results = lookup
        .search("furniture", HsnQueryKind::ProductDescription)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results[0].description.contains("furniture"));
}

#[tokio::test]
async fn test_numeric_input_forces_code_search() {
    let lookup = HsnLookup::new(&unreachable_api()).unwrap();

    // Kind says description, but all-digit input searches codes.
    let results = lookup
        .search("1006", HsnQueryKind::ProductDescription)
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].description, "Rice");
}

#[tokio::test]
async fn test_blank_input_returns_nothing() {
    let lookup = HsnLookup::new(&unreachable_api()).unwrap();

    let results = lookup.search("  ", HsnQueryKind::Code).await.unwrap();
    assert!(results.is_empty());
}
