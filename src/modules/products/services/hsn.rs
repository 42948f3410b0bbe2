// HSN classification lookup
//
// The backend proxies the GST portal's HSN search; that upstream is slow
// and flaky, so a small built-in table of common codes keeps the product
// form usable when the remote search fails.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::core::{AppError, Result};

/// One HSN/SAC suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsnCode {
    pub hsn_code: String,
    pub description: String,
    /// GST rate as the portal reports it, a bare percentage string.
    pub gst_rate: String,
}

/// What the search input refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HsnQueryKind {
    Code,
    ProductDescription,
    ServiceDescription,
}

impl HsnQueryKind {
    fn query_params(self) -> (&'static str, &'static str) {
        match self {
            HsnQueryKind::Code => ("byCode", "null"),
            HsnQueryKind::ProductDescription => ("byDesc", "P"),
            HsnQueryKind::ServiceDescription => ("byDesc", "S"),
        }
    }
}

// Codes the original deployment saw most often, kept as offline fallback.
const FALLBACK_CODES: &[(&str, &str, &str)] = &[
    ("1001", "Wheat and meslin", "0"),
    ("1006", "Rice", "0"),
    (
        "2208",
        "Undenatured ethyl alcohol; spirits, liqueurs and other spirituous beverages",
        "28",
    ),
    (
        "8471",
        "Automatic data processing machines and units thereof",
        "18",
    ),
    (
        "6403",
        "Footwear with outer soles of rubber, plastics, leather or composition leather",
        "18",
    ),
    ("9403", "Other furniture and parts thereof", "12"),
    ("999799", "Transport of goods by road", "5"),
    ("998314", "Business support services", "18"),
];

/// HSN search against `/master-data/hsn-search/` with offline fallback.
pub struct HsnLookup {
    client: Client,
    api: ApiConfig,
}

impl HsnLookup {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(api.timeout()).build()?;

        Ok(Self {
            client,
            api: api.clone(),
        })
    }

    /// Search for HSN codes matching `input`.
    ///
    /// All-digit input always searches by code regardless of `kind`. When
    /// the backend or the upstream GST portal fails, the built-in table is
    /// filtered instead and the failure is only logged.
    pub async fn search(&self, input: &str, kind: HsnQueryKind) -> Result<Vec<HsnCode>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Vec::new());
        }

        let kind = if input.chars().all(|c| c.is_ascii_digit()) {
            HsnQueryKind::Code
        } else {
            kind
        };

        match self.fetch_remote(input, kind).await {
            Ok(codes) => Ok(codes),
            Err(err) => {
                tracing::warn!(%err, input, "HSN search failed, using fallback table");
                Ok(fallback_matches(input, kind))
            }
        }
    }

    async fn fetch_remote(&self, input: &str, kind: HsnQueryKind) -> Result<Vec<HsnCode>> {
        let url = self.api.endpoint("/master-data/hsn-search/");
        let (selected_type, category) = kind.query_params();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("inputText", input),
                ("selectedType", selected_type),
                ("category", category),
            ])
            .send()
            .await
            .map_err(|e| AppError::api(format!("HSN search failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::api(format!(
                "HSN search returned {}",
                response.status()
            )));
        }

        let codes = response
            .json::<HsnListResponse>()
            .await
            .map_err(|e| AppError::api(format!("Failed to parse HSN search response: {}", e)))?
            .into_codes();

        Ok(codes)
    }
}

// The GST portal wraps results in `{"data": [...]}`; the mock endpoint
// returns a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum HsnListResponse {
    Wrapped { data: Vec<HsnCode> },
    Plain(Vec<HsnCode>),
}

impl HsnListResponse {
    fn into_codes(self) -> Vec<HsnCode> {
        match self {
            HsnListResponse::Wrapped { data } => data,
            HsnListResponse::Plain(codes) => codes,
        }
    }
}

/// Filter the built-in table the same way the remote search would.
pub(crate) fn fallback_matches(input: &str, kind: HsnQueryKind) -> Vec<HsnCode> {
    let needle = input.to_lowercase();

    FALLBACK_CODES
        .iter()
        .filter(|(code, description, _)| match kind {
            HsnQueryKind::Code => code.contains(input),
            _ => description.to_lowercase().contains(&needle),
        })
        .map(|(code, description, rate)| HsnCode {
            hsn_code: (*code).to_string(),
            description: (*description).to_string(),
            gst_rate: (*rate).to_string(),
        })
        .collect()
}
