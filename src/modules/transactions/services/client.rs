// REST client for transaction submission
//
// Wraps reqwest with retry middleware for transient failures; a 4xx
// rejection from the backend is surfaced as-is, never retried.

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

use super::super::models::{SubmittedTransaction, TransactionDraft};
use crate::config::ApiConfig;
use crate::core::{AppError, RefreshBus, RefreshEvent, Result};

pub struct TransactionsClient {
    http: ClientWithMiddleware,
    api: ApiConfig,
}

impl TransactionsClient {
    pub fn new(api: &ApiConfig) -> Result<Self> {
        let retry_policy =
            ExponentialBackoff::builder().build_with_max_retries(api.retry_max_attempts);

        let client = reqwest::Client::builder().timeout(api.timeout()).build()?;
        let http = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            http,
            api: api.clone(),
        })
    }

    /// Submit a validated draft to its create-with-items endpoint.
    pub async fn submit(&self, draft: &TransactionDraft) -> Result<SubmittedTransaction> {
        let url = self.api.endpoint(draft.kind.create_endpoint());

        tracing::info!(kind = %draft.kind, reference = %draft.reference, "submitting transaction");

        let response = self
            .http
            .post(&url)
            .json(&draft.payload())
            .send()
            .await
            .map_err(|e| AppError::api(format!("{} submission failed: {}", draft.kind, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::api(format!(
                "{} submission rejected ({}): {}",
                draft.kind, status, body
            )));
        }

        let accepted: SubmittedTransaction = response.json().await.map_err(|e| {
            AppError::api(format!("Failed to parse submission response: {}", e))
        })?;

        tracing::info!(
            kind = %draft.kind,
            id = accepted.id,
            number = accepted.number.as_deref().unwrap_or("-"),
            "transaction accepted"
        );

        Ok(accepted)
    }

    /// Submit a draft, then notify views that cached lists went stale.
    pub async fn submit_and_publish(
        &self,
        draft: &TransactionDraft,
        bus: &RefreshBus,
    ) -> Result<SubmittedTransaction> {
        let accepted = self.submit(draft).await?;
        bus.publish(&RefreshEvent::TransactionCommitted);
        Ok(accepted)
    }
}
