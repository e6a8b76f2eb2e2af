//! HTTP client for the transactions API.
//!
//! The dashboard issues exactly one kind of request: a GET against the
//! transactions listing. Errors are split into variants for diagnostics, but
//! the GUI collapses all of them into a single retryable message.

use crate::config::Config;
use crate::transaction::Transaction;
use thiserror::Error;

/// Resource path of the transactions listing, relative to the base URL.
pub const TRANSACTIONS_PATH: &str = "/api/transactions";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("background task failed: {0}")]
    Background(String),
}

/// Client for the payments API.
pub struct TransactionsClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransactionsClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// Full URL of the transactions listing.
    pub fn transactions_url(&self) -> String {
        format!("{}{}", self.base_url, TRANSACTIONS_PATH)
    }

    /// GET the transactions listing.
    ///
    /// No request parameters are sent. A non-success status becomes
    /// [`ApiError::Status`] with the response body attached for the log.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let url = self.transactions_url();
        tracing::debug!("fetching transactions from {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("transactions request returned {}: {}", status, body);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let transactions = response
            .json::<Vec<Transaction>>()
            .await
            .map_err(ApiError::Decode)?;
        tracing::info!("received {} transactions", transactions.len());
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactions_url() {
        let client = TransactionsClient::new(&Config::new("http://localhost:3000"));
        assert_eq!(client.transactions_url(), "http://localhost:3000/api/transactions");
    }

    #[test]
    fn test_transactions_url_after_normalization() {
        let client = TransactionsClient::new(&Config::new("http://api.example.com/"));
        assert_eq!(client.transactions_url(), "http://api.example.com/api/transactions");
    }

    #[test]
    fn test_unreachable_server_is_a_request_error() {
        // Port 9 (discard) is closed on any sane dev machine, so the
        // connection is refused immediately without touching the network.
        let client = TransactionsClient::new(&Config::new("http://127.0.0.1:9"));
        let result = tokio_test::block_on(client.fetch_transactions());
        assert!(matches!(result, Err(ApiError::Request(_))));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let err = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "server returned status 500: boom");

        let err = ApiError::Background("worker task disconnected".to_string());
        assert!(err.to_string().contains("worker task disconnected"));
    }
}
