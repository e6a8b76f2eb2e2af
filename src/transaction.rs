//! Transaction records as returned by the payments API.

use serde::Deserialize;

/// Direction of a Pix transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "cash_in")]
    CashIn,
    #[serde(rename = "cash_out")]
    CashOut,
}

/// A single payment transaction.
///
/// Records are read-only from the dashboard's perspective. They are fetched,
/// held in memory, and replaced wholesale on the next refresh.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Opaque unique identifier.
    pub id: String,
    /// Monetary value as a decimal string (e.g. "150.50").
    pub value: String,
    /// Lifecycle status as reported by the upstream system. Free text,
    /// matched case-insensitively against the known set when displayed.
    pub status: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// Deposit or withdrawal.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payload: Option<String>,
    /// Base64-encoded PNG of the payment QR code, when one exists.
    #[serde(default)]
    pub encoded_image: Option<String>,
}

impl Transaction {
    /// Whether this record carries a QR code image worth showing.
    pub fn has_image(&self) -> bool {
        self.encoded_image
            .as_deref()
            .map(|img| !img.is_empty())
            .unwrap_or(false)
    }

    /// Truncated identifier for table display (first 8 characters).
    pub fn short_id(&self) -> String {
        let prefix: String = self.id.chars().take(8).collect();
        format!("{}...", prefix)
    }
}
