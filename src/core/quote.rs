//! Quote lookup abstractions

use anyhow::Result;
use async_trait::async_trait;

/// Latest trade data for a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub price: f64,
    pub currency: String,
}

/// Market data lookup consumed by the portfolio and risk commands.
///
/// `resolve_symbol` returns `Ok(None)` when no listing matches the company
/// name; errors from any operation mean the data is unavailable. Both
/// outcomes are non-fatal: callers surface them per row and keep going.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn resolve_symbol(&self, company_name: &str) -> Result<Option<String>>;

    async fn latest_quote(&self, symbol: &str) -> Result<Quote>;

    /// Chronological daily closes, oldest first.
    async fn price_history(&self, symbol: &str) -> Result<Vec<f64>>;
}
