use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::core::cache::Cache;
use crate::core::quote::{Quote, QuoteProvider};
use crate::providers::util::with_retry;

// YahooQuoteProvider implementation for QuoteProvider
pub struct YahooQuoteProvider {
    base_url: String,
    quote_cache: Arc<Cache<String, Quote>>,
    history_cache: Arc<Cache<String, Vec<f64>>>,
    symbol_cache: Arc<Cache<String, Option<String>>>,
}

impl YahooQuoteProvider {
    pub fn new(
        base_url: &str,
        quote_cache: Arc<Cache<String, Quote>>,
        history_cache: Arc<Cache<String, Vec<f64>>>,
        symbol_cache: Arc<Cache<String, Option<String>>>,
    ) -> Self {
        YahooQuoteProvider {
            base_url: base_url.to_string(),
            quote_cache,
            history_cache,
            symbol_cache,
        }
    }

    async fn fetch_chart(&self, symbol: &str) -> Result<ChartItem> {
        let url = format!(
            "{}/v8/finance/chart/{}?interval=1d&range=3mo",
            self.base_url, symbol
        );
        debug!("Requesting chart data from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("nestegg/1.0")
            .build()?;
        let response = with_retry(|| async { client.get(&url).send().await }, 3, 500)
            .await
            .with_context(|| format!("Failed to send chart request for symbol: {symbol}"))?;

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read chart response for symbol: {symbol}"))?;
        let data: ChartResponse = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse chart response for symbol: {symbol}"))?;

        data.chart
            .result
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No chart data found for symbol: {}", symbol))
    }
}

#[derive(Deserialize, Debug)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    result: Vec<ChartItem>,
}

#[derive(Deserialize, Debug)]
struct ChartItem {
    meta: ChartMeta,
    indicators: Option<Indicators>,
}

#[derive(Deserialize, Debug)]
struct ChartMeta {
    #[serde(alias = "regularMarketPrice")]
    regular_market_price: f64,
    currency: String,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    quote: Vec<QuoteBars>,
}

#[derive(Deserialize, Debug)]
struct QuoteBars {
    close: Option<Vec<Option<f64>>>,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    quotes: Vec<SearchQuote>,
}

#[derive(Deserialize, Debug)]
struct SearchQuote {
    #[serde(default)]
    symbol: String,
}

#[async_trait]
impl QuoteProvider for YahooQuoteProvider {
    #[instrument(
        name = "YahooSymbolSearch",
        skip(self),
        fields(company = %company_name)
    )]
    async fn resolve_symbol(&self, company_name: &str) -> Result<Option<String>> {
        let key = company_name.trim().to_lowercase();
        if let Some(cached) = self.symbol_cache.get(&key).await {
            return Ok(cached);
        }

        let url = format!("{}/v1/finance/search", self.base_url);
        debug!("Searching symbol via {}", url);

        let client = reqwest::Client::builder()
            .user_agent("nestegg/1.0")
            .build()?;
        let response = with_retry(
            || async { client.get(&url).query(&[("q", company_name)]).send().await },
            3,
            500,
        )
        .await
        .with_context(|| format!("Failed to send search request for company: {company_name}"))?;

        let data = response
            .json::<SearchResponse>()
            .await
            .with_context(|| format!("Failed to parse search response for company: {company_name}"))?;

        let symbol = data
            .quotes
            .into_iter()
            .map(|q| q.symbol)
            .find(|s| !s.is_empty());
        debug!("Resolved company {:?} to symbol {:?}", company_name, symbol);

        // Misses are cached too so a bad name is searched once per run.
        self.symbol_cache.put(key, symbol.clone()).await;
        Ok(symbol)
    }

    #[instrument(
        name = "YahooQuoteFetch",
        skip(self),
        fields(symbol = %symbol)
    )]
    async fn latest_quote(&self, symbol: &str) -> Result<Quote> {
        if let Some(cached) = self.quote_cache.get(&symbol.to_string()).await {
            return Ok(cached);
        }

        let item = self.fetch_chart(symbol).await?;
        let quote = Quote {
            price: item.meta.regular_market_price,
            currency: item.meta.currency,
        };

        self.quote_cache.put(symbol.to_string(), quote.clone()).await;
        Ok(quote)
    }

    #[instrument(
        name = "YahooHistoryFetch",
        skip(self),
        fields(symbol = %symbol)
    )]
    async fn price_history(&self, symbol: &str) -> Result<Vec<f64>> {
        if let Some(cached) = self.history_cache.get(&symbol.to_string()).await {
            return Ok(cached);
        }

        let item = self.fetch_chart(symbol).await?;
        let closes: Vec<f64> = item
            .indicators
            .and_then(|inds| inds.quote.into_iter().next())
            .and_then(|bars| bars.close)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .collect();

        if closes.is_empty() {
            return Err(anyhow!("No close history found for symbol: {}", symbol));
        }

        self.history_cache
            .put(symbol.to_string(), closes.clone())
            .await;
        Ok(closes)
    }
}
