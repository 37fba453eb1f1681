pub mod cli;
pub mod core;
pub mod providers;

use crate::core::asset::AssetClass;
use crate::core::cache::Cache;
use crate::core::config::AppConfig;
use crate::core::quote::Quote;
use anyhow::Result;
use providers::yahoo::YahooQuoteProvider;
use std::sync::Arc;
use tracing::{debug, info};

/// Commands the application can execute once configuration is loaded.
#[derive(Debug)]
pub enum AppCommand {
    Project {
        contribution: f64,
        rate: f64,
        years: u32,
        class: AssetClass,
    },
    Portfolio,
    Risk {
        symbol: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("nestegg starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Project {
            contribution,
            rate,
            years,
            class,
        } => cli::project::run(contribution, rate, years, class, &config.projection),
        AppCommand::Portfolio => {
            let provider = build_provider(&config);
            cli::portfolio::run(&config.holdings, &provider).await
        }
        AppCommand::Risk { symbol } => {
            let provider = build_provider(&config);
            cli::risk::run(&symbol, &provider, &config.risk).await
        }
    }
}

fn build_provider(config: &AppConfig) -> YahooQuoteProvider {
    let quote_cache = Arc::new(Cache::<String, Quote>::new());
    let history_cache = Arc::new(Cache::<String, Vec<f64>>::new());
    let symbol_cache = Arc::new(Cache::<String, Option<String>>::new());

    let base_url = config
        .providers
        .yahoo
        .as_ref()
        .map_or("https://query1.finance.yahoo.com", |p| &p.base_url);
    YahooQuoteProvider::new(base_url, quote_cache, history_cache, symbol_cache)
}
