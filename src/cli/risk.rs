use super::ui;
use crate::core::quote::QuoteProvider;
use crate::core::risk::{RiskPolicy, estimate_risk};
use anyhow::Result;
use tracing::debug;

/// Runs the risk profile command for a single symbol.
///
/// Fetch and estimation failures degrade to N/A cells; the command itself
/// only fails on rendering problems.
pub async fn run(symbol: &str, provider: &dyn QuoteProvider, policy: &RiskPolicy) -> Result<()> {
    println!(
        "{}",
        ui::style_text(&format!("Risk profile: {symbol}"), ui::StyleType::Title)
    );

    let history = provider.price_history(symbol).await;
    let estimate = match &history {
        Ok(prices) => estimate_risk(prices, policy),
        Err(e) => {
            debug!("History fetch failed for {}: {}", symbol, e);
            None
        }
    };

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Annualized Volatility"),
        ui::header_cell(&format!("VaR ({}%)", policy.var_percentile)),
    ]);

    let has_error = history.is_err();
    table.add_row(vec![
        ui::format_optional_cell(estimate.as_ref().map(|e| e.volatility * 100.0), |v| {
            format!("{v:.2}%")
        }),
        estimate
            .as_ref()
            .map(|e| ui::change_cell(e.value_at_risk * 100.0))
            .unwrap_or_else(|| ui::na_cell(has_error)),
    ]);
    println!("{table}");

    match &history {
        Err(e) => println!(
            "{}",
            ui::style_text(
                &format!("No data available for {symbol}: {e}"),
                ui::StyleType::Error
            )
        ),
        Ok(_) if estimate.is_none() => println!(
            "{}",
            ui::style_text("Not enough usable price history", ui::StyleType::Subtle)
        ),
        Ok(prices) => println!(
            "{}",
            ui::style_text(
                &format!("Based on {} daily closes", prices.len()),
                ui::StyleType::Subtle
            )
        ),
    }

    Ok(())
}
