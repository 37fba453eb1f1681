use super::ui;
use crate::core::config::HoldingEntry;
use crate::core::portfolio::{Holding, HoldingBook};
use crate::core::quote::QuoteProvider;
use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, CellAlignment};
use futures::future::join_all;
use std::collections::HashMap;
use tracing::debug;

/// One displayed row. A failed lookup keeps the configured fields and
/// carries the error instead of priced data.
struct HoldingRow {
    symbol: Option<String>,
    holding: Option<Holding>,
    error: Option<String>,
    entry: HoldingEntry,
}

async fn fetch_row(entry: HoldingEntry, provider: &dyn QuoteProvider) -> HoldingRow {
    let symbol = match provider.resolve_symbol(&entry.company).await {
        Ok(Some(symbol)) => symbol,
        Ok(None) => {
            return HoldingRow {
                symbol: None,
                holding: None,
                error: Some(format!("No listing found for {}", entry.company)),
                entry,
            };
        }
        Err(e) => {
            return HoldingRow {
                symbol: None,
                holding: None,
                error: Some(e.to_string()),
                entry,
            };
        }
    };

    match provider.latest_quote(&symbol).await {
        Ok(quote) => {
            let holding = Holding {
                company: entry.company.clone(),
                symbol: symbol.clone(),
                class: entry.class,
                quantity: entry.quantity,
                purchase_price: entry.purchase_price,
                current_price: quote.price,
            };
            HoldingRow {
                symbol: Some(symbol),
                holding: Some(holding),
                error: None,
                entry,
            }
        }
        Err(e) => HoldingRow {
            symbol: Some(symbol),
            holding: None,
            error: Some(e.to_string()),
            entry,
        },
    }
}

/// The book only exists when every row priced; totals and weights over a
/// partially priced portfolio would be misleading.
fn build_book(rows: &[HoldingRow]) -> Option<HoldingBook> {
    let mut book = HoldingBook::new();
    for row in rows {
        book.upsert(row.holding.clone()?);
    }
    Some(book)
}

fn display_rows(rows: &[HoldingRow], book: Option<&HoldingBook>) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Company"),
        ui::header_cell("Symbol"),
        ui::header_cell("Class"),
        ui::header_cell("Quantity"),
        ui::header_cell("Purchase"),
        ui::header_cell("Price"),
        ui::header_cell("Value"),
        ui::header_cell("P/L"),
        ui::header_cell("Weight (%)"),
    ]);

    let weights: HashMap<String, f64> = book
        .map(|b| b.weights().into_iter().collect())
        .unwrap_or_default();

    for row in rows {
        let has_error = row.error.is_some();

        let symbol_cell = match &row.symbol {
            Some(s) => Cell::new(s.clone()),
            None => ui::na_cell(has_error),
        };

        let (price_cell, value_cell, pl_cell) = match &row.holding {
            Some(h) => (
                ui::money_cell(h.current_price),
                ui::money_cell(h.market_value()),
                ui::profit_cell(h.profit_loss()),
            ),
            None => (
                ui::na_cell(has_error),
                ui::na_cell(has_error),
                ui::na_cell(has_error),
            ),
        };

        let weight_cell = weights
            .get(&row.entry.company)
            .map(|w| ui::format_percentage_cell(*w, |v| format!("{v:.2}%")))
            .unwrap_or_else(|| ui::na_cell(has_error));

        table.add_row(vec![
            Cell::new(row.entry.company.clone()),
            symbol_cell,
            Cell::new(row.entry.class.to_string()),
            Cell::new(format!("{:.2}", row.entry.quantity)).set_alignment(CellAlignment::Right),
            ui::money_cell(row.entry.purchase_price),
            price_cell,
            value_cell,
            pl_cell,
            weight_cell,
        ]);
    }

    let (total_text, total_style) = match book {
        Some(b) => (ui::format_money(b.total_value()), ui::StyleType::TotalValue),
        None => ("N/A".to_string(), ui::StyleType::Error),
    };

    let mut output = table.to_string();
    output.push_str(&format!(
        "\n\n{} {}",
        ui::style_text("Total Value:", ui::StyleType::TotalLabel),
        ui::style_text(&total_text, total_style)
    ));
    output.push_str(&format!(
        "\n{}",
        ui::style_text(
            &format!("Date: {}", Local::now().format("%Y-%m-%d")),
            ui::StyleType::Subtle
        )
    ));
    output
}

pub async fn run(holdings: &[HoldingEntry], provider: &dyn QuoteProvider) -> Result<()> {
    if holdings.is_empty() {
        println!(
            "{}",
            ui::style_text(
                "No holdings configured. Run `nestegg setup` and edit the config file.",
                ui::StyleType::Subtle
            )
        );
        return Ok(());
    }

    debug!("Pricing {} holdings", holdings.len());
    let pb = ui::new_progress_bar(holdings.len() as u64, true);
    pb.set_message("Fetching quotes...");

    let row_futures = holdings.iter().map(|entry| {
        let pb_clone = pb.clone();
        async move {
            let row = fetch_row(entry.clone(), provider).await;
            pb_clone.inc(1);
            row
        }
    });
    let rows: Vec<HoldingRow> = join_all(row_futures).await;
    pb.finish_and_clear();

    let book = build_book(&rows);
    println!("{}", display_rows(&rows, book.as_ref()));

    for row in &rows {
        if let Some(error) = &row.error {
            println!(
                "{}",
                ui::style_text(
                    &format!("{}: {}", row.entry.company, error),
                    ui::StyleType::Error
                )
            );
        }
    }

    Ok(())
}
