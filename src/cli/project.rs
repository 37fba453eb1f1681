use anyhow::{Result, bail};

use crate::cli::ui::{StyleType, format_money, header_cell, money_cell, new_styled_table, style_text};
use crate::core::asset::AssetClass;
use crate::core::projection::{GrowthPolicy, project};
use comfy_table::{Cell, CellAlignment};

/// Runs the savings projection command.
///
/// Input ranges are checked here so the projection itself stays infallible.
pub fn run(
    contribution: f64,
    rate: f64,
    years: u32,
    class: AssetClass,
    policy: &GrowthPolicy,
) -> Result<()> {
    if contribution < 0.0 {
        bail!("Contribution must be zero or positive");
    }
    if rate < 0.0 {
        bail!("Rate must be zero or positive");
    }
    if years < 1 {
        bail!("Years must be at least 1");
    }

    let series = project(contribution, rate, years, class, policy);

    println!(
        "{}",
        style_text(
            &format!("Savings projection: {class}, {rate}% nominal"),
            StyleType::Title
        )
    );

    let mut table = new_styled_table();
    table.set_header(vec![header_cell("Year"), header_cell("Accumulated Capital")]);
    for point in &series {
        table.add_row(vec![
            Cell::new(point.year.to_string()).set_alignment(CellAlignment::Right),
            money_cell(point.capital),
        ]);
    }
    println!("{table}");

    if let Some(last) = series.last() {
        println!(
            "\n{} {}",
            style_text(
                &format!("Final capital after {years} years:"),
                StyleType::TotalLabel
            ),
            style_text(&format_money(last.capital), StyleType::TotalValue)
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_valid_inputs() {
        let result = run(1000.0, 5.0, 10, AssetClass::Stock, &GrowthPolicy::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_negative_contribution_rejected() {
        let result = run(-1.0, 5.0, 10, AssetClass::Stock, &GrowthPolicy::default());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Contribution must be zero or positive"
        );
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = run(1000.0, -0.5, 10, AssetClass::Bond, &GrowthPolicy::default());
        assert_eq!(result.unwrap_err().to_string(), "Rate must be zero or positive");
    }

    #[test]
    fn test_zero_years_rejected() {
        let result = run(1000.0, 5.0, 0, AssetClass::Stock, &GrowthPolicy::default());
        assert_eq!(result.unwrap_err().to_string(), "Years must be at least 1");
    }
}
