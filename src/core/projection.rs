//! Year-by-year compound growth projections

use crate::core::asset::AssetClass;
use serde::{Deserialize, Serialize};

/// Class-based premium applied to the nominal growth rate.
///
/// The multipliers are fixed policy constants, not a statistical model:
/// stocks scale the rate up, bonds scale it down. Both are configurable,
/// with documented defaults of 1.2 and 0.8.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthPolicy {
    pub stock_multiplier: f64,
    pub bond_multiplier: f64,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy {
            stock_multiplier: 1.2,
            bond_multiplier: 0.8,
        }
    }
}

impl GrowthPolicy {
    pub fn multiplier(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::Stock => self.stock_multiplier,
            AssetClass::Bond => self.bond_multiplier,
        }
    }
}

/// A single year of a projection. Capital is rounded to cents on emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPoint {
    pub year: u32,
    pub capital: f64,
}

/// Projects the growth of a recurring annual contribution.
///
/// Each year the contribution is added first and then the adjusted rate is
/// applied, so the first contribution already compounds in the year it is
/// made. The running capital keeps full precision; only the emitted points
/// are rounded.
///
/// Callers validate ranges up front (non-negative contribution and rate,
/// at least one year); the projection itself has no error conditions.
pub fn project(
    contribution: f64,
    annual_rate_pct: f64,
    years: u32,
    class: AssetClass,
    policy: &GrowthPolicy,
) -> Vec<ProjectionPoint> {
    let adjusted_rate = annual_rate_pct / 100.0 * policy.multiplier(class);

    let mut capital = 0.0;
    let mut series = Vec::with_capacity(years as usize);
    for year in 1..=years {
        capital = (capital + contribution) * (1.0 + adjusted_rate);
        series.push(ProjectionPoint {
            year,
            capital: round2(capital),
        });
    }
    series
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
