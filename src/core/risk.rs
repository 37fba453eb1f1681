//! Risk estimation from price history: annualized volatility and
//! historical Value-at-Risk.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters of the risk estimate.
///
/// `var_percentile` is the return quantile reported as Value-at-Risk; the
/// default of 5.0 reads as "the one-period loss not exceeded with 95%
/// confidence". `periods_per_year` annualizes the per-period deviation and
/// defaults to 252 trading days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskPolicy {
    pub var_percentile: f64,
    pub periods_per_year: u32,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        RiskPolicy {
            var_percentile: 5.0,
            periods_per_year: 252,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskEstimate {
    pub volatility: f64,
    pub value_at_risk: f64,
}

/// Estimates risk from a chronological price history.
///
/// Returns `None` when fewer than two valid period returns remain or the
/// computation degenerates. Callers render that as "N/A" instead of
/// treating it as an error.
pub fn estimate_risk(prices: &[f64], policy: &RiskPolicy) -> Option<RiskEstimate> {
    let mut returns = period_returns(prices);
    if returns.len() < 2 {
        debug!("Insufficient returns for a risk estimate: {} valid", returns.len());
        return None;
    }

    let volatility = sample_std_dev(&returns) * f64::from(policy.periods_per_year).sqrt();
    let value_at_risk = percentile(&mut returns, policy.var_percentile);
    if !volatility.is_finite() || !value_at_risk.is_finite() {
        debug!("Risk estimate degenerated to a non-finite value");
        return None;
    }

    Some(RiskEstimate {
        volatility,
        value_at_risk,
    })
}

/// Simple period-over-period returns. Pairs with a non-positive earlier
/// price or a non-finite value are dropped.
fn period_returns(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .filter_map(|pair| {
            let (prev, next) = (pair[0], pair[1]);
            if prev > 0.0 && prev.is_finite() && next.is_finite() {
                Some((next - prev) / prev)
            } else {
                None
            }
        })
        .collect()
}

// Sample (n - 1) deviation; callers guarantee at least two values.
fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Linearly interpolated percentile over the sorted sample. The quantile
/// is clamped to 0..=100 so a configured value cannot index past the
/// sample.
fn percentile(values: &mut [f64], pct: f64) -> f64 {
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n == 1 {
        return values[0];
    }
    let rank = (pct.clamp(0.0, 100.0) / 100.0) * (n as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        values[lower]
    } else {
        let weight = rank - lower as f64;
        values[lower] * (1.0 - weight) + values[upper] * weight
    }
}
