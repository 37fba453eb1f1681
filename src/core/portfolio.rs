//! Holdings and the in-memory portfolio book

use crate::core::asset::AssetClass;
use serde::{Deserialize, Serialize};

/// A priced position.
///
/// Derived figures are methods rather than fields so they are recomputed on
/// every read and can never go stale against `current_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub company: String,
    pub symbol: String,
    pub class: AssetClass,
    pub quantity: f64,
    pub purchase_price: f64,
    pub current_price: f64,
}

impl Holding {
    pub fn market_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    pub fn profit_loss(&self) -> f64 {
        (self.current_price - self.purchase_price) * self.quantity
    }
}

/// Holding collection keyed by company name, in insertion order.
///
/// The book is a plain value handed to the presentation layer; nothing here
/// persists across runs.
#[derive(Debug, Default, Clone)]
pub struct HoldingBook {
    holdings: Vec<Holding>,
}

impl HoldingBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the holding for the same company, or appends a new one.
    pub fn upsert(&mut self, holding: Holding) {
        match self
            .holdings
            .iter_mut()
            .find(|h| h.company == holding.company)
        {
            Some(existing) => *existing = holding,
            None => self.holdings.push(holding),
        }
    }

    pub fn remove(&mut self, company: &str) -> Option<Holding> {
        let index = self.holdings.iter().position(|h| h.company == company)?;
        Some(self.holdings.remove(index))
    }

    pub fn get(&self, company: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.company == company)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holding> {
        self.holdings.iter()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn total_value(&self) -> f64 {
        self.holdings.iter().map(Holding::market_value).sum()
    }

    /// Share of total market value per company, in percent, in book order.
    /// Empty when the book has no value to weigh against.
    pub fn weights(&self) -> Vec<(String, f64)> {
        let total = self.total_value();
        if total <= 0.0 {
            return Vec::new();
        }
        self.holdings
            .iter()
            .map(|h| (h.company.clone(), h.market_value() / total * 100.0))
            .collect()
    }
}
