//! Core business logic abstractions

pub mod asset;
pub mod cache;
pub mod config;
pub mod log;
pub mod portfolio;
pub mod projection;
pub mod quote;
pub mod risk;

// Re-export main types for cleaner imports
pub use asset::AssetClass;
pub use portfolio::{Holding, HoldingBook};
pub use projection::{GrowthPolicy, ProjectionPoint, project};
pub use quote::{Quote, QuoteProvider};
pub use risk::{RiskEstimate, RiskPolicy, estimate_risk};
