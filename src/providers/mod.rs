pub mod util;
pub mod yahoo;

// Re-export traits for providers to easily use cache
pub use crate::core::cache::Cache;
