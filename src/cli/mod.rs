pub mod portfolio;
pub mod project;
pub mod risk;
pub mod setup;
pub mod ui;
