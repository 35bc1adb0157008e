pub mod history;
pub mod performance;
pub mod portfolio_model;
pub mod portfolio_service;
pub mod valuation;

#[cfg(test)]
pub(crate) mod tests;

pub use history::*;
pub use performance::*;
pub use portfolio_model::*;
pub use portfolio_service::*;
pub use valuation::*;
