pub(crate) mod valuation_calculator;
pub(crate) mod valuation_model;

pub use valuation_calculator::{compute_asset_stats, compute_asset_stats_as_of};
pub use valuation_model::AssetStats;
