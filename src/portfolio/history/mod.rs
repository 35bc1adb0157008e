pub(crate) mod history_calculator;
pub(crate) mod history_model;

pub use history_calculator::{reconstruct_monthly_values, reconstruct_monthly_values_as_of};
pub use history_model::MonthlyValuePoint;
