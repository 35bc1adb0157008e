pub(crate) mod xirr;

pub use xirr::{compute_xirr, compute_xirr_with_guess, CashFlow};
