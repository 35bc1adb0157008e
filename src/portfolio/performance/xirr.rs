use chrono::{DateTime, Utc};

/// A dated cash movement: negative for invested capital, positive for
/// proceeds. The valuation engine appends a synthetic positive flow for a
/// still-open position, dated at the valuation instant.
#[derive(Debug, Clone, PartialEq)]
pub struct CashFlow {
    pub amount: f64,
    pub when: DateTime<Utc>,
}

const DEFAULT_INITIAL_GUESS: f64 = 0.1;
const MAX_NEWTON_ITERATIONS: usize = 50;
const MAX_BISECTION_ITERATIONS: usize = 100;
const MAX_BRACKET_EXPANSIONS: usize = 60;
const RATE_TOLERANCE: f64 = 1e-8;
const DERIVATIVE_FLOOR: f64 = 1e-15;
const SECONDS_PER_YEAR: f64 = 365.0 * 86_400.0;

/// Minimum year fraction between the origin flow and any later flow, so a
/// same-day series cannot flatten the NPV derivative to zero.
const MIN_YEARS: f64 = 0.0001;

/// Annualized money-weighted return of a dated cash-flow series, as a
/// fraction (0.1 = 10%/yr).
///
/// Finds the rate `r` with `Σ amount / (1+r)^years = 0`, where `years` is
/// measured from the earliest flow in 365-day years. Returns 0.0 whenever no
/// rate is computable: fewer than two flows, all flows of one sign, or no
/// root in the searched range. Callers cannot distinguish that 0.0 from a
/// genuine 0%/yr; presenting the ambiguity is their concern.
pub fn compute_xirr(cashflows: &[CashFlow]) -> f64 {
    compute_xirr_with_guess(cashflows, DEFAULT_INITIAL_GUESS)
}

pub fn compute_xirr_with_guess(cashflows: &[CashFlow], initial_guess: f64) -> f64 {
    if cashflows.len() < 2 {
        return 0.0;
    }
    let has_outflow = cashflows.iter().any(|flow| flow.amount < 0.0);
    let has_inflow = cashflows.iter().any(|flow| flow.amount > 0.0);
    if !has_outflow || !has_inflow {
        return 0.0;
    }

    let mut ordered: Vec<&CashFlow> = cashflows.iter().collect();
    ordered.sort_by_key(|flow| flow.when);
    let origin = ordered[0].when;

    let dated: Vec<(f64, f64)> = ordered
        .iter()
        .enumerate()
        .map(|(index, flow)| {
            let years = (flow.when - origin).num_seconds() as f64 / SECONDS_PER_YEAR;
            // The origin flow discounts at exponent zero; every later flow
            // stays at least MIN_YEARS away from it.
            let years = if index == 0 { years } else { years.max(MIN_YEARS) };
            (years, flow.amount)
        })
        .collect();

    if let Some(rate) = newton_raphson(&dated, initial_guess) {
        return rate;
    }
    bisection(&dated).unwrap_or(0.0)
}

/// Net present value of the flows at the given annual rate. A rate at or
/// below -100% has no defined discount power; a large sentinel stands in.
fn npv(dated: &[(f64, f64)], rate: f64) -> f64 {
    let base = 1.0 + rate;
    if base <= 0.0 {
        return 1e100;
    }
    dated
        .iter()
        .map(|&(years, amount)| amount / base.powf(years))
        .sum()
}

fn npv_derivative(dated: &[(f64, f64)], rate: f64) -> f64 {
    let base = 1.0 + rate;
    if base <= 0.0 {
        return -1e100;
    }
    dated
        .iter()
        .map(|&(years, amount)| -years * amount / base.powf(years + 1.0))
        .sum()
}

fn newton_raphson(dated: &[(f64, f64)], initial_guess: f64) -> Option<f64> {
    let mut rate = initial_guess;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let value = npv(dated, rate);
        let derivative = npv_derivative(dated, rate);
        if derivative.abs() < DERIVATIVE_FLOOR {
            // Flat spot; Newton cannot improve from here.
            return None;
        }
        let next = rate - value / derivative;
        if !next.is_finite() {
            return None;
        }
        if (next - rate).abs() < RATE_TOLERANCE {
            return Some(next);
        }
        rate = next;
    }
    None
}

/// Bracketed bisection fallback for flows Newton-Raphson cannot handle.
fn bisection(dated: &[(f64, f64)]) -> Option<f64> {
    let mut low = -0.999999;
    let mut high = 1.0;
    let mut f_low = npv(dated, low);
    let mut f_high = npv(dated, high);

    // Expand the bracket upward until a sign change is captured; very high
    // short-term returns can sit far beyond 100%/yr.
    let mut expansions = 0;
    while f_low * f_high > 0.0 {
        if expansions >= MAX_BRACKET_EXPANSIONS {
            // No real root in range.
            return None;
        }
        high *= 3.0;
        f_high = npv(dated, high);
        expansions += 1;
    }

    for _ in 0..MAX_BISECTION_ITERATIONS {
        if (high - low).abs() < RATE_TOLERANCE {
            break;
        }
        let mid = (low + high) / 2.0;
        let f_mid = npv(dated, mid);
        if f_mid == 0.0 {
            return Some(mid);
        }
        if f_low * f_mid < 0.0 {
            high = mid;
        } else {
            low = mid;
            f_low = f_mid;
        }
    }
    Some((low + high) / 2.0)
}
