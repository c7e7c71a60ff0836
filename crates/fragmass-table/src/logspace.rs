//! Log-domain arithmetic kernel.
//!
//! Masses live in log space for the whole engine. Addition of two
//! linear-domain quantities therefore needs the log-sum-exp trick: the
//! larger operand is factored out so the exponential never overflows.

/// Log-domain zero: `ln(0)`.
pub const LOG_0: f64 = f64::NEG_INFINITY;

/// Log-domain one: `ln(1)`.
pub const LOG_1: f64 = 0.0;

/// Log-domain addition: returns `ln(e^a + e^b)` without leaving log space.
///
/// [`LOG_0`] is the additive identity: `log_add_exp(LOG_0, x) == x`.
/// Stable for any finite operands; the exponent passed to `exp` is
/// always `<= 0`.
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a == LOG_0 {
        return b;
    }
    if b == LOG_0 {
        return a;
    }
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    hi + (lo - hi).exp().ln_1p()
}

/// Log-domain sum of a slice: `ln(sum of e^v)` folded left to right.
///
/// Returns [`LOG_0`] for an empty slice.
pub fn log_sum_exp(values: &[f64]) -> f64 {
    values.iter().fold(LOG_0, |acc, &v| log_add_exp(acc, v))
}
