//! The fragment-mass recurrence.
//!
//! Masses follow the online forgetting schedule `gamma_k = k^-ff`: each
//! newly observed fragment discounts everything seen before it by
//! `1 - gamma_k`, which is the same as growing the new fragment's own mass
//! by `1 / (1 - gamma_k)`. In linear domain
//!
//! ```text
//! m_1     = 1
//! m_{n+1} = m_n / (1 - (n+1)^-ff)
//! ```
//!
//! and in log domain, where the engine lives,
//!
//! ```text
//! next_mass(0, m, ff) = m
//! next_mass(n, m, ff) = m + ff*ln(n+1) - ln((n+1)^ff - 1)
//! ```
//!
//! At `ff = 1` this telescopes to `m_k = k`, i.e. `ln k` in log domain,
//! which the tests use as an exact anchor. There is no closed form for
//! general `ff`; recovering the mass at an arbitrary count means replaying
//! this step from a known earlier state.

/// One step of the mass recurrence: the log mass of fragment `n + 1` given
/// the log mass of fragment `n`. For `n == 0` there is no prior fragment
/// and the seed mass passes through unchanged.
///
/// Pure: reads nothing, writes nothing. Both the stateful
/// [`MassTable::advance`](crate::table::MassTable::advance) path and
/// external forward replay call this one function.
pub fn next_mass(n: u64, curr_mass: f64, ff_param: f64) -> f64 {
    if n == 0 {
        return curr_mass;
    }
    let next = (n + 1) as f64;
    curr_mass + ff_param * next.ln() - (next.powf(ff_param) - 1.0).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragmass_core::constants::{DEFAULT_FF_PARAM, MAX_FF_PARAM, MIN_FF_PARAM};
    use proptest::prelude::*;

    #[test]
    fn base_case_passes_seed_through() {
        assert_eq!(next_mass(0, 0.0, DEFAULT_FF_PARAM), 0.0);
        assert_eq!(next_mass(0, -3.25, DEFAULT_FF_PARAM), -3.25);
    }

    #[test]
    fn flat_weight_limit_is_ln_k() {
        // At ff = 1 the linear mass of fragment k is exactly k.
        let mut mass = 0.0;
        for n in 1..200u64 {
            mass = next_mass(n, mass, 1.0);
            let expected = ((n + 1) as f64).ln();
            assert!(
                (mass - expected).abs() < 1e-9,
                "fragment {}: got {mass}, expected {expected}",
                n + 1
            );
        }
    }

    #[test]
    fn second_fragment_mass() {
        // m_2 = 1 / (1 - 2^-ff), log: ff*ln2 - ln(2^ff - 1)
        let ff = DEFAULT_FF_PARAM;
        let got = next_mass(1, 0.0, ff);
        let expected = ff * 2f64.ln() - (2f64.powf(ff) - 1.0).ln();
        assert_eq!(got, expected);
    }

    #[test]
    fn strictly_increasing_in_count() {
        let ff = DEFAULT_FF_PARAM;
        let mut mass = 0.0;
        for n in 1..10_000u64 {
            let next = next_mass(n, mass, ff);
            assert!(next > mass, "mass not increasing at n = {n}");
            mass = next;
        }
    }

    #[test]
    fn purity_bit_identical() {
        let a = next_mass(123, 4.56, DEFAULT_FF_PARAM);
        let b = next_mass(123, 4.56, DEFAULT_FF_PARAM);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    proptest! {
        #[test]
        fn grows_for_any_ff_in_domain(
            n in 1u64..1_000_000,
            mass in -100f64..100.0,
            ff in MIN_FF_PARAM..=MAX_FF_PARAM,
        ) {
            // (n+1)^ff >= 2^0.5 > 1, so the subtracted log is over a value
            // smaller than the added ff*ln(n+1) term.
            let next = next_mass(n, mass, ff);
            prop_assert!(next > mass, "f({}, {}, {}) = {} did not grow", n, mass, ff, next);
        }

        #[test]
        fn step_shrinks_as_n_grows(
            n in 1u64..1_000_000,
            ff in MIN_FF_PARAM..=MAX_FF_PARAM,
        ) {
            // The per-step increment 1/(1 - (n+1)^-ff) decreases in n.
            let inc_a = next_mass(n, 0.0, ff);
            let inc_b = next_mass(n + 1, 0.0, ff);
            prop_assert!(inc_b < inc_a);
        }
    }
}
