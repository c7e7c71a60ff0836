//! Engine constants. Masses are log-domain `f64` throughout.

/// Default forgetting factor when the caller does not supply one.
///
/// Controls how fast per-fragment masses grow with the observed count:
/// values near [`MIN_FF_PARAM`] weight all observations almost equally,
/// values near [`MAX_FF_PARAM`] forget early observations fastest.
pub const DEFAULT_FF_PARAM: f64 = 0.85;

/// Lower edge of the forgetting-factor domain (exclusive).
///
/// Below 0.5 the forgetting schedule `gamma_k = k^-ff` no longer
/// converges. Not runtime-enforced; passing a value outside
/// `(MIN_FF_PARAM, MAX_FF_PARAM]` is a caller contract violation.
pub const MIN_FF_PARAM: f64 = 0.5;

/// Upper edge of the forgetting-factor domain (inclusive).
///
/// At exactly 1.0 the mass of fragment `k` is `k` in linear domain,
/// which is the no-forgetting (flat-weight) limit.
pub const MAX_FF_PARAM: f64 = 1.0;

/// Count at which the first non-base snapshot is recorded.
///
/// Counts below this are served by the count-0 base entry, so the worst
/// floor distance before the first snapshot is `FIRST_SNAPSHOT_COUNT - 1`.
pub const FIRST_SNAPSHOT_COUNT: u64 = 8;

/// Multiplier applied to the snapshot threshold after each snapshot.
///
/// Geometric spacing keeps the table at `O(log count)` entries and bounds
/// the floor distance for any count `n` at or below the live count by
/// `max(stored_count, FIRST_SNAPSHOT_COUNT)`.
pub const SNAPSHOT_SPACING_FACTOR: u64 = 2;

/// Maximum encoded size of a single [`Target`](crate::target::Target)
/// record payload, excluding the length prefix.
pub const MAX_TARGET_RECORD_SIZE: usize = 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ff_inside_domain() {
        assert!(DEFAULT_FF_PARAM > MIN_FF_PARAM);
        assert!(DEFAULT_FF_PARAM <= MAX_FF_PARAM);
    }

    #[test]
    fn snapshot_policy_sane() {
        assert!(FIRST_SNAPSHOT_COUNT >= 2);
        assert!(SNAPSHOT_SPACING_FACTOR >= 2, "spacing must grow the gap");
    }
}
