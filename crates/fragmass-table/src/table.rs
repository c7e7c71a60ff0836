//! The sparse mass-snapshot table.
//!
//! A [`MassTable`] owns the live recurrence state and records it at
//! geometrically spaced counts. Because there is no closed form for the
//! mass at an arbitrary count, a caller holding only a count recovers
//! state by taking the nearest snapshot at or below it and, when exactness
//! matters, replaying [`next_mass`] forward from there. The table never
//! replays on the caller's behalf.
//!
//! Snapshot thresholds sit at `FIRST_SNAPSHOT_COUNT * SNAPSHOT_SPACING_FACTOR^k`
//! (8, 16, 32, ...), so after N advances the table holds `O(log N)` entries
//! and the floor distance for any queried count at or below the live count
//! is less than `max(stored_count, FIRST_SNAPSHOT_COUNT)`.
//!
//! Single-threaded by construction: `advance` takes `&mut self` and the
//! read paths take `&self`; a caller sharing one table across threads
//! wraps it in its own lock.

use fragmass_core::constants::{DEFAULT_FF_PARAM, FIRST_SNAPSHOT_COUNT, SNAPSHOT_SPACING_FACTOR};

use crate::logspace::{log_add_exp, LOG_0, LOG_1};
use crate::recurrence::next_mass;

/// One recorded state: the mass and cumulative mass as they existed when
/// the live count equalled `count`. Both masses are log-domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredMass {
    /// Count at which this state was recorded.
    pub count: u64,
    /// Log mass of the next fragment at that count.
    pub mass: f64,
    /// Log cumulative mass over fragments `1..=count`.
    pub cum_mass: f64,
}

/// Live recurrence state plus the sparse snapshot table.
///
/// Created once per growth process with a fixed forgetting factor. The
/// live triple `(count, mass, cum_mass)` mutates only through
/// [`advance`](Self::advance); snapshots are appended and never rewritten.
#[derive(Debug, Clone)]
pub struct MassTable {
    ff_param: f64,
    /// Number of fragments observed so far.
    count: u64,
    /// Log mass of the next fragment to be observed.
    mass: f64,
    /// Log cumulative mass over fragments `1..=count`.
    cum_mass: f64,
    /// Snapshot counts, strictly increasing, always starting at 0.
    counts: Vec<u64>,
    /// Snapshot masses, parallel to `counts`.
    masses: Vec<f64>,
    /// Snapshot cumulative masses, parallel to `counts`.
    cum_masses: Vec<f64>,
    /// Count at which the next snapshot will be recorded.
    next_snapshot_at: u64,
}

impl MassTable {
    /// Create a table with the given forgetting factor.
    ///
    /// The factor is fixed for the table's lifetime and is not range
    /// checked; the documented domain is
    /// ([`MIN_FF_PARAM`](fragmass_core::constants::MIN_FF_PARAM),
    /// [`MAX_FF_PARAM`](fragmass_core::constants::MAX_FF_PARAM)].
    ///
    /// Starts at count 0 with the first fragment's mass ([`LOG_1`]) and an
    /// empty cumulative sum ([`LOG_0`]); that state is the table's seed
    /// snapshot, so floor lookups always have an entry to land on.
    pub fn new(ff_param: f64) -> Self {
        Self {
            ff_param,
            count: 0,
            mass: LOG_1,
            cum_mass: LOG_0,
            counts: vec![0],
            masses: vec![LOG_1],
            cum_masses: vec![LOG_0],
            next_snapshot_at: FIRST_SNAPSHOT_COUNT,
        }
    }

    /// Observe one fragment: fold the next mass into the cumulative sum,
    /// bump the count, and record a snapshot when the count reaches the
    /// next threshold. Returns the updated mass. Never fails.
    ///
    /// The next mass is computed from the pre-increment count; the count
    /// is incremented last.
    pub fn advance(&mut self) -> f64 {
        let next = next_mass(self.count, self.mass, self.ff_param);
        self.cum_mass = log_add_exp(self.cum_mass, next);
        self.count += 1;
        self.mass = next;

        if self.count == self.next_snapshot_at {
            self.counts.push(self.count);
            self.masses.push(self.mass);
            self.cum_masses.push(self.cum_mass);
            self.next_snapshot_at = self.next_snapshot_at.saturating_mul(SNAPSHOT_SPACING_FACTOR);
            tracing::debug!(
                count = self.count,
                snapshots = self.counts.len(),
                next_at = self.next_snapshot_at,
                "recorded mass snapshot"
            );
        }

        self.mass
    }

    /// Stateless projection: the recurrence applied to a caller-supplied
    /// `(n, mass)` pair with this table's forgetting factor. Touches no
    /// live state and no snapshots.
    pub fn next_mass(&self, n: u64, curr_mass: f64) -> f64 {
        next_mass(n, curr_mass, self.ff_param)
    }

    /// Nearest recorded state at or below `n`, found by binary search over
    /// the snapshot counts in O(log k).
    ///
    /// The returned count never exceeds `n`. Below the first non-base
    /// snapshot this is the count-0 seed entry; beyond the last snapshot it
    /// is the last snapshot, and a caller needing the exact state at `n`
    /// replays [`next_mass`](Self::next_mass) forward from it.
    pub fn nearest_stored(&self, n: u64) -> StoredMass {
        // counts[0] == 0 <= n, so the partition point is at least 1.
        let idx = self.counts.partition_point(|&c| c <= n) - 1;
        StoredMass {
            count: self.counts[idx],
            mass: self.masses[idx],
            cum_mass: self.cum_masses[idx],
        }
    }

    /// Forgetting factor this table was created with.
    pub fn ff_param(&self) -> f64 {
        self.ff_param
    }

    /// Number of fragments observed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Log mass of the next fragment at the current count.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Log cumulative mass over all fragments observed so far.
    pub fn cum_mass(&self) -> f64 {
        self.cum_mass
    }

    /// Number of recorded snapshots, including the count-0 seed entry.
    pub fn snapshot_len(&self) -> usize {
        self.counts.len()
    }
}

impl Default for MassTable {
    fn default() -> Self {
        Self::new(DEFAULT_FF_PARAM)
    }
}
