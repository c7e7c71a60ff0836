//! # fragmass-table — fragment-mass recurrence engine.
//!
//! All masses are log-domain `f64`; the linear value is never materialized,
//! so arbitrarily large observation counts cannot overflow.
//!
//! This crate implements the forgetting-mass growth model:
//! - **Recurrence step**: the mass of fragment `n+1` follows from the mass
//!   of fragment `n` and the forgetting factor; there is no closed form
//!   from an unknown earlier state.
//! - **Snapshot table**: state is recorded at geometrically spaced counts,
//!   keeping the table at `O(log count)` entries.
//! - **Floor lookup**: any count resolves by binary search to the nearest
//!   recorded state at or below it; callers needing exactness replay the
//!   recurrence forward from there.

pub mod logspace;
pub mod recurrence;
pub mod table;

pub use logspace::{log_add_exp, log_sum_exp, LOG_0, LOG_1};
pub use recurrence::next_mass;
pub use table::{MassTable, StoredMass};
