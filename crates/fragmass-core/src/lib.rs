//! # fragmass-core
//! Foundation types for the fragmass engine.

pub mod constants;
pub mod error;
pub mod target;
