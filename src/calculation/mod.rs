//! Calculation logic for the tax engine.
//!
//! This module contains the progressive bracket integrator, the PIT and CIT
//! calculators (each parameterized over one regime's rules) and the
//! comparator that runs them under both regimes.

mod cit;
mod comparison;
mod pit;
mod progressive;

pub use cit::calculate_cit;
pub use comparison::{compare_cit, compare_pit, compare_regimes};
pub use pit::calculate_pit;
pub use progressive::compute_progressive_tax;

/// Divisor turning annual figures into monthly ones.
pub const MONTHS_PER_YEAR: u32 = 12;
