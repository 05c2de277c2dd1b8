//! Core data models for the tax engine.
//!
//! This module contains the request inputs, per-regime results and the
//! comparison types used throughout the engine.

mod cit;
mod comparison;
mod input;
mod pit;
mod regime;

pub use cit::{CitInput, CitResult};
pub use comparison::{
    CalculationResponse, CitComparison, ComparisonResult, PitComparison, Recommendation,
    RegimeComparison,
};
pub use input::{Fields, MAX_AMOUNT, Sign, TaxInput, read_amount};
pub use pit::{PitInput, PitResult};
pub use regime::{Regime, TaxType};
