//! Nigerian tax regime comparison engine
//!
//! This crate calculates Personal Income Tax (PIT) and Company Income Tax (CIT)
//! under the pre-2026 Nigerian tax laws and the 2026 Nigeria Tax Act, and
//! reports which regime leaves the taxpayer better off.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
