//! Compensation Calculation Engine
//!
//! This crate computes derived compensation figures (housing allowance,
//! scheduled taxable compensation, and its reduced RSVP variant) from a
//! sparse compensation record of pay components. All formula arithmetic is
//! performed in scaled-integer cents to eliminate floating-point drift;
//! clergy status is resolved through an injected relationship-lookup
//! collaborator with an explicit override flag taking precedence.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
