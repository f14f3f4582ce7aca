//! Calculation logic for the Compensation Calculation Engine.
//!
//! This module contains the fixed-point boundary conversions, clergy-status
//! resolution, the three interdependent compensation formulas (housing
//! allowance, scheduled TAC, RSVP TAC), the audit snapshot of prior
//! computed values, and the engine that orchestrates one invocation.

mod audit;
mod clergy;
mod engine;
mod fixed_point;
mod housing;
mod inputs;
mod rsvp_tac;
mod scheduled_tac;

pub use audit::snapshot_prior_outputs;
pub use clergy::{relationship_parent, resolve_clergy, subject_is_clergy};
pub use engine::CompensationEngine;
pub use fixed_point::{Cents, cents_to_decimal, decimal_to_cents};
pub use housing::calc_housing_amount;
pub use inputs::CompensationInputs;
pub use rsvp_tac::rsvp_tac;
pub use scheduled_tac::scheduled_tac;
