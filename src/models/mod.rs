//! Core data models for the Compensation Calculation Engine.
//!
//! This module contains the recognized field vocabulary and the
//! compensation record the engine consumes and enriches.

mod field;
mod record;

pub use field::Field;
pub use record::{CompensationRecord, FieldValue};
