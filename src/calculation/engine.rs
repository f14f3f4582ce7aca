//! The compensation calculation engine.

use tracing::debug;

use crate::lookup::RelationshipLookup;
use crate::models::{CompensationRecord, Field};

use super::{
    CompensationInputs, calc_housing_amount, cents_to_decimal, resolve_clergy, rsvp_tac,
    scheduled_tac, snapshot_prior_outputs,
};

/// One-invocation calculation engine over an injected relationship lookup.
///
/// The engine holds no per-record state and no cache: `calculate` is a pure
/// function of the record and the lookup's data, so an engine may be reused
/// across any number of independent invocations.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::CompensationEngine;
/// use compensation_engine::lookup::InMemoryLookup;
/// use compensation_engine::models::{CompensationRecord, Field};
///
/// let engine = CompensationEngine::new(InMemoryLookup::new());
/// let record = CompensationRecord::new()
///     .with(Field::CashStipend, "1000.00")
///     .with(Field::Utilities, "50.00");
///
/// let result = engine.calculate(record);
/// assert_eq!(result.get(Field::CalcHousingAmount), Some("0.00"));
/// assert_eq!(result.get(Field::ScheduledTac), Some("1050.00"));
/// assert_eq!(result.get(Field::RsvpTac), Some("1050.00"));
/// ```
#[derive(Debug, Clone)]
pub struct CompensationEngine<L> {
    lookup: L,
}

impl<L: RelationshipLookup> CompensationEngine<L> {
    /// Creates an engine over the given relationship-lookup client.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the lookup client the engine consults.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Runs one invocation: enriches the record with the three derived
    /// fields and their audit shadows.
    ///
    /// Data-quality problems never abort the invocation: malformed amounts
    /// read as zero, lookup failures resolve to non-clergy, and missing
    /// fields take their documented defaults.
    pub fn calculate(&self, mut record: CompensationRecord) -> CompensationRecord {
        debug!(fields = record.len(), "calculating compensation record");

        let is_clergy = resolve_clergy(&record, &self.lookup);
        let inputs = CompensationInputs::from_record(&record, is_clergy);

        snapshot_prior_outputs(&mut record);

        let housing = calc_housing_amount(&inputs);
        let scheduled = scheduled_tac(&inputs, housing);
        let rsvp = rsvp_tac(&inputs, scheduled);

        record.set(Field::CalcHousingAmount, cents_to_decimal(housing));
        record.set(Field::ScheduledTac, cents_to_decimal(scheduled));
        record.set(Field::RsvpTac, cents_to_decimal(rsvp));

        debug!(
            calc_housing_amount = housing,
            scheduled_tac = scheduled,
            rsvp_tac = rsvp,
            "invocation complete"
        );
        record
    }
}
