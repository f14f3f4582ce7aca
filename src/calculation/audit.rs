//! Audit snapshot of prior computed values.
//!
//! Before an invocation overwrites the derived fields, whatever occupied
//! them is preserved under INPUT_* shadow keys so a caller can compare
//! before and after. The shadow is write-once per lineage: once an INPUT_*
//! field exists (even as the explicit absent marker) it is never replaced,
//! so chained invocations keep the true original, not an intermediate
//! result.

use tracing::debug;

use crate::models::{CompensationRecord, Field, FieldValue};

/// The derived/shadow field pairs the snapshot maintains.
const SNAPSHOT_PAIRS: [(Field, Field); 3] = [
    (Field::CalcHousingAmount, Field::InputCalcHousingAmount),
    (Field::ScheduledTac, Field::InputScheduledTac),
    (Field::RsvpTac, Field::InputRsvpTac),
];

/// Captures any existing derived values into their INPUT_* shadow fields.
///
/// For each pair: an already-present shadow is left untouched; otherwise the
/// derived field's current value is copied in; if neither exists the shadow
/// is set to the explicit absent marker.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::snapshot_prior_outputs;
/// use compensation_engine::models::{CompensationRecord, Field};
///
/// let mut record = CompensationRecord::new().with(Field::ScheduledTac, "900.00");
/// snapshot_prior_outputs(&mut record);
///
/// assert_eq!(record.get(Field::InputScheduledTac), Some("900.00"));
/// // No prior housing figure existed, so its shadow is the absent marker
/// assert!(record.contains(Field::InputCalcHousingAmount));
/// assert_eq!(record.get(Field::InputCalcHousingAmount), None);
/// ```
pub fn snapshot_prior_outputs(record: &mut CompensationRecord) {
    for (derived, shadow) in SNAPSHOT_PAIRS {
        if record.contains(shadow) {
            // First snapshot wins
            continue;
        }

        match record.value(derived).cloned() {
            Some(FieldValue::Text(prior)) => {
                debug!(field = derived.name(), prior = %prior, "snapshotting prior value");
                record.set(shadow, prior);
            }
            Some(FieldValue::Missing) | None => record.set_missing(shadow),
        }
    }
}
