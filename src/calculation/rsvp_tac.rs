//! RSVP taxable aggregate compensation (RSVP_TAC).

use tracing::debug;

use super::{Cents, CompensationInputs};

/// Computes RSVP_TAC in cents: the scheduled TAC reduced, for clergy, by
/// the employer-paid 403(b) contributions and housing equity. Non-clergy
/// values pass through unchanged.
pub fn rsvp_tac(inputs: &CompensationInputs, scheduled_tac: Cents) -> Cents {
    let mut total = scheduled_tac;
    if inputs.is_clergy {
        total -= inputs.er_paid_403b + inputs.housing_equity;
    }

    debug!(total, clergy = inputs.is_clergy, "computed RSVP TAC");
    total
}
