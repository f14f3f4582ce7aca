//! Scheduled taxable aggregate compensation (SCHEDULED_TAC).

use tracing::debug;

use super::{Cents, CompensationInputs};

/// Computes SCHEDULED_TAC in cents from the inputs and the already-computed
/// housing allowance.
///
/// The base is cash stipend plus utilities. For clergy, the five
/// clergy-taxable terms are added, then a housing term that depends on the
/// housing flags:
///
/// * church housing with meals: the computed housing allowance;
/// * church housing without meals: the greater of the cash housing
///   compensation received and the computed allowance;
/// * no church housing: the cash housing compensation received.
///
/// For non-clergy, only the computed housing allowance is added.
pub fn scheduled_tac(inputs: &CompensationInputs, calc_housing_amount: Cents) -> Cents {
    let mut total = inputs.cash_stipend + inputs.utilities;

    if inputs.is_clergy {
        total += inputs.ss_tax_reimbursement
            + inputs.dep_tuition_paid
            + inputs.er_paid_403b
            + inputs.housing_equity
            + inputs.other_taxable_income;

        if inputs.receives_church_housing {
            if inputs.receives_meals {
                total += calc_housing_amount;
            } else {
                total += inputs.housing_cash_comp_received.max(calc_housing_amount);
            }
        } else {
            total += inputs.housing_cash_comp_received;
        }
    } else {
        total += calc_housing_amount;
    }

    debug!(total, clergy = inputs.is_clergy, "computed scheduled TAC");
    total
}
