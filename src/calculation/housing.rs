//! Housing allowance calculation.

use tracing::debug;

use super::{Cents, CompensationInputs};

/// Computes CALC_HOUSING_AMOUNT in cents.
///
/// The housing base is cash stipend plus utilities; for clergy it also
/// includes dependent tuition and the Social Security tax reimbursement.
/// When church housing is received the allowance is 40% of the base with
/// meals, 30% without; with no church housing it is zero.
///
/// The percentage is applied as `base * 4 / 10` (or `* 3 / 10`) on the cents
/// value, and the integer division truncates toward zero. Sub-cent
/// remainders are discarded, not carried forward; downstream consumers
/// depend on reproducing this rounding rule exactly.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::{CompensationInputs, calc_housing_amount};
/// use compensation_engine::models::{CompensationRecord, Field};
///
/// let record = CompensationRecord::new()
///     .with(Field::CashStipend, "1000.00")
///     .with(Field::Utilities, "200.00")
///     .with(Field::ReceivesChurchHousing, "Y");
///
/// let inputs = CompensationInputs::from_record(&record, false);
/// assert_eq!(calc_housing_amount(&inputs), 36_000); // 30% of 1200.00
/// ```
pub fn calc_housing_amount(inputs: &CompensationInputs) -> Cents {
    if !inputs.receives_church_housing {
        return 0;
    }

    let mut base = inputs.cash_stipend + inputs.utilities;
    if inputs.is_clergy {
        base += inputs.dep_tuition_paid + inputs.ss_tax_reimbursement;
    }

    let amount = if inputs.receives_meals {
        base * 4 / 10
    } else {
        base * 3 / 10
    };

    debug!(base, amount, meals = inputs.receives_meals, "computed housing allowance");
    amount
}
