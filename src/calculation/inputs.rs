//! Scaled working inputs for the compensation formulas.

use crate::models::{CompensationRecord, Field};

use super::Cents;

/// The scaled monetary inputs and resolved flags one invocation computes
/// from.
///
/// Extraction applies the documented defaults: absent or malformed monetary
/// fields become 0 cents, absent flags become "N". The clergy flag is not
/// extracted here; it is resolved separately (override or lookup) and
/// supplied to [`CompensationInputs::from_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompensationInputs {
    /// CASH_STIPEND in cents.
    pub cash_stipend: Cents,
    /// UTILITIES in cents.
    pub utilities: Cents,
    /// DEP_TUITION_PAID in cents.
    pub dep_tuition_paid: Cents,
    /// SS_TAX_REIMBURSEMENT in cents.
    pub ss_tax_reimbursement: Cents,
    /// OTHER_TAXABLE_INCOME in cents.
    pub other_taxable_income: Cents,
    /// HOUSING_EQUITY in cents.
    pub housing_equity: Cents,
    /// ER_PAID_403B in cents.
    pub er_paid_403b: Cents,
    /// HOUSING_CASH_COMP_RECEIVED in cents.
    pub housing_cash_comp_received: Cents,
    /// RECEIVES_CHURCH_HOUSING == "Y".
    pub receives_church_housing: bool,
    /// RECEIVES_MEALS == "Y".
    pub receives_meals: bool,
    /// Resolved clergy status (override or lookup).
    pub is_clergy: bool,
}

impl CompensationInputs {
    /// Extracts and scales the formula inputs from a record, pairing them
    /// with an already-resolved clergy flag.
    pub fn from_record(record: &CompensationRecord, is_clergy: bool) -> Self {
        Self {
            cash_stipend: record.money(Field::CashStipend),
            utilities: record.money(Field::Utilities),
            dep_tuition_paid: record.money(Field::DepTuitionPaid),
            ss_tax_reimbursement: record.money(Field::SsTaxReimbursement),
            other_taxable_income: record.money(Field::OtherTaxableIncome),
            housing_equity: record.money(Field::HousingEquity),
            er_paid_403b: record.money(Field::ErPaid403b),
            housing_cash_comp_received: record.money(Field::HousingCashCompReceived),
            receives_church_housing: record.flag(Field::ReceivesChurchHousing) == "Y",
            receives_meals: record.flag(Field::ReceivesMeals) == "Y",
            is_clergy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_scales_monetary_fields() {
        let record = CompensationRecord::new()
            .with(Field::CashStipend, "1000.00")
            .with(Field::Utilities, "50.00")
            .with(Field::ErPaid403b, "12.345");

        let inputs = CompensationInputs::from_record(&record, false);

        assert_eq!(inputs.cash_stipend, 100_000);
        assert_eq!(inputs.utilities, 5000);
        assert_eq!(inputs.er_paid_403b, 1235);
        assert_eq!(inputs.dep_tuition_paid, 0);
    }

    #[test]
    fn test_extraction_defaults_flags_to_false() {
        let record = CompensationRecord::new();
        let inputs = CompensationInputs::from_record(&record, false);

        assert!(!inputs.receives_church_housing);
        assert!(!inputs.receives_meals);
        assert!(!inputs.is_clergy);
    }

    #[test]
    fn test_extraction_reads_flags_case_insensitively() {
        let record = CompensationRecord::new()
            .with(Field::ReceivesChurchHousing, "y")
            .with(Field::ReceivesMeals, "N");

        let inputs = CompensationInputs::from_record(&record, true);

        assert!(inputs.receives_church_housing);
        assert!(!inputs.receives_meals);
        assert!(inputs.is_clergy);
    }

    #[test]
    fn test_flag_other_than_y_reads_false() {
        let record = CompensationRecord::new().with(Field::ReceivesChurchHousing, "YES");
        let inputs = CompensationInputs::from_record(&record, false);

        // The vocabulary is single-letter; anything else is not "Y"
        assert!(!inputs.receives_church_housing);
    }
}
