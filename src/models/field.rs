//! The recognized field vocabulary of a compensation record.
//!
//! Field names arrive on the wire as upper-case strings. Rather than
//! dispatching dynamically on arbitrary keys, the engine recognizes a closed
//! set of names; anything else is ignored at ingestion.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A recognized compensation-record field.
///
/// Variant order determines the serialization order of an enriched record:
/// monetary inputs first, then flags, identifiers, derived outputs, and
/// audit shadows.
///
/// # Example
///
/// ```
/// use compensation_engine::models::Field;
///
/// assert_eq!(Field::parse("cash_stipend"), Some(Field::CashStipend));
/// assert_eq!(Field::CashStipend.name(), "CASH_STIPEND");
/// assert_eq!(Field::parse("NOT_A_FIELD"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Annual cash stipend.
    CashStipend,
    /// Utilities paid on the employee's behalf.
    Utilities,
    /// Dependent tuition paid (clergy-taxable term).
    DepTuitionPaid,
    /// Social Security tax reimbursement (clergy-taxable term).
    SsTaxReimbursement,
    /// Other taxable income (clergy-taxable term).
    OtherTaxableIncome,
    /// Housing equity allowance (clergy-taxable term).
    HousingEquity,
    /// Employer-paid 403(b) contributions (clergy-taxable term).
    ErPaid403b,
    /// Cash housing compensation actually received.
    HousingCashCompReceived,
    /// "Y"/"N": does the employee receive church-provided housing?
    ReceivesChurchHousing,
    /// "Y"/"N": does the employee receive meals with housing?
    ReceivesMeals,
    /// "Y"/"N" clergy override; empty or absent means "resolve via lookup".
    IsClergy,
    /// Identifier of the employment relationship record.
    ORelPartyId,
    /// Identifier of the compensation record itself.
    OCompensationId,
    /// Derived: computed housing allowance.
    CalcHousingAmount,
    /// Derived: scheduled taxable aggregate compensation.
    ScheduledTac,
    /// Derived: TAC reduced by employer-paid retirement/equity terms.
    RsvpTac,
    /// Audit shadow of CALC_HOUSING_AMOUNT from the prior invocation.
    InputCalcHousingAmount,
    /// Audit shadow of SCHEDULED_TAC from the prior invocation.
    InputScheduledTac,
    /// Audit shadow of RSVP_TAC from the prior invocation.
    InputRsvpTac,
}

impl Field {
    /// All recognized fields, in serialization order.
    pub const ALL: [Field; 19] = [
        Field::CashStipend,
        Field::Utilities,
        Field::DepTuitionPaid,
        Field::SsTaxReimbursement,
        Field::OtherTaxableIncome,
        Field::HousingEquity,
        Field::ErPaid403b,
        Field::HousingCashCompReceived,
        Field::ReceivesChurchHousing,
        Field::ReceivesMeals,
        Field::IsClergy,
        Field::ORelPartyId,
        Field::OCompensationId,
        Field::CalcHousingAmount,
        Field::ScheduledTac,
        Field::RsvpTac,
        Field::InputCalcHousingAmount,
        Field::InputScheduledTac,
        Field::InputRsvpTac,
    ];

    /// The eight monetary input fields, in formula order.
    pub const MONETARY: [Field; 8] = [
        Field::CashStipend,
        Field::Utilities,
        Field::DepTuitionPaid,
        Field::SsTaxReimbursement,
        Field::OtherTaxableIncome,
        Field::HousingEquity,
        Field::ErPaid403b,
        Field::HousingCashCompReceived,
    ];

    /// Returns the upper-case wire name of this field.
    pub fn name(self) -> &'static str {
        match self {
            Field::CashStipend => "CASH_STIPEND",
            Field::Utilities => "UTILITIES",
            Field::DepTuitionPaid => "DEP_TUITION_PAID",
            Field::SsTaxReimbursement => "SS_TAX_REIMBURSEMENT",
            Field::OtherTaxableIncome => "OTHER_TAXABLE_INCOME",
            Field::HousingEquity => "HOUSING_EQUITY",
            Field::ErPaid403b => "ER_PAID_403B",
            Field::HousingCashCompReceived => "HOUSING_CASH_COMP_RECEIVED",
            Field::ReceivesChurchHousing => "RECEIVES_CHURCH_HOUSING",
            Field::ReceivesMeals => "RECEIVES_MEALS",
            Field::IsClergy => "IS_CLERGY",
            Field::ORelPartyId => "O_REL_PARTY_ID",
            Field::OCompensationId => "O_COMPENSATION_ID",
            Field::CalcHousingAmount => "CALC_HOUSING_AMOUNT",
            Field::ScheduledTac => "SCHEDULED_TAC",
            Field::RsvpTac => "RSVP_TAC",
            Field::InputCalcHousingAmount => "INPUT_CALC_HOUSING_AMOUNT",
            Field::InputScheduledTac => "INPUT_SCHEDULED_TAC",
            Field::InputRsvpTac => "INPUT_RSVP_TAC",
        }
    }

    /// Parses a wire name, case-insensitively.
    ///
    /// Unknown names return `None`; callers ignore such keys rather than
    /// erroring on them.
    pub fn parse(name: &str) -> Option<Field> {
        let upper = name.trim().to_ascii_uppercase();
        Field::ALL.into_iter().find(|f| f.name() == upper)
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Field::parse(&name)
            .ok_or_else(|| de::Error::custom(format!("unrecognized field name: {name}")))
    }
}
