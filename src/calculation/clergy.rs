//! Clergy-status resolution.
//!
//! Whether the subject of a record is clergy decides which compensation
//! terms are taxable. An explicit IS_CLERGY flag on the record always wins;
//! otherwise status comes from the relationship-lookup collaborator, keyed
//! by whichever subject identifier the record carries. Every lookup failure
//! degrades to "not clergy" — dirty data must never abort an invocation.

use tracing::{debug, warn};

use crate::error::LookupError;
use crate::lookup::RelationshipLookup;
use crate::models::{CompensationRecord, Field};

/// Identifier suffix marking a relationship record, queried directly.
const RELATIONSHIP_SUFFIX: &str = "05";

/// Identifier suffix marking a compensation record, resolved through one
/// level of indirection.
const COMPENSATION_SUFFIX: &str = "13";

fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Logs a degraded lookup failure. Each variant is named explicitly so a
/// transport outage, an elapsed deadline, and a garbled response stay
/// distinguishable in the logs even though all three degrade the same way.
fn warn_degraded(context: &str, error: &LookupError) {
    match error {
        LookupError::Timeout { timeout_ms } => {
            warn!(context, timeout_ms, "lookup deadline elapsed; degrading");
        }
        LookupError::Unavailable { message } => {
            warn!(context, message = %message, "lookup unavailable; degrading");
        }
        LookupError::MalformedResponse { message } => {
            warn!(context, message = %message, "lookup response malformed; degrading");
        }
    }
}

/// Resolves the clergy flag for a record.
///
/// A present, non-empty IS_CLERGY value overrides any computed status: the
/// subject is clergy exactly when its first character is 'Y' or 'y', and no
/// lookup is performed. Otherwise the first present identifier (O_REL_PARTY_ID,
/// then O_COMPENSATION_ID) is resolved via [`subject_is_clergy`]. A record
/// with neither flag nor identifier resolves to `false`.
pub fn resolve_clergy<L: RelationshipLookup>(record: &CompensationRecord, lookup: &L) -> bool {
    if let Some(flag) = record.get(Field::IsClergy) {
        let flag = flag.trim();
        if !flag.is_empty() {
            let is_clergy = flag.starts_with(['Y', 'y']);
            debug!(flag, is_clergy, "clergy status taken from override flag");
            return is_clergy;
        }
    }

    for field in [Field::ORelPartyId, Field::OCompensationId] {
        if let Some(oid) = record.identifier(field) {
            return subject_is_clergy(oid, lookup);
        }
    }

    debug!("no clergy override and no identifier; defaulting to non-clergy");
    false
}

/// Determines whether the subject behind an identifier is clergy.
///
/// The trimmed identifier must be purely numeric and carry one of the two
/// sentinel suffixes: "05" routes to the direct relationship query, "13"
/// routes through the compensation-record indirection. Anything else — and
/// any lookup failure — resolves to `false`.
pub fn subject_is_clergy<L: RelationshipLookup>(oid: &str, lookup: &L) -> bool {
    let oid = oid.trim();
    if !is_numeric(oid) {
        debug!(oid, "identifier is not purely numeric; not clergy");
        return false;
    }

    let result = if oid.ends_with(RELATIONSHIP_SUFFIX) {
        lookup.clergy_indicator(oid)
    } else if oid.ends_with(COMPENSATION_SUFFIX) {
        lookup.clergy_indicator_for_compensation(oid)
    } else {
        debug!(oid, "identifier carries no recognized suffix; not clergy");
        return false;
    };

    match result {
        Ok(indicator) => {
            let is_clergy = indicator.is_some();
            debug!(oid, is_clergy, "clergy indicator lookup answered");
            is_clergy
        }
        Err(error) => {
            warn_degraded("clergy_indicator", &error);
            false
        }
    }
}

/// Resolves a relationship identifier to the one marking an "employee of"
/// relationship.
///
/// A non-numeric `relationship_id` is first recovered from
/// `relationship_oid` via the alternate-store query. Lookup failure or an
/// absent result returns `relationship_oid` unchanged — this helper fails
/// open, not stopped.
pub fn relationship_parent<L: RelationshipLookup>(
    relationship_id: &str,
    relationship_oid: &str,
    lookup: &L,
) -> String {
    let fallback = relationship_oid.to_string();

    let mut search_id = relationship_id.trim().to_string();
    if !is_numeric(&search_id) {
        match lookup.relationship_id(relationship_oid.trim()) {
            Ok(Some(id)) => search_id = id,
            Ok(None) => {
                debug!(relationship_oid, "no relationship id found; returning input unchanged");
                return fallback;
            }
            Err(error) => {
                warn_degraded("relationship_id", &error);
                return fallback;
            }
        }
    }

    match lookup.employer_relationship_oid(&search_id) {
        Ok(Some(parent_oid)) => {
            debug!(search_id = %search_id, parent_oid = %parent_oid, "resolved employee-of relationship");
            parent_oid
        }
        Ok(None) => fallback,
        Err(error) => {
            warn_degraded("employer_relationship_oid", &error);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::InMemoryLookup;

    fn clergy_lookup() -> InMemoryLookup {
        InMemoryLookup::new()
            .with_clergy_indicator("440005", "CLERGY")
            .with_compensation_party("991213", "440005")
    }

    /// CR-001: override flag wins over a lookup that would say clergy
    #[test]
    fn test_override_n_beats_clergy_lookup() {
        let record = CompensationRecord::new()
            .with(Field::IsClergy, "N")
            .with(Field::ORelPartyId, "440005");

        assert!(!resolve_clergy(&record, &clergy_lookup()));
    }

    /// CR-002: override accepts any text beginning with y
    #[test]
    fn test_override_first_character_case_insensitive() {
        for flag in ["Y", "y", "Yes", "yes"] {
            let record = CompensationRecord::new().with(Field::IsClergy, flag);
            assert!(resolve_clergy(&record, &InMemoryLookup::new()), "flag {flag}");
        }

        let record = CompensationRecord::new().with(Field::IsClergy, "No");
        assert!(!resolve_clergy(&record, &clergy_lookup()));
    }

    /// CR-003: empty override falls through to the lookup
    #[test]
    fn test_empty_override_uses_lookup() {
        let record = CompensationRecord::new()
            .with(Field::IsClergy, "")
            .with(Field::ORelPartyId, "440005");

        assert!(resolve_clergy(&record, &clergy_lookup()));
    }

    /// CR-004: compensation identifier resolves through indirection
    #[test]
    fn test_compensation_identifier_resolves_indirectly() {
        let record = CompensationRecord::new().with(Field::OCompensationId, "991213");
        assert!(resolve_clergy(&record, &clergy_lookup()));
    }

    /// CR-005: no identifiers and no flag means not clergy
    #[test]
    fn test_no_identifiers_defaults_to_non_clergy() {
        let record = CompensationRecord::new().with(Field::CashStipend, "1000.00");
        assert!(!resolve_clergy(&record, &clergy_lookup()));
    }

    /// CR-006: non-numeric identifier is rejected before any lookup
    #[test]
    fn test_non_numeric_identifier_is_not_clergy() {
        let failing = InMemoryLookup::new().with_failure(LookupError::Unavailable {
            message: "must not be queried".to_string(),
        });

        assert!(!subject_is_clergy("44-0005", &failing));
        assert!(!subject_is_clergy("", &failing));
        assert!(!subject_is_clergy("abc05", &failing));
    }

    /// CR-007: identifier without a sentinel suffix is not clergy
    #[test]
    fn test_unrecognized_suffix_is_not_clergy() {
        assert!(!subject_is_clergy("440099", &clergy_lookup()));
    }

    /// CR-008: absent indicator row means not clergy
    #[test]
    fn test_absent_indicator_is_not_clergy() {
        assert!(!subject_is_clergy("123405", &clergy_lookup()));
        assert!(!subject_is_clergy("123413", &clergy_lookup()));
    }

    /// CR-009: each lookup failure variant degrades to not clergy
    #[test]
    fn test_every_lookup_failure_degrades_to_non_clergy() {
        let failures = [
            LookupError::Timeout { timeout_ms: 10 },
            LookupError::Unavailable {
                message: "store offline".to_string(),
            },
            LookupError::MalformedResponse {
                message: "non-text attribute".to_string(),
            },
        ];

        for failure in failures {
            let lookup = InMemoryLookup::new()
                .with_clergy_indicator("440005", "CLERGY")
                .with_failure(failure.clone());
            assert!(!subject_is_clergy("440005", &lookup), "failure {failure:?}");
        }
    }

    /// CR-010: identifier whitespace is trimmed before the suffix check
    #[test]
    fn test_identifier_whitespace_is_trimmed() {
        assert!(subject_is_clergy(" 440005 ", &clergy_lookup()));
    }

    /// RP-001: numeric relationship id resolves directly
    #[test]
    fn test_relationship_parent_with_numeric_id() {
        let lookup = InMemoryLookup::new().with_employer_relationship("77", "880005");
        assert_eq!(relationship_parent("77", "660005", &lookup), "880005");
    }

    /// RP-002: non-numeric id is recovered from the alternate store first
    #[test]
    fn test_relationship_parent_recovers_id_from_oid() {
        let lookup = InMemoryLookup::new()
            .with_relationship_id("660005", "77")
            .with_employer_relationship("77", "880005");

        assert_eq!(relationship_parent("", "660005", &lookup), "880005");
    }

    /// RP-003: absence at either step returns the input unchanged
    #[test]
    fn test_relationship_parent_fails_open_on_absence() {
        let lookup = InMemoryLookup::new();
        assert_eq!(relationship_parent("77", "660005", &lookup), "660005");
        assert_eq!(relationship_parent("", "660005", &lookup), "660005");
    }

    /// RP-004: lookup failure returns the input unchanged
    #[test]
    fn test_relationship_parent_fails_open_on_error() {
        let lookup = InMemoryLookup::new()
            .with_employer_relationship("77", "880005")
            .with_failure(LookupError::Timeout { timeout_ms: 10 });

        assert_eq!(relationship_parent("77", "660005", &lookup), "660005");
    }
}
