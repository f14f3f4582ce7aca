//! The relationship-lookup collaborator interface.
//!
//! Clergy status lives outside the engine, in a relationship store the
//! engine only reads. This module defines the read-only query contract,
//! an in-memory implementation for tests and embedded callers, and a
//! decorator that bounds each query with a deadline.

mod memory;
mod timeout;

pub use memory::InMemoryLookup;
pub use timeout::TimeoutLookup;

use crate::error::LookupError;

/// Result type for collaborator queries.
///
/// Absence of a row is `Ok(None)` and is never an error; the resolver maps
/// it to "not clergy" (or "identifier unchanged" for parent resolution).
pub type LookupResult<T> = Result<T, LookupError>;

/// Read-only queries against the relationship store.
///
/// Implementations must be idempotent and side-effect-free. Identifier
/// conventions are part of the collaborator contract: relationship
/// identifiers end in "05" and are queried directly; compensation-record
/// identifiers end in "13" and resolve through one level of indirection
/// before reaching the same clergy-indicator attribute.
pub trait RelationshipLookup {
    /// Fetches the clergy-indicator attribute for the subject of a
    /// relationship record, keyed by the relationship identifier.
    fn clergy_indicator(&self, relationship_oid: &str) -> LookupResult<Option<String>>;

    /// Fetches the clergy-indicator attribute for the subject of a
    /// compensation record, resolving the record to its related party first.
    fn clergy_indicator_for_compensation(
        &self,
        compensation_oid: &str,
    ) -> LookupResult<Option<String>>;

    /// Resolves a relationship identifier from its alternate-store
    /// identifier.
    fn relationship_id(&self, relationship_oid: &str) -> LookupResult<Option<String>>;

    /// Returns the identifier of the relationship whose type/code marks an
    /// "employee of" relationship for the given party.
    fn employer_relationship_oid(&self, relationship_id: &str) -> LookupResult<Option<String>>;
}

impl<L: RelationshipLookup + ?Sized> RelationshipLookup for &L {
    fn clergy_indicator(&self, relationship_oid: &str) -> LookupResult<Option<String>> {
        (**self).clergy_indicator(relationship_oid)
    }

    fn clergy_indicator_for_compensation(
        &self,
        compensation_oid: &str,
    ) -> LookupResult<Option<String>> {
        (**self).clergy_indicator_for_compensation(compensation_oid)
    }

    fn relationship_id(&self, relationship_oid: &str) -> LookupResult<Option<String>> {
        (**self).relationship_id(relationship_oid)
    }

    fn employer_relationship_oid(&self, relationship_id: &str) -> LookupResult<Option<String>> {
        (**self).employer_relationship_oid(relationship_id)
    }
}
