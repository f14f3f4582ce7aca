//! Map-backed relationship lookup.
//!
//! Serves tests, benches, and embedding callers that already hold the
//! relationship data. Failures can be injected to exercise the resolver's
//! degradation paths.

use std::collections::HashMap;

use crate::error::LookupError;

use super::{LookupResult, RelationshipLookup};

/// An in-memory [`RelationshipLookup`] backed by hash maps.
///
/// # Example
///
/// ```
/// use compensation_engine::lookup::{InMemoryLookup, RelationshipLookup};
///
/// let lookup = InMemoryLookup::new()
///     .with_clergy_indicator("440005", "CLERGY")
///     .with_compensation_party("991213", "440005");
///
/// assert_eq!(
///     lookup.clergy_indicator("440005").unwrap().as_deref(),
///     Some("CLERGY")
/// );
/// assert_eq!(
///     lookup.clergy_indicator_for_compensation("991213").unwrap().as_deref(),
///     Some("CLERGY")
/// );
/// assert_eq!(lookup.clergy_indicator("123405").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLookup {
    clergy_indicators: HashMap<String, String>,
    compensation_parties: HashMap<String, String>,
    relationship_ids: HashMap<String, String>,
    employer_relationships: HashMap<String, String>,
    fail_with: Option<LookupError>,
}

impl InMemoryLookup {
    /// Creates an empty lookup in which every query answers `Ok(None)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a clergy-indicator attribute for a relationship identifier.
    pub fn with_clergy_indicator(
        mut self,
        relationship_oid: impl Into<String>,
        indicator: impl Into<String>,
    ) -> Self {
        self.clergy_indicators
            .insert(relationship_oid.into(), indicator.into());
        self
    }

    /// Maps a compensation-record identifier to its related party's
    /// relationship identifier.
    pub fn with_compensation_party(
        mut self,
        compensation_oid: impl Into<String>,
        relationship_oid: impl Into<String>,
    ) -> Self {
        self.compensation_parties
            .insert(compensation_oid.into(), relationship_oid.into());
        self
    }

    /// Maps an alternate-store relationship identifier to the primary one.
    pub fn with_relationship_id(
        mut self,
        relationship_oid: impl Into<String>,
        relationship_id: impl Into<String>,
    ) -> Self {
        self.relationship_ids
            .insert(relationship_oid.into(), relationship_id.into());
        self
    }

    /// Registers the "employee of" relationship for a party.
    pub fn with_employer_relationship(
        mut self,
        relationship_id: impl Into<String>,
        employer_relationship_oid: impl Into<String>,
    ) -> Self {
        self.employer_relationships
            .insert(relationship_id.into(), employer_relationship_oid.into());
        self
    }

    /// Makes every subsequent query fail with the given error.
    pub fn with_failure(mut self, error: LookupError) -> Self {
        self.fail_with = Some(error);
        self
    }

    fn check_failure(&self) -> LookupResult<()> {
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl RelationshipLookup for InMemoryLookup {
    fn clergy_indicator(&self, relationship_oid: &str) -> LookupResult<Option<String>> {
        self.check_failure()?;
        Ok(self.clergy_indicators.get(relationship_oid).cloned())
    }

    fn clergy_indicator_for_compensation(
        &self,
        compensation_oid: &str,
    ) -> LookupResult<Option<String>> {
        self.check_failure()?;
        let Some(relationship_oid) = self.compensation_parties.get(compensation_oid) else {
            return Ok(None);
        };
        Ok(self.clergy_indicators.get(relationship_oid).cloned())
    }

    fn relationship_id(&self, relationship_oid: &str) -> LookupResult<Option<String>> {
        self.check_failure()?;
        Ok(self.relationship_ids.get(relationship_oid).cloned())
    }

    fn employer_relationship_oid(&self, relationship_id: &str) -> LookupResult<Option<String>> {
        self.check_failure()?;
        Ok(self.employer_relationships.get(relationship_id).cloned())
    }
}
