//! Error types for the Compensation Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Data-quality problems (malformed amounts, missing identifiers, failed
//! lookups) never surface as errors from the engine; they degrade to the
//! documented defaults. The types here cover the two places genuine errors
//! exist: configuration loading and the relationship-lookup collaborator.

use thiserror::Error;

/// The main error type for engine configuration and setup.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// Failures of the external relationship-lookup collaborator.
///
/// Each variant is handled explicitly at its call site in the clergy
/// resolver, where every one degrades to "not clergy" (or "identifier
/// unchanged" for parent resolution). Absence of a result is not a failure
/// and is modeled as `Ok(None)` by [`crate::lookup::RelationshipLookup`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The lookup did not complete within the configured deadline.
    #[error("Relationship lookup timed out after {timeout_ms}ms")]
    Timeout {
        /// The deadline that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// The backing store could not be reached or refused the query.
    #[error("Relationship lookup unavailable: {message}")]
    Unavailable {
        /// A description of the transport or store failure.
        message: String,
    },

    /// The store answered with something the client could not interpret.
    #[error("Malformed lookup response: {message}")]
    MalformedResponse {
        /// A description of what was wrong with the response.
        message: String,
    },
}
