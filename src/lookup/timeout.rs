//! Deadline enforcement for relationship lookups.
//!
//! A relationship-store query must never hang an invocation.
//! [`TimeoutLookup`] bounds each query: the inner query runs on a detached
//! worker thread, and a query that outlives the deadline answers
//! [`LookupError::Timeout`], which the resolver degrades to "not clergy".

use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::error::LookupError;

use super::{LookupResult, RelationshipLookup};

/// Wraps a [`RelationshipLookup`] and applies a deadline to every query.
///
/// A timed-out worker thread is abandoned, not cancelled; its late answer is
/// discarded when the channel closes. Queries stay idempotent and
/// side-effect-free, so an abandoned query has nothing to roll back.
///
/// # Example
///
/// ```
/// use compensation_engine::config::EngineConfig;
/// use compensation_engine::lookup::{InMemoryLookup, RelationshipLookup, TimeoutLookup};
///
/// let config = EngineConfig::default();
/// let lookup = TimeoutLookup::new(InMemoryLookup::new(), config.lookup_timeout());
/// assert_eq!(lookup.clergy_indicator("440005").unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct TimeoutLookup<L> {
    inner: Arc<L>,
    timeout: Duration,
}

impl<L> TimeoutLookup<L>
where
    L: RelationshipLookup + Send + Sync + 'static,
{
    /// Wraps `inner`, bounding every query by `timeout`.
    pub fn new(inner: L, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }

    fn query<T, F>(&self, run: F) -> LookupResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&L) -> LookupResult<T> + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            // The receiver may be gone if the deadline already elapsed
            let _ = sender.send(run(&inner));
        });

        match receiver.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(LookupError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(LookupError::Unavailable {
                message: "lookup worker terminated before answering".to_string(),
            }),
        }
    }
}

impl<L> RelationshipLookup for TimeoutLookup<L>
where
    L: RelationshipLookup + Send + Sync + 'static,
{
    fn clergy_indicator(&self, relationship_oid: &str) -> LookupResult<Option<String>> {
        let oid = relationship_oid.to_string();
        self.query(move |inner| inner.clergy_indicator(&oid))
    }

    fn clergy_indicator_for_compensation(
        &self,
        compensation_oid: &str,
    ) -> LookupResult<Option<String>> {
        let oid = compensation_oid.to_string();
        self.query(move |inner| inner.clergy_indicator_for_compensation(&oid))
    }

    fn relationship_id(&self, relationship_oid: &str) -> LookupResult<Option<String>> {
        let oid = relationship_oid.to_string();
        self.query(move |inner| inner.relationship_id(&oid))
    }

    fn employer_relationship_oid(&self, relationship_id: &str) -> LookupResult<Option<String>> {
        let id = relationship_id.to_string();
        self.query(move |inner| inner.employer_relationship_oid(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::InMemoryLookup;

    /// A lookup that sleeps before answering, to exercise the deadline.
    #[derive(Debug)]
    struct SlowLookup {
        delay: Duration,
    }

    impl RelationshipLookup for SlowLookup {
        fn clergy_indicator(&self, _relationship_oid: &str) -> LookupResult<Option<String>> {
            thread::sleep(self.delay);
            Ok(Some("CLERGY".to_string()))
        }

        fn clergy_indicator_for_compensation(
            &self,
            _compensation_oid: &str,
        ) -> LookupResult<Option<String>> {
            thread::sleep(self.delay);
            Ok(Some("CLERGY".to_string()))
        }

        fn relationship_id(&self, _relationship_oid: &str) -> LookupResult<Option<String>> {
            thread::sleep(self.delay);
            Ok(None)
        }

        fn employer_relationship_oid(
            &self,
            _relationship_id: &str,
        ) -> LookupResult<Option<String>> {
            thread::sleep(self.delay);
            Ok(None)
        }
    }

    #[test]
    fn test_fast_query_passes_through() {
        let inner = InMemoryLookup::new().with_clergy_indicator("440005", "CLERGY");
        let lookup = TimeoutLookup::new(inner, Duration::from_secs(5));

        assert_eq!(
            lookup.clergy_indicator("440005").unwrap().as_deref(),
            Some("CLERGY")
        );
        assert_eq!(lookup.clergy_indicator("999905").unwrap(), None);
    }

    #[test]
    fn test_slow_query_times_out() {
        let inner = SlowLookup {
            delay: Duration::from_millis(200),
        };
        let lookup = TimeoutLookup::new(inner, Duration::from_millis(10));

        match lookup.clergy_indicator("440005") {
            Err(LookupError::Timeout { timeout_ms }) => assert_eq!(timeout_ms, 10),
            other => panic!("Expected Timeout, got {:?}", other),
        }
    }

    #[test]
    fn test_inner_error_passes_through_unchanged() {
        let inner = InMemoryLookup::new().with_failure(LookupError::Unavailable {
            message: "store offline".to_string(),
        });
        let lookup = TimeoutLookup::new(inner, Duration::from_secs(5));

        match lookup.clergy_indicator("440005") {
            Err(LookupError::Unavailable { message }) => {
                assert_eq!(message, "store offline");
            }
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }
}
