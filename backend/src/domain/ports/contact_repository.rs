//! Port abstraction for contact submission persistence.
//!
//! The create operation only accepts [`NewContactSubmission`], which can
//! only be produced by validation, so adapters never receive unvalidated
//! input.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{ContactSubmission, NewContactSubmission, SubmissionId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by contact repository adapters.
    pub enum ContactPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "contact repository query failed: {message}",
    }
}

/// Storage port for contact submissions.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a validated submission, assigning its identifier and
    /// creation timestamp, and return the stored row.
    async fn create(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, ContactPersistenceError>;

    /// Return every stored submission ordered by creation time ascending.
    async fn list_all(&self) -> Result<Vec<ContactSubmission>, ContactPersistenceError>;
}

/// In-memory [`ContactRepository`] used by tests and pool-less operation.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    entries: Mutex<Vec<ContactSubmission>>,
}

impl InMemoryContactRepository {
    /// Create an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ContactSubmission>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, ContactPersistenceError> {
        let stored = ContactSubmission {
            id: SubmissionId::random(),
            name: submission.name().to_owned(),
            email: submission.email().as_ref().to_owned(),
            company: submission.company().map(str::to_owned),
            message: submission.message().to_owned(),
            created_at: Utc::now(),
        };
        self.lock().push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<ContactSubmission>, ContactPersistenceError> {
        let mut entries = self.lock().clone();
        // Stable sort preserves insertion order for identical timestamps.
        entries.sort_by_key(|entry| entry.created_at);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactRequest;

    fn submission(name: &str, message: &str) -> NewContactSubmission {
        ContactRequest {
            name: Some(name.to_owned()),
            email: Some("jane@acme.com".to_owned()),
            company: None,
            message: Some(message.to_owned()),
        }
        .validate()
        .expect("valid request")
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids_for_identical_inputs() {
        let repository = InMemoryContactRepository::new();
        let input = submission("Jane", "hi");

        let first = repository.create(&input).await.expect("first insert");
        let second = repository.create(&input).await.expect("second insert");

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn list_all_returns_ascending_creation_order() {
        let repository = InMemoryContactRepository::new();
        for name in ["first", "second", "third"] {
            repository
                .create(&submission(name, "hi"))
                .await
                .expect("insert");
        }

        let listed = repository.list_all().await.expect("list");
        let names: Vec<_> = listed.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert!(listed.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }
}
