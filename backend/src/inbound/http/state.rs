//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O. Repositories are
//! constructed once at startup and injected here; there is no ambient
//! global store handle.

use std::sync::Arc;

use crate::domain::ports::{
    ContactRepository, InMemoryContactRepository, InMemoryUserRepository, UserRepository,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Contact submission storage port.
    pub contacts: Arc<dyn ContactRepository>,
    /// User storage port.
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    #[must_use]
    pub fn new(contacts: Arc<dyn ContactRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { contacts, users }
    }

    /// Construct state backed by in-memory repositories.
    ///
    /// Used by tests and when the server runs without a database pool.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            contacts: Arc::new(InMemoryContactRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }
}
