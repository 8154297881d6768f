//! Builders wiring repository implementations into HTTP state.

use std::sync::Arc;

use tracing::warn;

use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{DieselContactRepository, DieselUserRepository};

use super::ServerConfig;

/// Build HTTP state from configuration: database-backed repositories when a
/// pool is available, in-memory fixtures otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => HttpState::new(
            Arc::new(DieselContactRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
        ),
        None => {
            warn!("no database pool configured; using in-memory repositories");
            HttpState::in_memory()
        }
    }
}
