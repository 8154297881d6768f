//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_repository;
mod user_repository;

pub use contact_repository::{
    ContactPersistenceError, ContactRepository, InMemoryContactRepository,
};
pub use user_repository::{InMemoryUserRepository, UserPersistenceError, UserRepository};
