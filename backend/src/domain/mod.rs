//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed entities shared by the API and
//! persistence layers. Types are immutable; invariants are documented on
//! each type.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — transport-agnostic failure payload.
//! - `ContactRequest` → `NewContactSubmission` → `ContactSubmission` — the
//!   validated contact pipeline.
//! - `User` / `NewUser` / `Username` / `UserId` — user identity.
//! - `ports` — repository traits and fixture implementations.

pub mod contact;
pub mod error;
pub mod ports;
pub mod user;

pub use self::contact::{
    ContactFieldError, ContactRequest, ContactSubmission, ContactValidationError, EmailAddress,
    NewContactSubmission, SubmissionId,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::user::{NewUser, User, UserId, UserValidationError, Username};
