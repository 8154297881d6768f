//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{contact_submissions, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// Insertable struct for creating new user records.
///
/// `id` is assigned by the database default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Row struct for reading from the contact_submissions table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contact_submissions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactSubmissionRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new contact submissions.
///
/// `id` and `created_at` are assigned by database defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contact_submissions)]
pub(crate) struct NewContactSubmissionRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub company: Option<&'a str>,
    pub message: &'a str,
}
