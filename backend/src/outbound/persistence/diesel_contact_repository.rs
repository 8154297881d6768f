//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! A thin adapter: translates between Diesel rows and domain types and maps
//! database failures to the port error. The database assigns both the
//! identifier and the creation timestamp via column defaults, and the
//! insert returns the stored row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ContactPersistenceError, ContactRepository};
use crate::domain::{ContactSubmission, NewContactSubmission, SubmissionId};

use super::models::{ContactSubmissionRow, NewContactSubmissionRow};
use super::pool::{DbPool, PoolError};
use super::schema::contact_submissions;

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ContactPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            ContactPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> ContactPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ContactPersistenceError::connection("database connection error")
        }
        _ => ContactPersistenceError::query("database error"),
    }
}

fn row_to_submission(row: ContactSubmissionRow) -> ContactSubmission {
    ContactSubmission {
        id: SubmissionId::from_uuid(row.id),
        name: row.name,
        email: row.email,
        company: row.company,
        message: row.message,
        created_at: row.created_at,
    }
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn create(
        &self,
        submission: &NewContactSubmission,
    ) -> Result<ContactSubmission, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewContactSubmissionRow {
            name: submission.name(),
            email: submission.email().as_ref(),
            company: submission.company(),
            message: submission.message(),
        };

        let stored: ContactSubmissionRow = diesel::insert_into(contact_submissions::table)
            .values(&row)
            .returning(ContactSubmissionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_submission(stored))
    }

    async fn list_all(&self) -> Result<Vec<ContactSubmission>, ContactPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ContactSubmissionRow> = contact_submissions::table
            .order(contact_submissions::created_at.asc())
            .select(ContactSubmissionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_submission).collect())
    }
}
