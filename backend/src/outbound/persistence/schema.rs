//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`
//! exactly; Diesel uses them for compile-time query validation and
//! type-safe SQL generation.

diesel::table! {
    /// User accounts table.
    users (id) {
        /// Primary key: UUID v4 identifier, store-assigned.
        id -> Uuid,
        /// Unique login name.
        username -> Varchar,
        /// Password hash; never leaves the process.
        password -> Varchar,
    }
}

diesel::table! {
    /// Contact form submissions table.
    contact_submissions (id) {
        /// Primary key: UUID v4 identifier, store-assigned.
        id -> Uuid,
        /// Sender name.
        name -> Varchar,
        /// Sender email address.
        email -> Varchar,
        /// Sender company; NULL when not supplied.
        company -> Nullable<Varchar>,
        /// Enquiry body.
        message -> Text,
        /// Creation timestamp, store-assigned at insert.
        created_at -> Timestamptz,
    }
}
