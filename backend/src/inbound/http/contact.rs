//! Contact API handlers.
//!
//! ```text
//! POST /api/contact {"name":"Jane Doe","email":"jane@acme.com","message":"Need 10 units"}
//! GET /api/contact
//! ```
//!
//! Validation failures are reported at this boundary with a 400 and never
//! reach storage. Storage failures are logged server-side and collapsed to
//! the generic 500 contract.

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{ContactRequest, ContactSubmission, ContactValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Documented request shape for `POST /api/contact`.
///
/// Extraction uses [`ContactRequest`] directly; this type only feeds the
/// OpenAPI document.
#[derive(Debug, ToSchema)]
#[schema(as = ContactRequest)]
#[allow(dead_code, reason = "OpenAPI schema definition only")]
pub struct ContactRequestSchema {
    /// Sender name; required, non-empty.
    #[schema(example = "Jane Doe")]
    pub name: String,
    /// Sender email; required, valid email syntax.
    #[schema(example = "jane@acme.com")]
    pub email: String,
    /// Sender company; optional.
    #[schema(example = "Acme Robotics")]
    pub company: Option<String>,
    /// Enquiry body; required, non-empty.
    #[schema(example = "Need 10 units")]
    pub message: String,
}

/// Stored contact submission as returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionBody {
    /// Store-assigned identifier.
    pub id: Uuid,
    /// Sender name.
    pub name: String,
    /// Sender email address.
    pub email: String,
    /// Sender company; serialised as `null` when absent.
    pub company: Option<String>,
    /// Enquiry body.
    pub message: String,
    /// Store-assigned creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<ContactSubmission> for ContactSubmissionBody {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: *submission.id.as_uuid(),
            name: submission.name,
            email: submission.email,
            company: submission.company,
            message: submission.message,
            created_at: submission.created_at,
        }
    }
}

fn map_validation_error(error: &ContactValidationError) -> Error {
    let fields: Vec<_> = error
        .fields()
        .iter()
        .map(|failure| {
            json!({
                "field": failure.field(),
                "code": failure.code(),
                "message": failure.to_string(),
            })
        })
        .collect();
    Error::invalid_request(error.to_string()).with_details(json!({ "fields": fields }))
}

/// Accept a contact form submission.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequestSchema,
    responses(
        (status = 201, description = "Submission stored", body = ContactSubmissionBody),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["contact"],
    operation_id = "submitContact"
)]
#[post("/contact")]
pub async fn submit_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let submission = payload
        .into_inner()
        .validate()
        .map_err(|failure| map_validation_error(&failure))?;

    let stored = state.contacts.create(&submission).await.map_err(|failure| {
        error!(error = %failure, "contact submission insert failed");
        Error::internal("Failed to process contact submission")
    })?;

    Ok(HttpResponse::Created().json(ContactSubmissionBody::from(stored)))
}

/// List stored contact submissions in ascending creation order.
#[utoipa::path(
    get,
    path = "/api/contact",
    responses(
        (status = 200, description = "Submissions", body = [ContactSubmissionBody]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["contact"],
    operation_id = "listContactSubmissions"
)]
#[get("/contact")]
pub async fn list_contact_submissions(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<ContactSubmissionBody>>> {
    let submissions = state.contacts.list_all().await.map_err(|failure| {
        error!(error = %failure, "contact submissions fetch failed");
        Error::internal("Failed to fetch contact submissions")
    })?;

    Ok(web::Json(
        submissions.into_iter().map(Into::into).collect(),
    ))
}
