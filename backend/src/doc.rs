//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API:
//! the contact endpoints, the health probes, and the shared error
//! envelope schema. Swagger UI serves the document in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "UAV marketing site contact API",
        description = "Contact form submission and retrieval for the marketing site."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contact::submit_contact,
        crate::inbound::http::contact::list_contact_submissions,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::inbound::http::contact::ContactRequestSchema,
        crate::inbound::http::contact::ContactSubmissionBody,
        crate::inbound::http::error::ErrorBody,
    )),
    tags(
        (name = "contact", description = "Contact form submissions"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_contact_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();
        assert!(paths.contains(&"/api/contact".to_owned()));
        assert!(paths.contains(&"/health/ready".to_owned()));
    }
}
