//! Contact submission backend for the UAV products marketing site.
//!
//! The single-page site posts contact enquiries to `POST /api/contact` and
//! internal tooling reads them back via `GET /api/contact`. Everything else
//! here is the supporting hexagonal structure: domain types and ports,
//! inbound HTTP adapters, and Diesel-backed persistence.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;
