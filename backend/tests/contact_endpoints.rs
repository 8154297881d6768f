//! End-to-end tests for the contact endpoints through the full middleware
//! stack, using in-memory repositories.

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use backend::Trace;
use backend::inbound::http::contact::{list_contact_submissions, submit_contact};
use backend::inbound::http::error::json_error_handler;
use backend::inbound::http::state::HttpState;
use backend::middleware::trace::TRACE_ID_HEADER;

async fn spawn_app() -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    let state = web::Data::new(HttpState::in_memory());
    actix_test::init_service(
        App::new().wrap(Trace).service(
            web::scope("/api")
                .app_data(state)
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .service(submit_contact)
                .service(list_contact_submissions),
        ),
    )
    .await
}

fn post_json(body: &Value) -> actix_http::Request {
    actix_test::TestRequest::post()
        .uri("/api/contact")
        .set_json(body)
        .to_request()
}

#[actix_web::test]
async fn submitted_enquiries_are_listed_in_order() {
    let app = spawn_app().await;

    let first = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "company": "Analytical Engines Ltd",
        "message": "Interested in the survey drone range."
    });
    let second = json!({
        "name": "Grace Hopper",
        "email": "grace@example.com",
        "message": "Requesting a fleet quote."
    });

    let response = actix_test::call_service(&app, post_json(&first)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let first_stored: Value = actix_test::read_body_json(response).await;
    assert_eq!(first_stored["name"], "Ada Lovelace");
    assert_eq!(first_stored["company"], "Analytical Engines Ltd");
    assert!(Uuid::parse_str(first_stored["id"].as_str().expect("id")).is_ok());
    assert!(first_stored["createdAt"].is_string());

    let response = actix_test::call_service(&app, post_json(&second)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let second_stored: Value = actix_test::read_body_json(response).await;
    assert_eq!(second_stored["company"], Value::Null);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/contact")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let listed: Vec<Value> = actix_test::read_body_json(response).await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], first_stored["id"]);
    assert_eq!(listed[1]["id"], second_stored["id"]);
}

#[actix_web::test]
async fn invalid_submission_is_rejected_with_validation_envelope() {
    let app = spawn_app().await;

    let body = json!({
        "name": "Ada Lovelace",
        "email": "not-an-email",
        "message": "Hello"
    });
    let response = actix_test::call_service(&app, post_json(&body)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = actix_test::read_body_json(response).await;
    assert_eq!(error["error"], "Validation failed");
    let message = error["message"].as_str().expect("message");
    assert!(message.contains("email"), "message was: {message}");

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/contact")
            .to_request(),
    )
    .await;
    let listed: Vec<Value> = actix_test::read_body_json(response).await;
    assert!(listed.is_empty(), "rejected submission must not be stored");
}

#[actix_web::test]
async fn malformed_json_body_gets_the_error_envelope() {
    let app = spawn_app().await;

    let request = actix_test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = actix_test::read_body_json(response).await;
    assert_eq!(error["error"], "Validation failed");
}

#[actix_web::test]
async fn every_response_carries_a_trace_id() {
    let app = spawn_app().await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/contact")
            .to_request(),
    )
    .await;

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("trace id header");
    assert!(Uuid::parse_str(header).is_ok());
}
