//! Integration tests for the SupabaseClient using mockito for HTTP mocking.

use contact_form_mcp_server::client::{AsyncSupabaseClient, AsyncSupabaseClientImpl};
use contact_form_mcp_server::domain::FormField;
use contact_form_mcp_server::repositories::SupabaseSubmissionRepository;
use contact_form_mcp_server::{
    ContactSubmissionRecord, FormController, SubmissionError, SubmissionStatus, SupabaseApiError,
    SupabaseClient,
};
use mockito::{Matcher, Server};
use std::sync::Arc;

const STORED_ROW: &str = r#"[{
    "id": 42,
    "created_at": "2026-10-17T09:00:00.123456+00:00",
    "name": "Jane Doe",
    "email": "jane@x.com",
    "phone": null,
    "company": null,
    "message": "Hello"
}]"#;

fn jane() -> ContactSubmissionRecord {
    ContactSubmissionRecord {
        name: "Jane Doe".to_string(),
        email: "jane@x.com".to_string(),
        phone: None,
        company: None,
        message: "Hello".to_string(),
    }
}

#[test]
fn test_insert_submission() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
        .match_header("apikey", "test-anon-key")
        .match_header("authorization", "Bearer test-anon-key")
        .match_header("prefer", "return=representation")
        .match_header("content-type", Matcher::Regex("application/json".into()))
        .match_body(Matcher::Json(serde_json::json!([{
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": null,
            "company": null,
            "message": "Hello"
        }])))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(STORED_ROW)
        .create();

    let client = SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string());
    let rows = client
        .insert_submissions("contact_submissions", &[jane()])
        .unwrap();

    mock.assert();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id.as_deref(), Some("42"));
    assert_eq!(rows[0].record, jane());
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().submissions_inserted_total(), 1);
}

#[test]
fn test_insert_sends_optional_fields_when_present() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(serde_json::json!([{
            "phone": "+91 8803880397",
            "company": "Acme Pvt Ltd"
        }])))
        .with_status(201)
        .with_body("[]")
        .create();

    let record = ContactSubmissionRecord {
        phone: Some("+91 8803880397".to_string()),
        company: Some("Acme Pvt Ltd".to_string()),
        ..jane()
    };
    let client = SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string());
    let rows = client
        .insert_submissions("contact_submissions", &[record])
        .unwrap();

    mock.assert();
    assert!(rows.is_empty());
}

#[test]
fn test_insert_empty_response_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(201)
        .create();

    let client = SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string());
    let rows = client
        .insert_submissions("contact_submissions", &[jane()])
        .unwrap();

    mock.assert();
    assert!(rows.is_empty());
    assert_eq!(client.metrics().submissions_inserted_total(), 0);
}

#[test]
fn test_insert_rejected_by_postgrest() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"code":"42501","details":null,"hint":null,"message":"new row violates row-level security policy for table \"contact_submissions\""}"#,
        )
        .create();

    let client = SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string());
    let result = client.insert_submissions("contact_submissions", &[jane()]);

    mock.assert();
    match result {
        Err(SupabaseApiError::ApiError { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(
                message,
                "new row violates row-level security policy for table \"contact_submissions\" (42501)"
            );
        }
        other => panic!("Expected ApiError, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_insert_unauthorized() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message":"Invalid API key"}"#)
        .create();

    let client = SupabaseClient::with_base_url(server.url(), "wrong-key".to_string());
    let result = client.insert_submissions("contact_submissions", &[jane()]);

    mock.assert();
    assert!(matches!(result, Err(SupabaseApiError::Unauthorized(401))));
}

#[test]
fn test_insert_forbidden_reports_403() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"code":"42501","message":"permission denied for table contact_submissions"}"#)
        .create();

    let client = SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string());
    let result = client.insert_submissions("contact_submissions", &[jane()]);

    mock.assert();
    let err = SubmissionError::from(result.unwrap_err());
    assert!(matches!(
        err,
        SubmissionError::Rejected {
            status: Some(403),
            ..
        }
    ));
}

#[test]
fn test_insert_conflict() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(409)
        .with_body(r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#)
        .create();

    let client = SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string());
    let result = client.insert_submissions("contact_submissions", &[jane()]);

    mock.assert();
    match result {
        Err(SupabaseApiError::Conflict(message)) => {
            assert!(message.contains("23505"));
        }
        other => panic!("Expected Conflict, got: {:?}", other),
    }
}

#[test]
fn test_insert_rate_limited() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(429)
        .create();

    let client = SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string());
    let result = client.insert_submissions("contact_submissions", &[jane()]);

    assert!(matches!(result, Err(SupabaseApiError::RateLimitExceeded)));
}

#[test]
fn test_insert_malformed_response() {
    let mut server = Server::new();

    let _mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body("<html>gateway</html>")
        .create();

    let client = SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string());
    let result = client.insert_submissions("contact_submissions", &[jane()]);

    assert!(matches!(result, Err(SupabaseApiError::JsonError(_))));
}

#[test]
fn test_insert_connection_refused() {
    let client =
        SupabaseClient::with_base_url("http://127.0.0.1:9".to_string(), "test-anon-key".to_string());
    let result = client.insert_submissions("contact_submissions", &[jane()]);

    assert!(matches!(result, Err(SupabaseApiError::HttpError(_))));
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[tokio::test]
async fn test_async_client_insert() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(201)
        .with_body(STORED_ROW)
        .create_async()
        .await;

    let client = AsyncSupabaseClientImpl::new(SupabaseClient::with_base_url(
        server.url(),
        "test-anon-key".to_string(),
    ));
    let rows = client
        .insert_submissions("contact_submissions", &[jane()])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(rows[0].created_at.as_deref(), Some("2026-10-17T09:00:00.123456+00:00"));
    assert_eq!(client.metrics().http_requests_total(), 1);
}

#[tokio::test]
async fn test_form_submission_end_to_end() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
        .match_body(Matcher::Json(serde_json::json!([{
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": null,
            "company": null,
            "message": "Hello"
        }])))
        .with_status(201)
        .with_body(STORED_ROW)
        .create_async()
        .await;

    let client: Arc<dyn AsyncSupabaseClient> = Arc::new(AsyncSupabaseClientImpl::new(
        SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string()),
    ));
    let repository = Arc::new(SupabaseSubmissionRepository::new(
        client,
        "contact_submissions",
    ));
    let controller = FormController::new(repository);
    controller.update_field(FormField::Name, "Jane Doe");
    controller.update_field(FormField::Email, "jane@x.com");
    controller.update_field(FormField::Message, "Hello");

    let outcome = controller.submit().await;

    mock.assert_async().await;
    assert!(outcome.is_success());
    let snapshot = controller.snapshot();
    assert!(snapshot.values.is_empty());
    assert_eq!(snapshot.submit_status, SubmissionStatus::Success);
}

#[tokio::test]
async fn test_form_submission_end_to_end_failure() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("POST", "/rest/v1/contact_submissions")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let client: Arc<dyn AsyncSupabaseClient> = Arc::new(AsyncSupabaseClientImpl::new(
        SupabaseClient::with_base_url(server.url(), "test-anon-key".to_string()),
    ));
    let repository = Arc::new(SupabaseSubmissionRepository::new(
        client,
        "contact_submissions",
    ));
    let controller = FormController::new(repository);
    controller.update_field(FormField::Name, "Jane Doe");
    controller.update_field(FormField::Email, "jane@x.com");
    controller.update_field(FormField::Message, "Hello");

    let outcome = controller.submit().await;

    assert_eq!(outcome.status(), SubmissionStatus::Error);
    assert_eq!(outcome.error().map(|e| e.kind()), Some("rejected"));
    assert_eq!(controller.snapshot().values.name, "Jane Doe");
    assert!(!controller.is_submitting());
}
