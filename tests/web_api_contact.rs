//! Web API Contact Tests
//!
//! Integration tests for the `POST /send` endpoint.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{
    create_test_server, create_test_server_with_timeout, HangingMailer, PanickingMailer,
    RecordingMailer, RECIPIENT,
};
use formrelay::MailError;

fn valid_body() -> Value {
    json!({
        "name": "Jo",
        "email": "jo@ex.com",
        "subject": "Hi",
        "message": "Hello"
    })
}

// ============================================================================
// Successful Submissions
// ============================================================================

#[tokio::test]
async fn test_send_success() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let response = server.post("/send").json(&valid_body()).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"success": true, "message": "Email sent successfully"})
    );

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, RECIPIENT);
    assert!(sent[0].subject.contains("Hi"));
    assert!(sent[0].text.contains("Jo"));
    assert!(sent[0].html.contains("Jo"));
    assert_eq!(sent[0].reply_to.as_deref(), Some("jo@ex.com"));
}

#[tokio::test]
async fn test_send_subject_has_prefix() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    server.post("/send").json(&valid_body()).await.assert_status_ok();

    let sent = mailer.sent().await;
    assert_eq!(sent[0].subject, "[Contact Form] Hi");
}

#[tokio::test]
async fn test_send_without_phone() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    server.post("/send").json(&valid_body()).await.assert_status_ok();

    let sent = mailer.sent().await;
    assert!(sent[0].text.contains("Not provided"));
}

#[tokio::test]
async fn test_send_with_phone() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let mut body = valid_body();
    body["phone"] = json!("555-0100");
    server.post("/send").json(&body).await.assert_status_ok();

    let sent = mailer.sent().await;
    assert!(sent[0].text.contains("555-0100"));
    assert!(!sent[0].text.contains("Not provided"));
}

#[tokio::test]
async fn test_send_strips_angle_brackets() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let response = server
        .post("/send")
        .json(&json!({
            "name": "<script>",
            "email": "a@b.com",
            "subject": "s",
            "message": "m"
        }))
        .await;

    response.assert_status_ok();
    let sent = mailer.sent().await;
    assert!(sent[0].text.contains("script"));
    assert!(!sent[0].text.contains("<script>"));
    assert!(!sent[0].html.contains("<script>"));
}

#[tokio::test]
async fn test_send_ignores_unknown_fields() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let mut body = valid_body();
    body["company"] = json!("Acme");
    server.post("/send").json(&body).await.assert_status_ok();

    assert_eq!(mailer.sent().await.len(), 1);
}

// ============================================================================
// Validation Failures
// ============================================================================

#[tokio::test]
async fn test_send_invalid_email() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let mut body = valid_body();
    body["email"] = json!("not-an-email");
    let response = server.post("/send").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": false, "message": "Invalid email format."}));
    assert!(mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_send_empty_body() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let response = server.post("/send").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Missing required fields. Please provide name, email, subject, and message."
    );
    assert!(mailer.sent().await.is_empty());
}

#[tokio::test]
async fn test_send_missing_fields_checked_before_email() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let response = server
        .post("/send")
        .json(&json!({"name": "Jo", "email": "not-an-email", "subject": "Hi"}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Missing required fields"));
}

#[tokio::test]
async fn test_send_falsy_fields_are_missing() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    for falsy in [json!(""), json!(null), json!(false), json!(0)] {
        let mut body = valid_body();
        body["message"] = falsy;
        let response = server.post("/send").json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
    assert!(mailer.sent().await.is_empty());
}

// ============================================================================
// Body Rejections
// ============================================================================

#[tokio::test]
async fn test_send_malformed_json() {
    let server = create_test_server(RecordingMailer::accepting());

    let response = server
        .post("/send")
        .bytes("{\"name\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": false, "message": "Invalid JSON body."}));
}

#[tokio::test]
async fn test_send_json_array() {
    let server = create_test_server(RecordingMailer::accepting());

    let response = server.post("/send").json(&json!(["Jo"])).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid JSON body.");
}

#[tokio::test]
async fn test_send_not_json() {
    let server = create_test_server(RecordingMailer::accepting());

    let response = server.post("/send").text("name=Jo").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_send_body_too_large() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let mut body = valid_body();
    body["message"] = json!("x".repeat(64 * 1024));
    let response = server.post("/send").json(&body).await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = response.json();
    assert_eq!(body["message"], "Request body too large.");
    assert!(mailer.sent().await.is_empty());
}

// ============================================================================
// Mail Failures
// ============================================================================

#[tokio::test]
async fn test_send_auth_failure() {
    let server = create_test_server(RecordingMailer::failing(MailError::Auth(
        "535 5.7.8 bad credentials".into(),
    )));

    let response = server.post("/send").json(&valid_body()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Email authentication failed. Please check the server's email credentials."
        })
    );
}

#[tokio::test]
async fn test_send_transport_failure() {
    let server = create_test_server(RecordingMailer::failing(MailError::Transport(
        "connection refused".into(),
    )));

    let response = server.post("/send").json(&valid_body()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"success": false, "message": "Failed to send email. Please try again later."})
    );
}

#[tokio::test]
async fn test_send_timeout() {
    let server =
        create_test_server_with_timeout(Arc::new(HangingMailer), Duration::from_millis(50));

    let response = server.post("/send").json(&valid_body()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["message"], "Failed to send email. Please try again later.");
}

#[tokio::test]
async fn test_send_submissions_are_independent() {
    let mailer = RecordingMailer::accepting();
    let server = create_test_server(mailer.clone());

    let mut second = valid_body();
    second["name"] = json!("Sam");
    second["email"] = json!("sam@ex.com");

    let (a, b) = tokio::join!(
        async { server.post("/send").json(&valid_body()).await },
        async { server.post("/send").json(&second).await }
    );
    a.assert_status_ok();
    b.assert_status_ok();

    let sent = mailer.sent().await;
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().any(|m| m.text.contains("Jo")));
    assert!(sent.iter().any(|m| m.text.contains("Sam")));
}

// ============================================================================
// Unhandled Failures
// ============================================================================

#[tokio::test]
async fn test_send_panic_is_internal_error() {
    let server = create_test_server(Arc::new(PanickingMailer));

    let response = server.post("/send").json(&valid_body()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({"success": false, "message": "Internal server error"})
    );
    assert!(!response.text().contains("smtp.internal"));

    // The server keeps serving after the panic
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "Server is running");
}
