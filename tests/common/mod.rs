//! Test helpers for HTTP-level tests.
//!
//! Provides mailer doubles and a router wired the way the binary wires it.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use tokio::sync::Mutex;

use formrelay::config::{ContactConfig, WebConfig};
use formrelay::web::create_router;
use formrelay::{AppState, ContactService, MailError, Mailer, OutgoingMail};

/// Recipient every test service relays to.
pub const RECIPIENT: &str = "owner@example.com";

/// Frontend origin allowed by the test router.
pub const FRONTEND_URL: &str = "http://localhost:3000";

/// Mailer double that records each mail and answers with a fixed result.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
    failure: Option<MailError>,
}

impl RecordingMailer {
    /// A mailer that accepts everything.
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A mailer that fails every send with `err`.
    pub fn failing(err: MailError) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(err),
        })
    }

    /// Mails handed to this mailer so far.
    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_mail(&self, mail: OutgoingMail) -> Result<(), MailError> {
        self.sent.lock().await.push(mail);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Mailer double whose sends never complete.
pub struct HangingMailer;

#[async_trait]
impl Mailer for HangingMailer {
    async fn send_mail(&self, _mail: OutgoingMail) -> Result<(), MailError> {
        std::future::pending().await
    }
}

/// Mailer double that panics on every send.
pub struct PanickingMailer;

#[async_trait]
impl Mailer for PanickingMailer {
    async fn send_mail(&self, _mail: OutgoingMail) -> Result<(), MailError> {
        panic!("mailer exploded: smtp.internal:587");
    }
}

/// Create a test web configuration.
pub fn create_test_config() -> WebConfig {
    WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        frontend_url: FRONTEND_URL.to_string(),
        max_body_bytes: 16 * 1024,
    }
}

/// Create a test server relaying through `mailer`.
pub fn create_test_server(mailer: Arc<dyn Mailer>) -> TestServer {
    create_test_server_with_timeout(mailer, Duration::from_secs(5))
}

/// Create a test server with a specific send timeout.
pub fn create_test_server_with_timeout(mailer: Arc<dyn Mailer>, timeout: Duration) -> TestServer {
    let contact = ContactService::new(mailer, RECIPIENT, &ContactConfig::default(), timeout);
    let router = create_router(Arc::new(AppState::new(contact)), &create_test_config());
    TestServer::new(router).expect("Failed to create test server")
}
