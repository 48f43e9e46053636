//! formrelay - contact form email relay
//!
//! Accepts contact form submissions over HTTP and forwards each one as an
//! email to a single configured recipient.

pub mod config;
pub mod contact;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod mail;
pub mod web;

pub use config::Config;
pub use contact::{ContactError, ContactForm, ContactService};
pub use error::{RelayError, Result};
pub use mail::{build_mailer, MailError, Mailer, OutgoingMail};
pub use web::{create_router, AppState, WebServer};
