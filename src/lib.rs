//! Contact Form MCP Server - the ASKAA Media contact form as a Model Context Protocol server.
//!
//! This library implements the website's contact form submission pipeline: field
//! state, status tracking, and the insert into the Supabase `contact_submissions`
//! table. The binary exposes one form to an AI assistant over MCP.
//!
//! # Architecture
//!
//! - **domain**: Field names and the validated email value object
//! - **models**: Form values, the normalized insert record, stored rows, agency profile
//! - **error**: Error types for the backend, configuration and submissions
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the Supabase REST API
//! - **repositories**: Persistence abstraction the form submits through
//! - **form**: The submission controller and the state it exposes
//! - **services**: Form constraints and the disabled-while-sending guard
//! - **server**: MCP protocol server
//! - **metrics**: Request and insert counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use client::SupabaseClient;
pub use config::Config;
pub use error::{ConfigError, SubmissionError, SupabaseApiError};
pub use form::{FormController, FormSnapshot, SubmissionStatus, SubmitOutcome};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{AgencyProfile, ContactSubmission, ContactSubmissionRecord, StoredSubmission};
pub use server::ContactFormMcpServer;
