//! Contact Form MCP Server - Main entry point
//!
//! This is the main executable for the contact form server, which exposes the
//! ASKAA Media contact form through a Model Context Protocol (MCP) interface.

use anyhow::Result;
use contact_form_mcp_server::client::{AsyncSupabaseClient, AsyncSupabaseClientImpl};
use contact_form_mcp_server::repositories::{SubmissionRepository, SupabaseSubmissionRepository};
use contact_form_mcp_server::services::{ContactFormService, ContactFormServiceImpl};
use contact_form_mcp_server::{Config, ContactFormMcpServer, FormController, SupabaseClient};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// Single-threaded: the submit guard relies on no other task running between
// its check and the controller raising the in-flight flag.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let fallback_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting contact form server with Supabase URL: {}",
        config.supabase_url
    );

    let sync_client = SupabaseClient::new(&config);
    let client =
        Arc::new(AsyncSupabaseClientImpl::new(sync_client)) as Arc<dyn AsyncSupabaseClient>;

    let repository = Arc::new(SupabaseSubmissionRepository::new(
        client.clone(),
        config.submissions_table.clone(),
    )) as Arc<dyn SubmissionRepository>;

    let controller = Arc::new(FormController::new(repository));
    let form_service =
        Arc::new(ContactFormServiceImpl::new(controller)) as Arc<dyn ContactFormService>;

    let server = ContactFormMcpServer::new(form_service);

    info!(
        "Contact form server initialized (table: {}, timeout: {}s)",
        config.submissions_table, config.request_timeout
    );

    info!("Starting MCP server with stdio transport");
    contact_form_mcp_server::server::run_server(server).await?;

    let summary = client.metrics().summary();
    info!(
        requests = summary.http_requests_total,
        errors = summary.http_errors_total,
        avg_ms = summary.http_duration_avg_ms,
        inserted = summary.submissions_inserted_total,
        "Contact form server shutdown complete"
    );
    Ok(())
}
