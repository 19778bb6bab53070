//! MCP server exposing the contact form.
//!
//! This module provides the MCP protocol server that lets an assistant read,
//! fill and submit the contact form through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactFormMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact form MCP server with stdio transport.
///
/// This function starts the MCP server and runs it until completion.
/// It communicates via stdin/stdout using the MCP protocol.
pub async fn run_server(server: ContactFormMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
