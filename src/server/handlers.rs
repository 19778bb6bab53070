//! MCP tool handlers for the contact form server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::FormField;
use crate::error::SubmissionError;
use crate::form::{FormSnapshot, SubmitOutcome};
use crate::services::ContactFormService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes one contact form as tools.
#[derive(Clone)]
pub struct ContactFormMcpServer {
    form_service: Arc<dyn ContactFormService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactFormMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-form-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for the ASKAA Media contact form - fill in name, email and message (phone and company are optional), then submit. The form clears itself after a successful submission and keeps its values after a failed one.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateFieldParams {
    /// One of: name, email, phone, company, message
    field: String,
    value: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FillFormParams {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl FillFormParams {
    /// Provided fields in form order.
    fn into_updates(self) -> Vec<(FormField, String)> {
        [
            (FormField::Name, self.name),
            (FormField::Email, self.email),
            (FormField::Phone, self.phone),
            (FormField::Company, self.company),
            (FormField::Message, self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Form constraint violations are the caller's to fix, not server faults.
fn to_invalid_params(e: SubmissionError) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: Some(serde_json::json!({ "error_kind": e.kind() })),
    }
}

fn snapshot_json(snapshot: &FormSnapshot) -> serde_json::Value {
    serde_json::json!({
        "values": snapshot.values,
        "is_submitting": snapshot.is_submitting,
        "submit_status": snapshot.submit_status,
        "status": snapshot.status(),
    })
}

fn outcome_json(outcome: &SubmitOutcome) -> serde_json::Value {
    let status = outcome.status();
    match outcome {
        SubmitOutcome::Submitted(rows) => serde_json::json!({
            "status": status,
            "message": status.notice(),
            "inserted": rows,
        }),
        SubmitOutcome::Failed(err) => serde_json::json!({
            "status": status,
            "message": status.notice(),
            "error_kind": err.kind(),
        }),
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

// Tool router implementation
#[tool_router]
impl ContactFormMcpServer {
    /// Create a new contact form MCP server.
    pub fn new(form_service: Arc<dyn ContactFormService>) -> Self {
        Self {
            form_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Show the form's current values and submit status.
    #[tool(
        description = "Show the contact form's current field values, whether a submission is in flight, and the result of the last submission"
    )]
    async fn get_contact_form(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: get_contact_form called");

        json_result(&snapshot_json(&self.form_service.state()))
    }

    /// Set a single form field.
    #[tool(
        description = "Set one contact form field (name, email, phone, company or message). Other fields and the last submission status are left unchanged."
    )]
    async fn update_contact_field(
        &self,
        params: Parameters<UpdateFieldParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: update_contact_field called");
        tracing::debug!("Parameters: field={}, value_len={}", params.field, params.value.len());

        let snapshot = self
            .form_service
            .update_field(&params.field, params.value)
            .map_err(to_invalid_params)?;

        json_result(&snapshot_json(&snapshot))
    }

    /// Set several form fields at once.
    #[tool(
        description = "Fill several contact form fields at once. Only the fields provided are changed."
    )]
    async fn fill_contact_form(
        &self,
        params: Parameters<FillFormParams>,
    ) -> Result<CallToolResult, McpError> {
        let updates = params.0.into_updates();

        tracing::info!("MCP Handler: fill_contact_form called");
        tracing::debug!(
            "Fields: {:?}",
            updates.iter().map(|(f, _)| f.as_str()).collect::<Vec<_>>()
        );

        let snapshot = self.form_service.fill(updates);
        json_result(&snapshot_json(&snapshot))
    }

    /// Submit the contact form.
    #[tool(
        description = "Submit the contact form. Requires name, email and message. On success the form is cleared; on failure the values are kept so the submission can be retried."
    )]
    async fn submit_contact_form(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_contact_form called");

        let outcome = self
            .form_service
            .submit()
            .await
            .map_err(to_invalid_params)?;

        json_result(&outcome_json(&outcome))
    }

    /// Show the agency's contact details.
    #[tool(description = "Show the agency's phone, email, services and social networks")]
    async fn get_agency_contact_info(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: get_agency_contact_info called");

        let profile = self.form_service.agency_profile();
        json_result(&serde_json::to_value(&profile).map_err(to_mcp_error)?)
    }
}
