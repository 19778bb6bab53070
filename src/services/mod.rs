//! Application service layer.
//!
//! Services sit between the MCP handlers and the form controller. They
//! enforce the form's input constraints before anything is submitted.

mod contact_form_service;

pub use contact_form_service::{ContactFormService, ContactFormServiceImpl};
