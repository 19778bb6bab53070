//! Configuration management for the contact form server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read with `dotenvy`, which never writes to stdout (MCP uses
//! stdout for communication).

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Table the contact form writes to unless overridden.
pub const DEFAULT_SUBMISSIONS_TABLE: &str = "contact_submissions";

/// Configuration for the contact form server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Supabase project URL
    pub supabase_url: String,

    /// Supabase anon (public) API key
    pub supabase_anon_key: String,

    /// Table receiving contact submissions (default: "contact_submissions")
    pub submissions_table: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables (the `VITE_` names used by the site's
    /// build are accepted as fallbacks):
    /// - `SUPABASE_URL` / `VITE_SUPABASE_URL`: Supabase project URL
    /// - `SUPABASE_ANON_KEY` / `VITE_SUPABASE_ANON_KEY`: anon API key
    ///
    /// Optional environment variables:
    /// - `CONTACT_SUBMISSIONS_TABLE`: target table (default: "contact_submissions")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let supabase_url = Self::required_var("SUPABASE_URL", "VITE_SUPABASE_URL")?;
        let supabase_anon_key =
            Self::required_var("SUPABASE_ANON_KEY", "VITE_SUPABASE_ANON_KEY")?;

        if !supabase_url.starts_with("http://") && !supabase_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SUPABASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if supabase_anon_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "SUPABASE_ANON_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let submissions_table = env::var("CONTACT_SUBMISSIONS_TABLE")
            .unwrap_or_else(|_| DEFAULT_SUBMISSIONS_TABLE.to_string());
        if submissions_table.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_SUBMISSIONS_TABLE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            supabase_url,
            supabase_anon_key,
            submissions_table,
            request_timeout,
            log_level,
        })
    }

    /// Read `primary`, falling back to `fallback`; report `primary` when both are unset.
    fn required_var(primary: &str, fallback: &str) -> ConfigResult<String> {
        env::var(primary)
            .or_else(|_| env::var(fallback))
            .map_err(|_| ConfigError::MissingVar(primary.to_string()))
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
            submissions_table: DEFAULT_SUBMISSIONS_TABLE.to_string(),
            request_timeout: 10,
            log_level: "error".to_string(),
        }
    }
}
