//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable
//! help text.

use miette::Diagnostic;
use thiserror::Error;

use stillage_core::CoreError;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Authentication ───────────────────────────────────────────────
    #[error("Not authorized")]
    #[diagnostic(
        code(stillage::unauthorized),
        help(
            "Your session token was rejected and has been discarded.\n\
             Run: stillage auth login"
        )
    )]
    Unauthorized,

    #[error("No session token found")]
    #[diagnostic(
        code(stillage::no_session),
        help("Run: stillage auth login (or set STILLAGE_TOKEN)")
    )]
    NoSession,

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource} '{identifier}' not found")]
    #[diagnostic(
        code(stillage::not_found),
        help("Run: stillage {list_command} to see what exists")
    )]
    NotFound {
        resource: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(stillage::api_error))]
    Api {
        message: String,
        status: Option<u16>,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(stillage::validation))]
    Validation { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(stillage::profile_not_found),
        help("Create one with: stillage config init")
    )]
    ProfileNotFound { name: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(stillage::config))]
    InvalidConfig { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(stillage::config_load))]
    Config(#[from] stillage_config::ConfigError),

    // ── IO / serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(stillage::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unauthorized | Self::NoSession => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::InvalidConfig { .. } => exit_code::USAGE,
            Self::ProfileNotFound { .. } | Self::Config(_) => exit_code::USAGE,
            Self::Api { status: None, .. } => exit_code::CONNECTION,
            _ => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Unauthorized => Self::Unauthorized,
            CoreError::Api { status, message } => Self::Api { message, status },
            CoreError::Validation { message } => Self::Validation { message },
            CoreError::NotFound {
                resource,
                identifier,
            } => Self::NotFound {
                resource: resource.into(),
                identifier,
                list_command: format!("{resource}s list"),
            },
        }
    }
}
