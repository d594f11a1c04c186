use thiserror::Error;

/// Top-level error type for the `stillage-core` crate.
///
/// Write operations on the [`Inventory`](crate::controller::Inventory)
/// controller resolve to `Result<_, CoreError>` at the call boundary --
/// a failed create/update/delete never mutates list state and never
/// panics past this type.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Session rejected by the backend (401). The token has already
    /// been cleared; re-authenticate before retrying anything.
    #[error("Unauthorized -- please log in again")]
    Unauthorized,

    /// Any API or transport failure. Network-level failures carry no
    /// status; the message is surfaced to the user either way.
    #[error("{message}")]
    Api {
        status: Option<u16>,
        message: String,
    },

    /// Local pre-request validation failure. Raised before any network
    /// call is made.
    #[error("{message}")]
    Validation { message: String },

    /// Lookup against the local snapshot found nothing.
    #[error("{resource} '{identifier}' not found")]
    NotFound {
        resource: &'static str,
        identifier: String,
    },
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl From<stillage_api::Error> for CoreError {
    fn from(err: stillage_api::Error) -> Self {
        match err {
            stillage_api::Error::Unauthorized => Self::Unauthorized,
            stillage_api::Error::Http { status, message } => Self::Api {
                status: Some(status),
                message,
            },
            other => Self::Api {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}
