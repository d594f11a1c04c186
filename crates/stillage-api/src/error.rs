use thiserror::Error;

/// Top-level error type for the `stillage-api` crate.
///
/// Covers every failure mode of the inventory service client:
/// authentication, transport, API-level rejections, and decoding.
/// `stillage-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// HTTP 401. The session token has been cleared by the time this
    /// is returned; callers must re-authenticate, never retry.
    #[error("Unauthorized -- please log in")]
    Unauthorized,

    /// Login/registration rejected by the auth endpoints.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── API ─────────────────────────────────────────────────────────
    /// Any non-2xx other than 401/204. `message` is the server-provided
    /// error message when the body carried one, otherwise the generic
    /// `HTTP <status>: <reason>` line.
    #[error("{message}")]
    Http { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error means the session is gone and
    /// re-authentication is required.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Http { status: 404, .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// The HTTP status behind this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Http { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
