//! CLI configuration — thin wrapper around `stillage_config` shared
//! types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--url, --insecure, --timeout).

use std::time::Duration;

use stillage_api::{ApiClient, SessionStore, TlsMode, TransportConfig};
use stillage_core::Inventory;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use stillage_config::{
    Config, Profile, clear_token, config_path, load_config_or_default, load_token, save_config,
    store_token,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the controller for this invocation: resolve the backend URL,
/// TLS, and timeout from flags + profile, load the persisted session
/// token, and wire up the client.
pub fn build_inventory(global: &GlobalOpts) -> Result<(Inventory, String), CliError> {
    let config = load_config_or_default();
    let profile_name = active_profile_name(global, &config);
    let profile = config.profiles.get(&profile_name);

    // 1. Backend URL (flag > env > profile)
    let url = global
        .url
        .clone()
        .or_else(|| profile.map(|p| p.url.clone()))
        .ok_or_else(|| CliError::InvalidConfig {
            field: "url".into(),
            reason: format!(
                "no backend URL configured for profile '{profile_name}'; \
                 pass --url or run: stillage config init"
            ),
        })?;

    // 2. TLS verification
    let tls = if global.insecure || profile.and_then(|p| p.insecure).unwrap_or(false) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ca_path) = profile.and_then(|p| p.ca_cert.clone()) {
        TlsMode::CustomCa(ca_path)
    } else {
        TlsMode::System
    };

    // 3. Timeout (flag > profile > platform default of none)
    let timeout = global
        .timeout
        .or_else(|| profile.and_then(|p| p.timeout))
        .map(Duration::from_secs);

    let transport = TransportConfig { tls, timeout };

    // 4. Persisted session token, if any
    let session = match load_token(&profile_name) {
        Some(token) => SessionStore::with_token(token),
        None => SessionStore::new(),
    };

    let client =
        ApiClient::new(&url, session, &transport).map_err(|e| CliError::InvalidConfig {
            field: "url".into(),
            reason: e.to_string(),
        })?;

    Ok((Inventory::new(client), profile_name))
}
