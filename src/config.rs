//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default form template path, resolved against the working directory.
pub const DEFAULT_FORM_TEMPLATE: &str = "forms.html";

/// Application configuration.
///
/// Completion provider settings live with the provider itself, see
/// [`crate::llm::create_provider_from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Socket address the server listens on.
    pub bind_addr: String,
    /// Path of the HTML form template, read at request time.
    pub form_template: PathBuf,
    /// Frontend origin allowed by the CORS layer. Unset disables the layer.
    pub cors_origin: Option<String>,
    /// Accept the legacy unanchored ingredient/allergy pattern check.
    pub lax_validation: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `RECETARIO_BIND_ADDR`: listen address (default: "0.0.0.0:8080")
    /// - `RECETARIO_FORM_TEMPLATE`: form template path (default: "forms.html")
    /// - `RECETARIO_CORS_ORIGIN`: allowed frontend origin (default: CORS disabled)
    /// - `RECETARIO_LAX_VALIDATION`: accept the legacy pattern check (default: strict)
    pub fn from_env() -> Self {
        let bind_addr =
            env::var("RECETARIO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let form_template = env::var("RECETARIO_FORM_TEMPLATE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_FORM_TEMPLATE));

        let cors_origin = env::var("RECETARIO_CORS_ORIGIN").ok().filter(|v| !v.is_empty());

        let lax_validation = env::var("RECETARIO_LAX_VALIDATION")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Self {
            bind_addr,
            form_template,
            cors_origin,
            lax_validation,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            form_template: PathBuf::from(DEFAULT_FORM_TEMPLATE),
            cors_origin: None,
            lax_validation: false,
        }
    }
}
