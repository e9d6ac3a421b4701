use serde::Deserialize;

use crate::error::BookingError;

fn default_form_slug() -> String {
    "limousine".to_string()
}

/// Configuration handed over by the embedding host (the WordPress plugin
/// prints it as a JSON object). Only the Supabase endpoint and key are
/// mandatory; everything else has a sensible default.
#[derive(Debug, Clone, Deserialize)]
pub struct HostConfig {
    #[serde(rename = "supabaseUrl", default)]
    pub supabase_url: String,
    #[serde(rename = "supabaseKey", default)]
    pub supabase_key: String,
    #[serde(rename = "formSlug", default = "default_form_slug")]
    pub form_slug: String,
    #[serde(default)]
    pub nonce: String,
    #[serde(rename = "restNonce", default)]
    pub rest_nonce: String,
    #[serde(rename = "ajaxUrl", default)]
    pub ajax_url: String,
    #[serde(rename = "apiUrl", default)]
    pub api_url: String,
}

impl HostConfig {
    /// Parse the host's configuration object. A missing endpoint or key is
    /// fatal here rather than a silent default downstream.
    pub fn from_json(raw: &str) -> Result<Self, BookingError> {
        let config: HostConfig = serde_json::from_str(raw)
            .map_err(|e| BookingError::ConfigurationMissing(format!("unreadable config: {}", e)))?;
        config.validated()
    }

    /// Environment-variable fallback, used by integration tests and tooling.
    pub fn from_env() -> Result<Self, BookingError> {
        let config = HostConfig {
            supabase_url: std::env::var("PCS_SUPABASE_URL").unwrap_or_default(),
            supabase_key: std::env::var("PCS_SUPABASE_KEY").unwrap_or_default(),
            form_slug: std::env::var("PCS_FORM_SLUG").unwrap_or_else(|_| default_form_slug()),
            nonce: std::env::var("PCS_NONCE").unwrap_or_default(),
            rest_nonce: String::new(),
            ajax_url: String::new(),
            api_url: String::new(),
        };
        config.validated()
    }

    fn validated(self) -> Result<Self, BookingError> {
        if self.supabase_url.trim().is_empty() {
            return Err(BookingError::ConfigurationMissing(
                "supabaseUrl is not set".to_string(),
            ));
        }
        if self.supabase_key.trim().is_empty() {
            return Err(BookingError::ConfigurationMissing(
                "supabaseKey is not set".to_string(),
            ));
        }
        Ok(self)
    }

    /// Base URL for the data API's edge functions.
    pub fn functions_url(&self, function: &str) -> String {
        format!("{}/functions/v1/{}", self.supabase_url.trim_end_matches('/'), function)
    }
}
