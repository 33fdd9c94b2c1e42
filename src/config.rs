//! API configuration.
//!
//! Values that request handling and its tests share, such as base paths and
//! the identity header name, live here and are passed to components
//! explicitly instead of being kept in process-wide state.

use crate::error::ConfigError;
use crate::identity::IDENTITY_HEADER;
use crate::pagination::PageWindow;
use serde::{Deserialize, Serialize};

/// Version of the policies API a path belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiVersion {
    /// `/api/policies/v1.0`
    V1_0,
    /// `/api/policies/v1`
    V1,
}

/// Configuration for the policies API surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base path of the v1.0 API.
    pub api_base_v1_0: String,

    /// Base path of the v1 API.
    pub api_base_v1: String,

    /// Header carrying the identity token. Defaults to `x-rh-identity`.
    pub identity_header: String,

    /// Page size used when a client does not send `limit`.
    pub default_page_limit: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_base_v1_0: "/api/policies/v1.0".to_string(),
            api_base_v1: "/api/policies/v1".to_string(),
            identity_header: IDENTITY_HEADER.to_string(),
            default_page_limit: 50,
        }
    }
}

impl ApiConfig {
    /// Load a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the document is not valid JSON or a
    /// value is out of range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_limit == 0 {
            return Err(ConfigError::invalid_value(
                "default_page_limit",
                "must be greater than zero",
            ));
        }
        if self.identity_header.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "identity_header",
                "must not be empty",
            ));
        }
        for (key, base) in [
            ("api_base_v1_0", &self.api_base_v1_0),
            ("api_base_v1", &self.api_base_v1),
        ] {
            if !base.starts_with('/') {
                return Err(ConfigError::invalid_value(key, "must start with '/'"));
            }
        }
        Ok(())
    }

    /// Set the identity header name.
    pub fn with_identity_header(mut self, header: impl Into<String>) -> Self {
        self.identity_header = header.into();
        self
    }

    /// Set the default page size.
    pub fn with_default_page_limit(mut self, limit: usize) -> Self {
        self.default_page_limit = limit;
        self
    }

    /// Base path for an API version.
    pub fn base_path(&self, version: ApiVersion) -> &str {
        match version {
            ApiVersion::V1_0 => &self.api_base_v1_0,
            ApiVersion::V1 => &self.api_base_v1,
        }
    }

    /// Page window for a listing request, defaulting absent parameters.
    pub fn page_window(&self, limit: Option<usize>, offset: Option<usize>) -> PageWindow {
        PageWindow::new(
            limit.unwrap_or(self.default_page_limit),
            offset.unwrap_or(0),
        )
    }

    /// Path of a collection, e.g. `/api/policies/v1.0/policies`.
    pub fn collection_path(&self, version: ApiVersion, collection: &str) -> String {
        format!(
            "{}/{}",
            self.base_path(version).trim_end_matches('/'),
            collection.trim_start_matches('/')
        )
    }
}
