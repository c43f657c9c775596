use crate::utils::error::{ProviderError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// HTTP methods accepted for endpoint configuration. Parsed
/// case-insensitively when the configuration is loaded; invalid
/// method strings are rejected there, never per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn is_get(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("Unsupported HTTP method: {}", other)),
        }
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_method")]
    pub http_method: HttpMethod,
}

fn default_enabled() -> bool {
    true
}

fn default_method() -> HttpMethod {
    HttpMethod::Get
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            http_method: HttpMethod::Get,
        }
    }
}

/// Immutable description of the remote service: one endpoint per
/// operation plus the shared bearer token. Built once when the
/// provider is constructed and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    pub login: EndpointConfig,
    #[serde(default)]
    pub create: EndpointConfig,
    #[serde(default)]
    pub suspend: EndpointConfig,
    #[serde(default)]
    pub unsuspend: EndpointConfig,
    #[serde(default)]
    pub terminate: EndpointConfig,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub debug: bool,
}

impl Configuration {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ProviderError::ConfigError {
                message: format!("Configuration file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Configuration =
            toml::from_str(&content).map_err(|e| ProviderError::ConfigError {
                message: format!("Failed to parse configuration: {}", e),
            })?;

        config.validate()?;
        Ok(config)
    }

    fn endpoints(&self) -> [(&'static str, &EndpointConfig); 5] {
        [
            ("login", &self.login),
            ("create", &self.create),
            ("suspend", &self.suspend),
            ("unsuspend", &self.unsuspend),
            ("terminate", &self.terminate),
        ]
    }
}

impl Validate for Configuration {
    fn validate(&self) -> Result<()> {
        for (name, endpoint) in self.endpoints() {
            // Login is always attempted, so its URL must be valid even
            // if the config marks it disabled.
            if endpoint.enabled || name == "login" {
                validate_url(&format!("{}_endpoint_url", name), &endpoint.url)?;
            }
        }

        if let Some(token) = &self.access_token {
            if token.trim().is_empty() {
                return Err(ProviderError::InvalidConfigValueError {
                    field: "access_token".to_string(),
                    value: token.clone(),
                    reason: "Token cannot be whitespace-only".to_string(),
                });
            }
        }

        Ok(())
    }
}
