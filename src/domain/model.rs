use crate::config::HttpMethod;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifies an existing account for login/suspend/unsuspend/terminate.
/// `extra` carries operation-specific fields the remote service needs
/// beyond the common identifiers; it is flattened into the outgoing
/// request parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountParams {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateParams {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub extra: HashMap<String, serde_json::Value>,
}

impl AccountParams {
    pub fn to_map(&self) -> HashMap<String, serde_json::Value> {
        value_to_map(serde_json::to_value(self).unwrap_or_default())
    }
}

impl CreateParams {
    pub fn to_map(&self) -> HashMap<String, serde_json::Value> {
        value_to_map(serde_json::to_value(self).unwrap_or_default())
    }
}

fn value_to_map(value: serde_json::Value) -> HashMap<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map.into_iter().collect(),
        _ => HashMap::new(),
    }
}

/// Description of one outbound HTTP request, produced by the request
/// builder and executed by an [`HttpTransport`](crate::domain::ports::HttpTransport).
/// Parameters travel as the URL query for GET and as a form-encoded
/// body for every other method.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestSpec {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw HTTP response as returned by the transport. The transport never
/// treats a non-2xx status as an error; interpretation is left to the
/// response handlers.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResult {
    pub username: String,
    pub service_identifier: Option<String>,
    pub package_identifier: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResult {
    pub message: String,
}

impl AckResult {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
