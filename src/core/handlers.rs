use crate::core::response::ResponseDocument;
use crate::domain::model::RawResponse;
use crate::utils::error::{ProviderError, Result};
use serde_json::Value;

const URL_ALIASES: &[&str] = &["url", "redirect_url", "login_url", "sso_url", "login_link"];
const USERNAME_ALIASES: &[&str] = &["username", "user_name", "user", "login", "account"];
const SERVICE_ID_ALIASES: &[&str] = &["service_identifier", "service_id", "account_id", "id"];
const PACKAGE_ID_ALIASES: &[&str] = &[
    "package_identifier",
    "package_id",
    "plan_id",
    "plan",
    "product_id",
];
const OUTCOME_ALIASES: &[&str] = &["success", "status", "result"];

const BODY_EXCERPT_CHARS: usize = 200;

/// Extracts a login/redirect URL from a response of loosely known
/// shape. Absence of a URL is not an error at this layer; the caller
/// decides whether a missing URL is fatal.
pub struct UrlResponseHandler {
    document: ResponseDocument,
}

impl UrlResponseHandler {
    pub fn new(response: RawResponse) -> Self {
        Self {
            document: ResponseDocument::new(response),
        }
    }

    /// Body field aliases first, then the `Location` header for
    /// redirect-style responses, then `default`.
    pub fn url(&self, default: Option<String>) -> Option<String> {
        self.document
            .find_string(URL_ALIASES)
            .or_else(|| self.document.header("location").map(str::to_string))
            .or(default)
    }
}

/// Extracts the created account's username and optional service/package
/// identifiers. Username is mandatory; identifiers fall back to
/// whatever the caller already knows.
pub struct UsernameResponseHandler {
    document: ResponseDocument,
}

impl UsernameResponseHandler {
    pub fn new(response: RawResponse) -> Self {
        Self {
            document: ResponseDocument::new(response),
        }
    }

    pub fn username(&self) -> Result<String> {
        self.document
            .find_string(USERNAME_ALIASES)
            .ok_or_else(|| ProviderError::ParsingError {
                field: "username".to_string(),
                aliases: USERNAME_ALIASES.iter().map(|s| s.to_string()).collect(),
            })
    }

    pub fn service_identifier(&self) -> Option<String> {
        self.document.find_string(SERVICE_ID_ALIASES)
    }

    pub fn package_identifier(&self) -> Option<String> {
        self.document.find_string(PACKAGE_ID_ALIASES)
    }
}

/// Decides whether a lifecycle operation (suspend/unsuspend/terminate)
/// succeeded. An explicit success/status field in the body overrides
/// the HTTP status code; with no explicit signal, any 2xx passes.
pub struct OperationResponseHandler {
    document: ResponseDocument,
}

impl OperationResponseHandler {
    pub fn new(response: RawResponse) -> Self {
        Self {
            document: ResponseDocument::new(response),
        }
    }

    pub fn assert_success(&self, operation: &str) -> Result<()> {
        let status = self.document.status();

        let succeeded = match self.explicit_signal() {
            Some(signal) => signal,
            None => (200..300).contains(&status),
        };

        if succeeded {
            return Ok(());
        }

        Err(ProviderError::OperationFailedError {
            operation: operation.to_string(),
            status,
            body_excerpt: self.document.body_excerpt(BODY_EXCERPT_CHARS),
        })
    }

    /// Interprets a `success`/`status`/`result` field if one exists.
    /// Strings outside the known truthy/falsy sets carry no signal
    /// (e.g. `"status": "pending"`).
    fn explicit_signal(&self) -> Option<bool> {
        match self.document.find(OUTCOME_ALIASES)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => match n.as_i64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            Value::String(s) => match s.to_lowercase().as_str() {
                "true" | "success" | "ok" | "1" => Some(true),
                "false" | "error" | "failed" | "fail" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }
}
