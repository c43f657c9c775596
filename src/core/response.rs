use crate::domain::model::RawResponse;
use serde_json::Value;
use std::sync::OnceLock;

/// Lazy, tolerant view over a raw HTTP response body. The body is
/// parsed as JSON at most once (memoized); a non-JSON body simply
/// leaves the view empty so extraction falls through to defaults.
pub struct ResponseDocument {
    response: RawResponse,
    parsed: OnceLock<Option<Value>>,
}

impl ResponseDocument {
    pub fn new(response: RawResponse) -> Self {
        Self {
            response,
            parsed: OnceLock::new(),
        }
    }

    pub fn status(&self) -> u16 {
        self.response.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.response.header(name)
    }

    pub fn body_excerpt(&self, max_chars: usize) -> String {
        let trimmed = self.response.body.trim();
        if trimmed.is_empty() {
            return "<empty body>".to_string();
        }
        trimmed.chars().take(max_chars).collect()
    }

    fn json(&self) -> Option<&Value> {
        self.parsed
            .get_or_init(|| serde_json::from_str(&self.response.body).ok())
            .as_ref()
    }

    /// Looks up the first alias present in the body. Keys are compared
    /// case-insensitively. All aliases are tried at the top level
    /// first; if none match, each object-valued top-level field (e.g. a
    /// wrapping `data` object) is unwrapped and searched the same way.
    pub fn find(&self, aliases: &[&str]) -> Option<&Value> {
        let root = self.json()?.as_object()?;

        for alias in aliases {
            if let Some(value) = get_ignore_case(root, alias) {
                return Some(value);
            }
        }

        for alias in aliases {
            for nested in root.values().filter_map(Value::as_object) {
                if let Some(value) = get_ignore_case(nested, alias) {
                    return Some(value);
                }
            }
        }

        None
    }

    /// Like [`find`](Self::find) but renders scalar values to their
    /// string form; structured values are ignored.
    pub fn find_string(&self, aliases: &[&str]) -> Option<String> {
        match self.find(aliases)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

fn get_ignore_case<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v)
}
