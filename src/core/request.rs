use crate::config::HttpMethod;
use crate::domain::model::RequestSpec;
use std::collections::HashMap;

/// Turns operation parameters into a request description for the
/// configured endpoint. Parameter placement follows the method: GET
/// requests carry them in the query string, everything else as a
/// form-encoded body (decided by the transport from `method`).
pub fn build_request(
    method: HttpMethod,
    url: &str,
    params: HashMap<String, serde_json::Value>,
    access_token: Option<&str>,
) -> RequestSpec {
    let mut headers = Vec::new();
    if let Some(token) = access_token {
        if !token.is_empty() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }
    }

    RequestSpec {
        method,
        url: url.to_string(),
        params: encode_params(flatten_extra(params)),
        headers,
    }
}

/// Merges an `extra` mapping onto the top-level parameter set and drops
/// the `extra` key itself. Entries in `extra` win over same-named
/// top-level parameters. A missing `extra` key is treated as an empty
/// mapping; a non-mapping `extra` value is kept as a regular parameter.
fn flatten_extra(
    mut params: HashMap<String, serde_json::Value>,
) -> HashMap<String, serde_json::Value> {
    match params.remove("extra") {
        Some(serde_json::Value::Object(extra)) => {
            for (key, value) in extra {
                params.insert(key, value);
            }
            params
        }
        Some(other) => {
            params.insert("extra".to_string(), other);
            params
        }
        None => params,
    }
}

/// Renders parameter values into their wire form: strings verbatim,
/// numbers and booleans via display, null dropped, structured values as
/// compact JSON. Sorted by key so the encoding is deterministic.
fn encode_params(params: HashMap<String, serde_json::Value>) -> Vec<(String, String)> {
    let mut encoded: Vec<(String, String)> = params
        .into_iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s,
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Number(n) => n.to_string(),
                structured => structured.to_string(),
            };
            Some((key, rendered))
        })
        .collect();
    encoded.sort_by(|a, b| a.0.cmp(&b.0));
    encoded
}
