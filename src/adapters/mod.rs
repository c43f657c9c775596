// Adapters layer: concrete implementations for external systems.

use crate::config::HttpMethod;
use crate::domain::model::{RawResponse, RequestSpec};
use crate::domain::ports::HttpTransport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// [`HttpTransport`] backed by reqwest. Non-2xx statuses are returned
/// as ordinary responses; only connection-level failures error out.
/// With `debug` enabled, requests and responses are traced on the wire.
pub struct ReqwestTransport {
    client: Client,
    debug: bool,
}

impl ReqwestTransport {
    pub fn new(debug: bool) -> Self {
        // Redirects are never followed: a 3xx Location header is part
        // of the response the handlers interpret.
        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("failed to build HTTP client");
        Self { client, debug }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(false)
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &RequestSpec) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);

        builder = if request.method.is_get() {
            builder.query(&request.params)
        } else {
            builder.form(&request.params)
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if self.debug {
            tracing::debug!(
                method = %request.method,
                url = %request.url,
                params = request.params.len(),
                "Sending request"
            );
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.text().await?;

        if self.debug {
            tracing::debug!(status, body_bytes = body.len(), "Received response");
        }

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
