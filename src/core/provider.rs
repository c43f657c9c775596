use crate::config::{Configuration, EndpointConfig};
use crate::core::handlers::{OperationResponseHandler, UrlResponseHandler, UsernameResponseHandler};
use crate::core::request::build_request;
use crate::domain::model::{
    AccountParams, AckResult, CreateParams, CreateResult, LoginResult, RawResponse,
};
use crate::domain::ports::HttpTransport;
use crate::utils::error::{ProviderError, Result};
use std::collections::HashMap;

/// Provider metadata, for registration/discovery surfaces.
#[derive(Debug, Clone)]
pub struct About {
    pub name: &'static str,
    pub description: &'static str,
}

/// The account-lifecycle dispatcher. Stateless per call: the immutable
/// [`Configuration`] is the only persistent state, and each operation
/// issues exactly one outbound request through the transport port.
pub struct Provider<T: HttpTransport> {
    configuration: Configuration,
    transport: T,
}

impl<T: HttpTransport> Provider<T> {
    pub fn new(configuration: Configuration, transport: T) -> Self {
        Self {
            configuration,
            transport,
        }
    }

    pub fn about() -> About {
        About {
            name: "Generic Login",
            description:
                "A highly-configurable generic auto login provider for services which use bearer token auth",
        }
    }

    /// Requests a one-time login URL for an existing account.
    ///
    /// Unlike the other operations, login has no enabled-guard: a login
    /// endpoint is assumed to always be configured, so the request is
    /// issued unconditionally. A response without any URL-shaped field
    /// yields `LoginResult { url: None }` rather than an error.
    pub async fn login(&self, params: &AccountParams) -> Result<LoginResult> {
        let response = self
            .dispatch("login", &self.configuration.login, params.to_map())
            .await?;

        let handler = UrlResponseHandler::new(response);
        Ok(LoginResult {
            url: handler.url(None),
        })
    }

    /// Creates an account on the remote service. The response must name
    /// the created username; service/package identifiers fall back to
    /// the ones supplied by the caller when the response omits them.
    pub async fn create(&self, params: &CreateParams) -> Result<CreateResult> {
        if !self.configuration.create.enabled {
            return Err(ProviderError::config(
                "No create endpoint set in this configuration",
            ));
        }

        let response = self
            .dispatch("create", &self.configuration.create, params.to_map())
            .await?;

        let handler = UsernameResponseHandler::new(response);
        Ok(CreateResult {
            username: handler.username()?,
            service_identifier: handler
                .service_identifier()
                .or_else(|| params.service_identifier.clone()),
            package_identifier: handler
                .package_identifier()
                .or_else(|| params.package_identifier.clone()),
        })
    }

    pub async fn suspend(&self, params: &AccountParams) -> Result<AckResult> {
        if !self.configuration.suspend.enabled {
            return Err(ProviderError::config(
                "No suspend endpoint set in this configuration",
            ));
        }

        let response = self
            .dispatch("suspend", &self.configuration.suspend, params.to_map())
            .await?;

        OperationResponseHandler::new(response).assert_success("suspend")?;
        Ok(AckResult::new("Account suspended"))
    }

    /// Unsuspend shares the suspend guard: a service that can suspend
    /// is expected to be able to lift the suspension again.
    pub async fn unsuspend(&self, params: &AccountParams) -> Result<AckResult> {
        if !self.configuration.suspend.enabled {
            return Err(ProviderError::config(
                "No unsuspend endpoint set in this configuration",
            ));
        }

        let response = self
            .dispatch("unsuspend", &self.configuration.unsuspend, params.to_map())
            .await?;

        OperationResponseHandler::new(response).assert_success("suspend")?;
        Ok(AckResult::new("Account unsuspended"))
    }

    pub async fn terminate(&self, params: &AccountParams) -> Result<AckResult> {
        if !self.configuration.terminate.enabled {
            return Err(ProviderError::config(
                "No terminate endpoint set in this configuration",
            ));
        }

        let response = self
            .dispatch("terminate", &self.configuration.terminate, params.to_map())
            .await?;

        OperationResponseHandler::new(response).assert_success("terminate")?;
        Ok(AckResult::new("Account terminated"))
    }

    async fn dispatch(
        &self,
        operation: &str,
        endpoint: &EndpointConfig,
        params: HashMap<String, serde_json::Value>,
    ) -> Result<RawResponse> {
        let request = build_request(
            endpoint.http_method,
            &endpoint.url,
            params,
            self.configuration.access_token.as_deref(),
        );

        tracing::debug!(
            operation,
            method = %request.method,
            url = %request.url,
            "Dispatching request"
        );

        let response = self.transport.execute(&request).await?;

        tracing::debug!(operation, status = response.status, "Received response");

        Ok(response)
    }
}
