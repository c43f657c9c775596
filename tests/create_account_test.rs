use generic_autologin::{
    Configuration, CreateParams, EndpointConfig, HttpMethod, Provider, ProviderError,
    ReqwestTransport,
};
use httpmock::prelude::*;
use std::collections::HashMap;

fn configuration(server: &MockServer, method: HttpMethod) -> Configuration {
    Configuration {
        login: EndpointConfig {
            enabled: true,
            url: server.url("/sso/login"),
            http_method: HttpMethod::Get,
        },
        create: EndpointConfig {
            enabled: true,
            url: server.url("/accounts"),
            http_method: method,
        },
        suspend: EndpointConfig::default(),
        unsuspend: EndpointConfig::default(),
        terminate: EndpointConfig::default(),
        access_token: Some("secret-token".to_string()),
        debug: false,
    }
}

fn create_params(extra: &[(&str, &str)]) -> CreateParams {
    CreateParams {
        email: "adam@example.com".to_string(),
        service_identifier: Some("svc-9".to_string()),
        package_identifier: Some("gold".to_string()),
        extra: extra
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect::<HashMap<_, _>>(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_posts_form_body_with_flattened_extra() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/accounts")
            .header("content-type", "application/x-www-form-urlencoded")
            .header("authorization", "Bearer secret-token")
            .body_includes("email=adam%40example.com")
            .body_includes("foo=bar");
        then.status(201).json_body(serde_json::json!({
            "username": "adam42",
            "service_id": 7
        }));
    });

    let provider = Provider::new(
        configuration(&server, HttpMethod::Post),
        ReqwestTransport::new(false),
    );

    let result = provider
        .create(&create_params(&[("foo", "bar")]))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(result.username, "adam42");
    // Response-provided identifier wins; the missing one falls back.
    assert_eq!(result.service_identifier.as_deref(), Some("7"));
    assert_eq!(result.package_identifier.as_deref(), Some("gold"));
}

#[tokio::test]
async fn test_create_via_get_places_parameters_in_query() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/accounts")
            .query_param("email", "adam@example.com")
            .query_param("foo", "bar");
        then.status(200)
            .json_body(serde_json::json!({"data": {"UserName": "adam42"}}));
    });

    let provider = Provider::new(
        configuration(&server, HttpMethod::Get),
        ReqwestTransport::new(false),
    );

    let result = provider
        .create(&create_params(&[("foo", "bar")]))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(result.username, "adam42");
}

#[tokio::test]
async fn test_create_fails_when_response_has_no_username() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/accounts");
        then.status(200)
            .json_body(serde_json::json!({"message": "created"}));
    });

    let provider = Provider::new(
        configuration(&server, HttpMethod::Post),
        ReqwestTransport::new(false),
    );

    let err = provider.create(&create_params(&[])).await.unwrap_err();
    match err {
        ProviderError::ParsingError { field, aliases } => {
            assert_eq!(field, "username");
            assert!(!aliases.is_empty());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_disabled_makes_no_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST).path("/accounts");
        then.status(201).json_body(serde_json::json!({"username": "x"}));
    });

    let mut config = configuration(&server, HttpMethod::Post);
    config.create.enabled = false;

    let provider = Provider::new(config, ReqwestTransport::new(false));

    let err = provider.create(&create_params(&[])).await.unwrap_err();
    assert!(matches!(err, ProviderError::ConfigError { .. }));
    assert_eq!(mock.hits(), 0);
}
