use generic_autologin::{AccountParams, Configuration, Provider, ReqwestTransport};
use httpmock::prelude::*;
use tempfile::TempDir;

#[tokio::test]
async fn test_toml_configured_provider_end_to_end() -> anyhow::Result<()> {
    let server = MockServer::start();
    let temp_dir = TempDir::new()?;

    let config_content = format!(
        r#"
access_token = "test-token"
debug = true

[login]
url = "{base}/sso/login"
http_method = "GET"

[suspend]
enabled = true
url = "{base}/accounts/suspend"
http_method = "POST"

[unsuspend]
enabled = true
url = "{base}/accounts/unsuspend"
http_method = "POST"
"#,
        base = server.base_url()
    );

    let config_path = temp_dir.path().join("provider.toml");
    tokio::fs::write(&config_path, config_content).await?;

    let configuration = Configuration::from_file(&config_path)?;
    let transport = ReqwestTransport::new(configuration.debug);
    let provider = Provider::new(configuration, transport);

    let login_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/sso/login")
            .header("authorization", "Bearer test-token");
        then.status(200)
            .json_body(serde_json::json!({"login_url": "https://x/session/1"}));
    });

    let suspend_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/accounts/suspend")
            .header("authorization", "Bearer test-token");
        then.status(200).json_body(serde_json::json!({"success": true}));
    });

    let params = AccountParams {
        username: "adam".to_string(),
        ..Default::default()
    };

    let login = provider.login(&params).await?;
    assert_eq!(login.url.as_deref(), Some("https://x/session/1"));

    let suspend = provider.suspend(&params).await?;
    assert_eq!(suspend.message, "Account suspended");

    login_mock.assert();
    suspend_mock.assert();

    // Create was never configured; the guard fails before any request.
    let create_err = provider
        .create(&generic_autologin::CreateParams {
            email: "adam@example.com".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(create_err
        .to_string()
        .contains("No create endpoint set in this configuration"));

    Ok(())
}
