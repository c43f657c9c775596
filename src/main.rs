use clap::Parser;
use generic_autologin::utils::logger;
use generic_autologin::{
    AccountParams, CliArgs, Configuration, CreateParams, OperationArg, Provider, ProviderError,
    ReqwestTransport,
};
use std::collections::HashMap;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting autologin CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let configuration = match Configuration::from_file(&args.config) {
        Ok(configuration) => configuration,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let transport = ReqwestTransport::new(configuration.debug);
    let provider = Provider::new(configuration, transport);

    let extra: HashMap<String, serde_json::Value> = args
        .extra
        .iter()
        .cloned()
        .map(|(key, value)| (key, serde_json::Value::String(value)))
        .collect();

    let account = AccountParams {
        username: args.username.clone(),
        customer_id: args.customer_id.clone(),
        service_identifier: args.service_identifier.clone(),
        package_identifier: args.package_identifier.clone(),
        extra: extra.clone(),
    };

    let outcome = match args.operation {
        OperationArg::Login => provider
            .login(&account)
            .await
            .and_then(|r| Ok(serde_json::to_value(r)?)),
        OperationArg::Create => {
            let email = match args.email {
                Some(email) => email,
                None => {
                    eprintln!("❌ --email is required for the create operation");
                    std::process::exit(2);
                }
            };
            let params = CreateParams {
                email,
                username: (!args.username.is_empty()).then(|| args.username.clone()),
                customer_id: args.customer_id,
                service_identifier: args.service_identifier,
                package_identifier: args.package_identifier,
                extra,
            };
            provider
                .create(&params)
                .await
                .and_then(|r| Ok(serde_json::to_value(r)?))
        }
        OperationArg::Suspend => provider
            .suspend(&account)
            .await
            .and_then(|r| Ok(serde_json::to_value(r)?)),
        OperationArg::Unsuspend => provider
            .unsuspend(&account)
            .await
            .and_then(|r| Ok(serde_json::to_value(r)?)),
        OperationArg::Terminate => provider
            .terminate(&account)
            .await
            .and_then(|r| Ok(serde_json::to_value(r)?)),
    };

    match outcome {
        Ok(result) => {
            tracing::info!("Operation completed successfully");
            println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
        }
        Err(e) => {
            tracing::error!("Operation failed: {}", e);
            eprintln!("❌ {}", e);

            let exit_code = match e {
                ProviderError::ConfigError { .. }
                | ProviderError::InvalidConfigValueError { .. }
                | ProviderError::MissingConfigError { .. } => 2,
                ProviderError::TransportError(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
