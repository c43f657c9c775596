use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OperationArg {
    Login,
    Create,
    Suspend,
    Unsuspend,
    Terminate,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "autologin")]
#[command(about = "Configuration-driven auto login client for bearer-token services")]
pub struct CliArgs {
    /// Which account operation to perform
    #[arg(value_enum)]
    pub operation: OperationArg,

    #[arg(long, default_value = "provider.toml")]
    pub config: String,

    #[arg(long, default_value = "")]
    pub username: String,

    /// Required for the create operation
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub customer_id: Option<String>,

    #[arg(long)]
    pub service_identifier: Option<String>,

    #[arg(long)]
    pub package_identifier: Option<String>,

    /// Extra key=value parameter forwarded to the endpoint, repeatable
    #[arg(long, value_parser = parse_key_value)]
    pub extra: Vec<(String, String)>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("Expected key=value, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("foo=bar").unwrap(),
            ("foo".to_string(), "bar".to_string())
        );
        assert_eq!(
            parse_key_value("foo=a=b").unwrap(),
            ("foo".to_string(), "a=b".to_string())
        );
        assert!(parse_key_value("foo").is_err());
        assert!(parse_key_value("=bar").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = CliArgs::parse_from([
            "autologin",
            "login",
            "--config",
            "service.toml",
            "--username",
            "adam",
            "--extra",
            "locale=en",
        ]);
        assert_eq!(args.operation, OperationArg::Login);
        assert_eq!(args.config, "service.toml");
        assert_eq!(args.extra, vec![("locale".to_string(), "en".to_string())]);
    }
}
