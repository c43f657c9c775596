pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliArgs, OperationArg};

pub use adapters::ReqwestTransport;
pub use config::{Configuration, EndpointConfig, HttpMethod};
pub use core::provider::{About, Provider};
pub use domain::model::{
    AccountParams, AckResult, CreateParams, CreateResult, LoginResult, RawResponse, RequestSpec,
};
pub use domain::ports::HttpTransport;
pub use utils::error::{ProviderError, Result};
