pub mod handlers;
pub mod provider;
pub mod request;
pub mod response;

pub use crate::domain::model::{
    AccountParams, AckResult, CreateParams, CreateResult, LoginResult, RawResponse, RequestSpec,
};
pub use crate::domain::ports::HttpTransport;
pub use crate::utils::error::Result;
