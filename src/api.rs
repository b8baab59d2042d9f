pub mod client;
pub mod types;
pub mod worker;

pub use client::ApiClient;
pub use types::{ApiError, ApiReply, ApiRequest, ConnectParams};
