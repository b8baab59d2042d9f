use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbchatError {
    #[error("Invalid server URL '{0}'. Expected http:// or https://")]
    InvalidServerUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
