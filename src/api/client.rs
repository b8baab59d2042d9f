//! Async HTTP client for the backend API.
//!
//! Uses reqwest; runs on the worker thread's current-thread runtime. Each
//! call is fire-and-forget from the UI's perspective: no retry, no timeout
//! beyond reqwest's defaults, no cancellation.

use reqwest::Client;

use super::types::{self, ApiError, ChatParams, ConnectParams};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /connect_db`. Success carries no data the UI needs beyond the
    /// 2xx status itself.
    pub async fn connect_db(&self, params: &ConnectParams) -> Result<(), ApiError> {
        let url = format!("{}/connect_db", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(params)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Err(types::server_error(status.as_u16(), &body))
    }

    /// `POST /chat`. Success body is `{response}`, HTML-bearing.
    pub async fn chat(&self, message: &str) -> Result<String, ApiError> {
        let url = format!("{}/chat", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&ChatParams {
                message: message.to_string(),
            })
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if status.is_success() {
            types::chat_response(&body)
        } else {
            Err(types::server_error(status.as_u16(), &body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:5879/");
        assert_eq!(client.base_url(), "http://127.0.0.1:5879");
    }

    #[test]
    fn test_base_url_kept_verbatim_otherwise() {
        let client = ApiClient::new("https://db.example.com:8080");
        assert_eq!(client.base_url(), "https://db.example.com:8080");
    }
}
