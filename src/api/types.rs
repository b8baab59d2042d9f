//! Wire types for the two backend endpoints.
//!
//! `POST /connect_db` takes the connection form verbatim; `POST /chat`
//! takes `{message}`. Both report failures as `{error: string}` with a
//! non-2xx status.

use serde::{Deserialize, Serialize};

/// Body for `POST /connect_db`. All fields travel as strings, including the
/// port; the backend builds its connection URI from them as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectParams {
    pub db_type: String,
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub db_name: String,
}

/// Body for `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatParams {
    pub message: String,
}

/// Success body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatReplyBody {
    pub response: String,
}

/// Failure body for both endpoints.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// The two failure kinds the UI distinguishes: server-reported errors are
/// shown verbatim, transport errors as a fixed generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx status with an `error` field (or a status fallback)
    Server(String),
    /// Request never completed, or the body was unreadable
    Transport(String),
}

/// Requests sent to the worker thread.
#[derive(Debug)]
pub enum ApiRequest {
    Connect { params: ConnectParams },
    Chat { seq: u64, message: String },
}

/// Replies sent back to the main thread.
#[derive(Debug)]
pub enum ApiReply {
    Connect {
        result: Result<(), ApiError>,
    },
    Chat {
        seq: u64,
        result: Result<String, ApiError>,
    },
}

/// Extract the server's error string from a failure body, falling back to
/// the HTTP status when the body has no usable `error` field.
pub fn server_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => ApiError::Server(parsed.error),
        Err(_) => ApiError::Server(format!("Server returned HTTP {}", status)),
    }
}

/// Extract the bot's response from a success body.
pub fn chat_response(body: &str) -> Result<String, ApiError> {
    serde_json::from_str::<ChatReplyBody>(body)
        .map(|parsed| parsed.response)
        .map_err(|e| ApiError::Transport(format!("Malformed chat response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_params_serialization() {
        let params = ConnectParams {
            db_type: "mysql".to_string(),
            host: "localhost".to_string(),
            port: "3306".to_string(),
            username: "root".to_string(),
            password: "secret".to_string(),
            db_name: "shop".to_string(),
        };

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["db_type"], "mysql");
        assert_eq!(json["port"], "3306");
        assert_eq!(json["db_name"], "shop");
    }

    #[test]
    fn test_chat_params_serialization() {
        let json = serde_json::to_value(ChatParams {
            message: "how many users?".to_string(),
        })
        .unwrap();
        assert_eq!(json["message"], "how many users?");
    }

    #[test]
    fn test_server_error_with_error_field() {
        let err = server_error(500, r#"{"error": "connection refused"}"#);
        assert_eq!(err, ApiError::Server("connection refused".to_string()));
    }

    #[test]
    fn test_server_error_without_error_field() {
        let err = server_error(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Server("Server returned HTTP 502".to_string()));
    }

    #[test]
    fn test_chat_response_success() {
        let response = chat_response(r#"{"response": "<b>42</b>"}"#).unwrap();
        assert_eq!(response, "<b>42</b>");
    }

    #[test]
    fn test_chat_response_ignores_extra_fields() {
        let response = chat_response(r#"{"response": "ok", "sql": "SELECT 1"}"#).unwrap();
        assert_eq!(response, "ok");
    }

    #[test]
    fn test_chat_response_malformed_is_transport_error() {
        let err = chat_response(r#"{"answer": "42"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
