//! Error type of every HTTP call made by the front-end

use contracts::shared::validation::ValidationError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not authorized (HTTP {0}). Please sign in again.")]
    Unauthorized(u16),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Not signed in")]
    NotAuthenticated,
}

impl ApiError {
    /// Build the error for a non-success response
    pub fn from_status(status: u16, status_text: &str, body: &str) -> Self {
        if status == 401 || status == 403 {
            return ApiError::Unauthorized(status);
        }
        ApiError::Server {
            status,
            message: server_error_message(status, status_text, body),
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_) | ApiError::NotAuthenticated)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized(status) => Some(*status),
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Message shown for a failed response: `message`, then `error`, then the
/// raw body, then the status line.
pub fn server_error_message(status: u16, status_text: &str, body: &str) -> String {
    let body = body.trim();
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            match map.get(key) {
                Some(Value::String(text)) if !text.trim().is_empty() => {
                    return text.trim().to_string()
                }
                Some(Value::Object(inner)) => {
                    if let Some(Value::String(text)) = inner.get("message") {
                        if !text.trim().is_empty() {
                            return text.trim().to_string();
                        }
                    }
                }
                _ => {}
            }
        }
    }
    if !body.is_empty() && !body.starts_with('<') {
        return body.to_string();
    }
    if status_text.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {} {}", status, status_text.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_precedence() {
        assert_eq!(
            server_error_message(400, "Bad Request", r#"{"message":"SKU taken","error":"x"}"#),
            "SKU taken"
        );
        assert_eq!(
            server_error_message(400, "Bad Request", r#"{"error":"Invalid quantity"}"#),
            "Invalid quantity"
        );
        assert_eq!(
            server_error_message(400, "Bad Request", r#"{"error":{"message":"nested"}}"#),
            "nested"
        );
        assert_eq!(server_error_message(500, "", "database down"), "database down");
        assert_eq!(
            server_error_message(502, "Bad Gateway", "<html>oops</html>"),
            "HTTP 502 Bad Gateway"
        );
        assert_eq!(server_error_message(404, "", ""), "HTTP 404");
    }

    #[test]
    fn test_auth_statuses() {
        assert_eq!(ApiError::from_status(401, "", ""), ApiError::Unauthorized(401));
        assert!(ApiError::from_status(403, "Forbidden", "").is_auth_failure());
        let err = ApiError::from_status(422, "", r#"{"message":"Reason required"}"#);
        assert!(!err.is_auth_failure());
        assert_eq!(err.to_string(), "Reason required");
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_validation_error_displays_message() {
        let err: ApiError = ValidationError::new("reason", "Reason is required").into();
        assert_eq!(err.to_string(), "Reason is required");
        assert!(!err.is_auth_failure());
    }
}
