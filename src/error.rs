//! Client Errors
//!
//! Transport/server failures and client-side validation failures.

use serde_json::Value;
use thiserror::Error;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// The backend rejected the session (HTTP 401)
    #[error("authentication required")]
    Unauthorized,

    /// Any other non-success status
    #[error("server returned {status}")]
    Status { status: u16, message: Option<String> },

    /// The response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The call was superseded or cancelled before it settled
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Build a status error, lifting the server's message out of the body
    pub fn from_status(status: u16, body: &Value) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        ApiError::Status {
            status,
            message: server_message(body),
        }
    }

    /// Message safe to show to the user.
    ///
    /// Only text the server put in its error payload is passed through;
    /// everything else is replaced by `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

/// Pull `message`, `detail` or `error` out of an error payload
fn server_message(body: &Value) -> Option<String> {
    ["message", "detail", "error"]
        .iter()
        .filter_map(|key| body.get(*key))
        .find_map(|value| value.as_str())
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Client-side form validation failure; no request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
    },
}

impl ValidationError {
    /// Localized inline message
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingFields(_) => "필수 정보를 모두 입력해주세요.".to_string(),
            ValidationError::OutOfRange { min, max, .. } => {
                format!("평점은 {}에서 {} 사이여야 합니다.", min, max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message_is_preferred() {
        let err = ApiError::from_status(400, &json!({ "message": "이미 등록된 이메일입니다." }));
        assert_eq!(err.user_message("가입에 실패했습니다."), "이미 등록된 이메일입니다.");
    }

    #[test]
    fn test_detail_field_is_accepted() {
        let err = ApiError::from_status(422, &json!({ "detail": "invalid page" }));
        assert_eq!(
            err,
            ApiError::Status { status: 422, message: Some("invalid page".to_string()) }
        );
    }

    #[test]
    fn test_fallback_hides_transport_text() {
        let err = ApiError::Network("dns error: failed to lookup".to_string());
        assert_eq!(err.user_message("실패했습니다."), "실패했습니다.");

        let err = ApiError::from_status(500, &json!({ "message": "   " }));
        assert_eq!(err.user_message("실패했습니다."), "실패했습니다.");

        let err = ApiError::from_status(502, &Value::String("<html>".to_string()));
        assert_eq!(err.user_message("실패했습니다."), "실패했습니다.");
    }

    #[test]
    fn test_401_maps_to_unauthorized() {
        assert_eq!(ApiError::from_status(401, &Value::Null), ApiError::Unauthorized);
    }
}
