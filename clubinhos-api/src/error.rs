use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum ClubinhosApiError {
    Api(StatusCode, ErrorDetail),
    Internal(ApiError),
    /// No response within the client's timeout
    Timeout(Duration),
}

impl ClubinhosApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api(status, _) => Some(*status),
            Self::Internal(_) | Self::Timeout(_) => None,
        }
    }

    /// The access token was missing, expired or rejected
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl From<ApiError> for ClubinhosApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                let detail = serde_json::from_str::<ErrorDetail>(&detail)
                    .unwrap_or_else(|_| ErrorDetail::from_text(status, detail.to_string()));
                ClubinhosApiError::Api(status, detail)
            }
            e => ClubinhosApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for ClubinhosApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClubinhosApiError::Internal(e) => write!(f, "Internal error: {}", e),
            ClubinhosApiError::Api(status, detail) => write!(f, "({}) {}", status, detail),
            ClubinhosApiError::Timeout(after) => {
                write!(f, "Request timed out after {}s", after.as_secs_f32())
            }
        }
    }
}

impl std::error::Error for ClubinhosApiError {}

/// Error body returned by the backend: `{"statusCode":401,"message":"Unauthorized"}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub status_code: Option<u16>,
    pub message: ErrorMessage,
    pub error: Option<String>,
}

impl ErrorDetail {
    pub fn from_text(status: StatusCode, text: impl Into<String>) -> Self {
        let text = text.into();
        let message = if text.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            text
        };
        Self {
            status_code: Some(status.as_u16()),
            message: ErrorMessage::Single(message),
            error: None,
        }
    }
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error {
            Some(error) => write!(f, "{}: {}", error, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Validation failures come back as a list of messages, everything else as one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(message) => f.write_str(message),
            Self::Many(messages) => f.write_str(&messages.join("; ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validation_error_body() {
        let body = r#"{"statusCode":400,"message":["email must be an email","password should not be empty"],"error":"Bad Request"}"#;
        let detail: ErrorDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.status_code, Some(400));
        assert_eq!(
            detail.to_string(),
            "Bad Request: email must be an email; password should not be empty"
        );
    }

    #[test]
    fn empty_body_falls_back_to_reason_phrase() {
        let detail = ErrorDetail::from_text(StatusCode::UNAUTHORIZED, "");
        assert_eq!(detail.message, ErrorMessage::Single("Unauthorized".to_string()));
    }

    #[test]
    fn unauthorized_is_detected_by_status() {
        let err = ClubinhosApiError::Api(
            StatusCode::UNAUTHORIZED,
            ErrorDetail::from_text(StatusCode::UNAUTHORIZED, "Unauthorized"),
        );
        assert!(err.is_unauthorized());

        let err = ClubinhosApiError::Api(
            StatusCode::NOT_FOUND,
            ErrorDetail::from_text(StatusCode::NOT_FOUND, "Not Found"),
        );
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "(404 Not Found) Not Found");
    }
}
