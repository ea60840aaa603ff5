use serde::{Deserialize, Serialize};

/// Error body the backend attaches to rejected requests.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// The main error message.
    pub message: String,
    /// Optional additional details about the error.
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response with just a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: None,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.details {
            Some(details) => write!(f, "{}: {}", self.message, details),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_display() {
        let plain = ErrorResponse::new("task not found");
        assert_eq!(plain.to_string(), "task not found");

        let detailed = ErrorResponse {
            message: "validation failed".to_string(),
            details: Some("title must not be empty".to_string()),
        };
        assert_eq!(
            detailed.to_string(),
            "validation failed: title must not be empty"
        );
    }

    #[test]
    fn test_error_response_deserialization() {
        let error: ErrorResponse = serde_json::from_str(r#"{"message":"nope"}"#).unwrap();

        assert_eq!(error.message, "nope");
        assert!(error.details.is_none());
    }
}
