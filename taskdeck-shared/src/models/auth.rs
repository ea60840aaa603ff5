use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Body of `POST /api/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Body of `POST /api/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    /// Email address for the new account.
    pub email: String,
    /// Password for the new account.
    pub password: String,
}

/// Response of the sign-in and sign-up endpoints.
///
/// Both fields are optional on purpose: a backend may accept a signup yet
/// omit the token, and the session store treats any missing half as a
/// failed authentication rather than panicking on a malformed body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// The authenticated user, when the backend returned one.
    #[serde(default)]
    pub user: Option<User>,
    /// The opaque bearer token backing the session.
    #[serde(default)]
    pub access_token: Option<String>,
}

impl AuthResponse {
    /// The user/token pair, only when the response carries both.
    #[must_use]
    pub fn credentials(self) -> Option<(User, String)> {
        match (self.user, self.access_token) {
            (Some(user), Some(token)) => Some((user, token)),
            _ => None,
        }
    }
}

/// Response of `GET /api/auth/session`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    /// The user the presented token resolves to, if still valid.
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_auth_response_with_both_halves() {
        let response = AuthResponse {
            user: Some(user()),
            access_token: Some("tok-123".to_string()),
        };

        let (user, token) = response.credentials().unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(token, "tok-123");
    }

    #[test]
    fn test_auth_response_missing_token_is_not_credentials() {
        let response = AuthResponse {
            user: Some(user()),
            access_token: None,
        };

        assert!(response.credentials().is_none());
    }

    #[test]
    fn test_auth_response_missing_user_is_not_credentials() {
        let response = AuthResponse {
            user: None,
            access_token: Some("tok-123".to_string()),
        };

        assert!(response.credentials().is_none());
    }

    #[test]
    fn test_auth_response_deserializes_sparse_body() {
        let response: AuthResponse = serde_json::from_str("{}").unwrap();

        assert!(response.user.is_none());
        assert!(response.access_token.is_none());
    }

    #[test]
    fn test_session_response_deserializes_user() {
        let json = r#"{"user":{"id":"1","email":"a@b.com"}}"#;
        let response: SessionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.user.unwrap().email, "a@b.com");
    }

    #[test]
    fn test_sign_in_request_serialization() {
        let request = SignInRequest {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"email":"a@b.com","password":"secret"}"#);
    }
}
