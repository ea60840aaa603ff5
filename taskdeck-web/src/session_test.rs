//! Tests for session state transitions
//!
//! Validates the `Session` store shape, its transitions, and the generic
//! error messages surfaced to auth forms.

#[cfg(test)]
mod tests {
    use shared::models::user::User;

    use crate::cookie;
    use crate::session::{Session, SessionError};

    fn user() -> User {
        User {
            id: "user-1".to_string(),
            email: "user@example.com".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Tests that a fresh store reports loading until initialization runs
    #[test]
    fn test_default_session_is_loading() {
        let session = Session::default();

        assert!(session.is_loading);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.is_authenticated());
    }

    /// Tests the resolved signed-out state
    #[test]
    fn test_signed_out_session() {
        let session = Session::signed_out();

        assert!(!session.is_loading);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(!session.is_authenticated());
    }

    /// Tests the resolved signed-in state
    #[test]
    fn test_signed_in_session() {
        let session = Session::signed_in(user(), "token-abc".to_string());

        assert!(!session.is_loading);
        assert!(session.is_authenticated());
        assert_eq!(session.token.as_deref(), Some("token-abc"));
        assert_eq!(
            session.user.as_ref().map(|user| user.email.as_str()),
            Some("user@example.com")
        );
    }

    /// Tests that failures collapse into generic user-facing messages
    #[test]
    fn test_error_messages_are_generic() {
        assert_eq!(
            SessionError::InvalidCredentials.to_string(),
            "invalid email or password"
        );
        assert_eq!(SessionError::SignupFailed.to_string(), "signup failed");
    }

    /// Tests the persisted-token cookie contract
    #[test]
    fn test_token_cookie_contract() {
        assert_eq!(cookie::TOKEN_COOKIE, "token");
        assert_eq!(cookie::TOKEN_TTL_DAYS, 7);
    }

    /// Tests session equality, which yewdux uses to skip redundant renders
    #[test]
    fn test_session_equality() {
        assert_eq!(Session::signed_out(), Session::signed_out());
        assert_ne!(Session::signed_out(), Session::default());
        assert_eq!(
            Session::signed_in(user(), "t".to_string()),
            Session::signed_in(user(), "t".to_string())
        );
    }
}
