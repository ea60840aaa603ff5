use serde::{Deserialize, Serialize};

use crate::models::timestamp::Timestamp;

/// Represents an account holder in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user, assigned by the backend.
    pub id: String,

    /// The user's email address.
    pub email: String,

    /// When the account was created, if the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    /// When the account was last updated, if the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_minimal_payload() {
        let user: User = serde_json::from_str(r#"{"id":"1","email":"a@b.com"}"#).unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(user.email, "a@b.com");
        assert!(user.created_at.is_none());
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn test_user_equality() {
        let user1 = User {
            id: "7".to_string(),
            email: "same@example.com".to_string(),
            created_at: None,
            updated_at: None,
        };
        let user2 = user1.clone();

        assert_eq!(user1, user2);
    }

    #[test]
    fn test_user_serialization_omits_absent_timestamps() {
        let user = User {
            id: "1".to_string(),
            email: "a@b.com".to_string(),
            created_at: None,
            updated_at: None,
        };
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("created_at"));
        assert!(!json.contains("updated_at"));
    }
}
