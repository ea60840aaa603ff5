//! Tests for the API client functionality
//!
//! Validates endpoint URL construction and the request/response models the
//! client sends over the wire.

#[cfg(test)]
mod tests {
    use crate::api::TaskDeckClient;
    use shared::models::auth::SignInRequest;
    use shared::models::chat::ChatRequest;
    use shared::models::task::{SortKey, SortOrder, StatusFilter, TaskQuery};

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let client = TaskDeckClient::new("http://localhost:8000");
        assert_eq!(client.api_url("chat"), "http://localhost:8000/api/chat");
    }

    /// Tests that a trailing slash on the base URL is normalized away
    #[test]
    fn test_base_url_trailing_slash() {
        let client = TaskDeckClient::new("http://localhost:8000/");
        assert_eq!(
            client.api_url("auth/session"),
            "http://localhost:8000/api/auth/session"
        );
    }

    /// Tests auth endpoint URLs
    #[test]
    fn test_auth_endpoints() {
        let client = TaskDeckClient::new("http://localhost:8000");

        assert_eq!(
            client.api_url("auth/signin"),
            "http://localhost:8000/api/auth/signin"
        );
        assert_eq!(
            client.api_url("auth/signup"),
            "http://localhost:8000/api/auth/signup"
        );
        assert_eq!(
            client.api_url("auth/signout"),
            "http://localhost:8000/api/auth/signout"
        );
        assert_eq!(
            client.api_url("auth/session"),
            "http://localhost:8000/api/auth/session"
        );
    }

    /// Tests task endpoint URLs
    #[test]
    fn test_task_endpoints() {
        let client = TaskDeckClient::new("http://localhost:8000");
        let user_id = "user-1";
        let task_id = "task-42";

        assert_eq!(
            client.api_url(&format!("{user_id}/tasks")),
            "http://localhost:8000/api/user-1/tasks"
        );
        assert_eq!(
            client.api_url(&format!("{user_id}/tasks/{task_id}")),
            "http://localhost:8000/api/user-1/tasks/task-42"
        );
        assert_eq!(
            client.api_url(&format!("{user_id}/tasks/{task_id}/complete")),
            "http://localhost:8000/api/user-1/tasks/task-42/complete"
        );
    }

    /// Tests that the default query adds no parameters
    #[test]
    fn test_default_query_is_bare() {
        let query = TaskQuery::default();

        assert!(query.query_pairs().is_empty());
    }

    /// Tests the query-string spellings sent to the backend
    #[test]
    fn test_query_pair_spellings() {
        let query = TaskQuery {
            status: StatusFilter::Pending,
            sort: Some(SortKey::Title),
            order: Some(SortOrder::Asc),
            ..TaskQuery::default()
        };

        assert_eq!(
            query.query_pairs(),
            vec![
                ("status", "pending".to_string()),
                ("sort", "title".to_string()),
                ("order", "asc".to_string()),
            ]
        );
    }

    /// Tests the sign-in request body shape
    #[test]
    fn test_signin_request_body() {
        let request = SignInRequest {
            email: "user@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(
            json,
            r#"{"email":"user@example.com","password":"hunter2"}"#
        );
    }

    /// Tests that a fresh conversation omits the conversation id
    #[test]
    fn test_chat_request_omits_missing_conversation() {
        let request = ChatRequest {
            message: "hello".to_string(),
            conversation_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"message":"hello"}"#);
    }

    /// Tests that follow-up turns carry the conversation id
    #[test]
    fn test_chat_request_threads_conversation() {
        let request = ChatRequest {
            message: "and then?".to_string(),
            conversation_id: Some("conv-1".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(
            json,
            r#"{"message":"and then?","conversation_id":"conv-1"}"#
        );
    }
}
