use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The user's free-text message.
    pub message: String,

    /// Identifier of the running conversation; absent for the first turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Response of `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The assistant's reply.
    pub response: String,

    /// Conversation identifier to send with the next turn.
    pub conversation_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_turn_omits_conversation_id() {
        let request = ChatRequest {
            message: "hello".to_string(),
            conversation_id: None,
        };
        let json = serde_json::to_string(&request).unwrap();

        assert_eq!(json, r#"{"message":"hello"}"#);
    }

    #[test]
    fn test_follow_up_turn_carries_conversation_id() {
        let request = ChatRequest {
            message: "and then?".to_string(),
            conversation_id: Some("conv-9".to_string()),
        };
        let json = serde_json::to_string(&request).unwrap();

        assert!(json.contains(r#""conversation_id":"conv-9""#));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"response":"Sure.","conversation_id":"conv-9"}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.response, "Sure.");
        assert_eq!(response.conversation_id, "conv-9");
    }
}
