//! Telegram Bot API Data Transfer Objects
//!
//! Only the fields the relay reads or sends. Unknown fields are ignored.
//!
//! API Reference: https://core.telegram.org/bots/api

use serde::{Deserialize, Serialize};

/// Envelope of every Bot API response
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i32>,
}

/// An incoming update
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    /// Absent for update kinds other than new messages
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub from: Option<User>,
    /// Absent for stickers, photos and the like
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

/// Body of `getUpdates`
#[derive(Debug, Clone, Serialize)]
pub struct GetUpdatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// Long-poll timeout in seconds
    pub timeout: u64,
    pub allowed_updates: Vec<&'static str>,
}

/// Body of `sendMessage`
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_text_update() {
        let json = r#"{
            "ok": true,
            "result": [{
                "update_id": 10,
                "message": {
                    "message_id": 3,
                    "date": 1700000000,
                    "chat": {"id": -42, "type": "private"},
                    "from": {"id": 7, "is_bot": false, "first_name": "A", "username": "someone"},
                    "text": "https://music.apple.com/ru/album/some-album/111?i=222&ls"
                }
            }]
        }"#;

        let response: ApiResponse<Vec<Update>> =
            serde_json::from_str(json).expect("Should parse updates");

        assert!(response.ok);
        let updates = response.result.unwrap();
        assert_eq!(updates[0].update_id, 10);
        let message = updates[0].message.as_ref().unwrap();
        assert_eq!(message.chat.id, -42);
        assert_eq!(message.from.as_ref().unwrap().username.as_deref(), Some("someone"));
        assert!(message.text.as_deref().unwrap().starts_with("https://"));
    }

    #[test]
    fn test_parse_non_message_update() {
        let json = r#"{"ok": true, "result": [{"update_id": 11, "edited_message": {}}]}"#;

        let response: ApiResponse<Vec<Update>> =
            serde_json::from_str(json).expect("Should parse update");

        assert!(response.result.unwrap()[0].message.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#;

        let response: ApiResponse<Vec<Update>> =
            serde_json::from_str(json).expect("Should parse error");

        assert!(!response.ok);
        assert!(response.result.is_none());
        assert_eq!(response.error_code, Some(401));
        assert_eq!(response.description.as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn test_serialize_send_message() {
        let request = SendMessageRequest {
            chat_id: 5,
            text: "hi",
            reply_to_message_id: None,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json, serde_json::json!({"chat_id": 5, "text": "hi"}));
    }

    #[test]
    fn test_serialize_get_updates() {
        let request = GetUpdatesRequest {
            offset: Some(12),
            timeout: 30,
            allowed_updates: vec!["message"],
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"offset": 12, "timeout": 30, "allowed_updates": ["message"]})
        );
    }
}
