use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 消息发送方
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// 访客
    User,
    /// 应答机器人
    Bot,
}

/// 对话消息
///
/// 消息列表的生命周期归前端聊天窗口所有，这里只负责承载和转发。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ConversationMessage {
    pub fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_string(),
            timestamp: Some(Utc::now()),
            suggestions: Vec::new(),
        }
    }

    pub fn bot(content: &str, suggestions: Vec<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.to_string(),
            timestamp: Some(Utc::now()),
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = ConversationMessage {
            role: Role::Bot,
            content: "hi".into(),
            timestamp: None,
            suggestions: vec![],
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({"role": "bot", "content": "hi"}));
    }

    #[test]
    fn test_deserialize_minimal_history_item() {
        let msg: ConversationMessage =
            serde_json::from_str(r#"{"role": "user", "content": "Who are you?"}"#).unwrap();
        assert_eq!(msg.role, Role::User);
        assert!(msg.timestamp.is_none());
        assert!(msg.suggestions.is_empty());
    }
}
