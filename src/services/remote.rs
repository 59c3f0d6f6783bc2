//! 远程聊天后端
//!
//! 请求 `{ session_id, message, history }`，响应 `{ reply }`。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::conversation::{ConversationMessage, Role};

/// 转发给后端的历史消息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryItem {
    pub role: Role,
    pub content: String,
}

impl From<&ConversationMessage> for HistoryItem {
    fn from(msg: &ConversationMessage) -> Self {
        Self {
            role: msg.role,
            content: msg.content.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteChatRequest {
    pub session_id: String,
    pub message: String,
    pub history: Vec<HistoryItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RemoteChatResponse {
    #[serde(default)]
    pub reply: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, request: &RemoteChatRequest) -> Result<RemoteChatResponse>;
}

/// 基于 HTTP 的聊天后端客户端
pub struct HttpChatBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatBackend {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, request: &RemoteChatRequest) -> Result<RemoteChatResponse> {
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::Connection(format!(
                "chat backend returned {}: {}",
                status, error_text
            )));
        }

        Ok(response.json().await?)
    }
}

/// 按配置创建聊天后端，未配置地址时返回 None
pub fn create_chat_backend(
    base_url: Option<&str>,
    timeout_secs: u64,
) -> Result<Option<Box<dyn ChatBackend>>> {
    match base_url {
        Some(url) if !url.trim().is_empty() => {
            let backend = HttpChatBackend::new(url, timeout_secs)?;
            Ok(Some(Box::new(backend)))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> RemoteChatRequest {
        RemoteChatRequest {
            session_id: "abc123".into(),
            message: "what is rust".into(),
            history: vec![HistoryItem {
                role: Role::Bot,
                content: "Hi!".into(),
            }],
        }
    }

    #[tokio::test]
    async fn test_http_backend_posts_contract() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(body_json(serde_json::json!({
                "session_id": "abc123",
                "message": "what is rust",
                "history": [{"role": "bot", "content": "Hi!"}]
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"reply": "A language."})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpChatBackend::new(&format!("{}/", server.uri()), 5).unwrap();
        let response = backend.send(&request()).await.unwrap();
        assert_eq!(response.reply.as_deref(), Some("A language."));
    }

    #[tokio::test]
    async fn test_http_backend_maps_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let backend = HttpChatBackend::new(&server.uri(), 5).unwrap();
        let err = backend.send(&request()).await.unwrap_err();
        assert!(matches!(err, AppError::Connection(_)));
    }

    #[tokio::test]
    async fn test_missing_reply_field_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let backend = HttpChatBackend::new(&server.uri(), 5).unwrap();
        let response = backend.send(&request()).await.unwrap();
        assert!(response.reply.is_none());
    }

    #[test]
    fn test_create_chat_backend_optional() {
        assert!(create_chat_backend(None, 5).unwrap().is_none());
        assert!(create_chat_backend(Some("  "), 5).unwrap().is_none());
        assert!(create_chat_backend(Some("http://localhost:1"), 5).unwrap().is_some());
    }
}
