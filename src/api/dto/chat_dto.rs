//! 聊天 DTO

use serde::{Deserialize, Serialize};

use crate::models::conversation::ConversationMessage;
use crate::security::validation::{
    RequestValidator, Sanitizable, Validatable, ValidationResult, validators,
};
use crate::services::chat::{ChatReply, ChatSource};

/// 聊天请求
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ChatMessageRequest {
    /// 会话 ID，缺省时由服务端生成
    pub session_id: Option<String>,
    /// 用户输入
    pub message: String,
    /// 前端保存的对话历史
    pub history: Vec<ConversationMessage>,
}

impl Validatable for ChatMessageRequest {
    fn validate(&self) -> ValidationResult<()> {
        validators::validate_chat_message(&self.message)?;
        validators::validate_history_len(self.history.len())?;
        if let Some(session_id) = &self.session_id {
            validators::validate_identifier("session_id", session_id)?;
        }
        Ok(())
    }
}

impl Sanitizable for ChatMessageRequest {
    fn sanitize(&mut self) {
        self.message = RequestValidator::sanitize_string(&self.message);
        if let Some(session_id) = self.session_id.as_mut() {
            *session_id = RequestValidator::sanitize_string(session_id);
        }
    }
}

/// 聊天响应
#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub reply: String,
    pub follow_ups: Vec<String>,
    pub source: ChatSource,
    pub session_id: String,
}

impl ChatMessageResponse {
    pub fn new(reply: ChatReply, session_id: String) -> Self {
        Self {
            reply: reply.reply,
            follow_ups: reply.follow_ups,
            source: reply.source,
            session_id,
        }
    }
}

/// 欢迎语响应
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// 首页介绍响应
#[derive(Debug, Serialize)]
pub struct IntroResponse {
    pub intro: String,
    pub tagline: String,
}
