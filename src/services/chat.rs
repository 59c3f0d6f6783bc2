//! 聊天服务
//!
//! 处理顺序：FAQ 命中 → 项目关键词介绍 → 远程后端 → FAQ 兜底。
//! 远程后端失败不会让请求失败，而是返回固定的“服务不可用”提示。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::faq::{FaqReply, FaqResponder, ReplySource};
use crate::models::conversation::ConversationMessage;
use crate::observability::AppMetrics;
use crate::services::remote::{ChatBackend, RemoteChatRequest};
use crate::services::showcase::{generate_welcome_message, is_project_query, project_blurb};

pub const UNAVAILABLE_MESSAGE: &str = "I'm having trouble connecting right now. The backend chat service might be down, so try again shortly.";
pub const EMPTY_REMOTE_REPLY: &str = "I'm sorry, I didn't fully understand that. Try rephrasing.";

/// 聊天请求
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    #[serde(default)]
    pub history: Vec<ConversationMessage>,
}

/// 回复来源
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatSource {
    Faq,
    ProjectShowcase,
    Remote,
    Fallback,
    Unavailable,
}

/// 聊天回复
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub reply: String,
    pub follow_ups: Vec<String>,
    pub source: ChatSource,
}

impl ChatReply {
    fn from_faq(faq: FaqReply) -> Self {
        let source = if faq.is_fallback() {
            ChatSource::Fallback
        } else {
            ChatSource::Faq
        };
        Self {
            reply: faq.answer,
            follow_ups: faq.follow_ups,
            source,
        }
    }
}

/// 聊天服务 trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// 对一条用户消息生成回复
    async fn reply(&self, request: ChatRequest) -> Result<ChatReply>;

    /// 聊天窗口打开时的欢迎语
    fn welcome(&self) -> String;

    /// 底层 FAQ 应答器
    fn responder(&self) -> &FaqResponder;
}

/// 聊天服务实现
pub struct ChatServiceImpl {
    responder: Arc<FaqResponder>,
    backend: Option<Box<dyn ChatBackend>>,
    project_showcase: bool,
    metrics: Arc<AppMetrics>,
}

impl ChatServiceImpl {
    pub fn new(responder: Arc<FaqResponder>, backend: Option<Box<dyn ChatBackend>>) -> Self {
        Self {
            responder,
            backend,
            project_showcase: true,
            metrics: Arc::new(AppMetrics::default()),
        }
    }

    pub fn with_project_showcase(mut self, enabled: bool) -> Self {
        self.project_showcase = enabled;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<AppMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    async fn forward(&self, backend: &dyn ChatBackend, request: &ChatRequest) -> ChatReply {
        let remote_request = RemoteChatRequest {
            session_id: request.session_id.clone(),
            message: request.message.clone(),
            history: request.history.iter().map(Into::into).collect(),
        };

        match backend.send(&remote_request).await {
            Ok(response) => {
                let reply = response
                    .reply
                    .filter(|r| !r.trim().is_empty())
                    .unwrap_or_else(|| EMPTY_REMOTE_REPLY.to_string());
                ChatReply {
                    reply,
                    follow_ups: Vec::new(),
                    source: ChatSource::Remote,
                }
            }
            Err(e) => {
                warn!(session_id = %request.session_id, error = %e, "chat backend unavailable");
                self.metrics.record_backend_failure();
                ChatReply {
                    reply: UNAVAILABLE_MESSAGE.to_string(),
                    follow_ups: self.responder.fallback().follow_ups().to_vec(),
                    source: ChatSource::Unavailable,
                }
            }
        }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn reply(&self, request: ChatRequest) -> Result<ChatReply> {
        debug!(
            session_id = %request.session_id,
            history = request.history.len(),
            "chat message received"
        );

        let faq = self.responder.respond(&request.message);
        self.metrics.record_faq(faq.source);

        if faq.source != ReplySource::Fallback {
            return Ok(ChatReply::from_faq(faq));
        }

        if self.project_showcase && is_project_query(&request.message) {
            let blurb = project_blurb(&mut rand::thread_rng());
            return Ok(ChatReply {
                reply: blurb,
                follow_ups: Vec::new(),
                source: ChatSource::ProjectShowcase,
            });
        }

        if let Some(backend) = self.backend.as_deref() {
            if !request.message.trim().is_empty() {
                return Ok(self.forward(backend, &request).await);
            }
        }

        Ok(ChatReply::from_faq(faq))
    }

    fn welcome(&self) -> String {
        generate_welcome_message(&mut rand::thread_rng())
    }

    fn responder(&self) -> &FaqResponder {
        &self.responder
    }
}

/// 创建聊天服务
pub fn create_chat_service(
    responder: Arc<FaqResponder>,
    backend: Option<Box<dyn ChatBackend>>,
    project_showcase: bool,
    metrics: Arc<AppMetrics>,
) -> Box<dyn ChatService> {
    info!(
        remote_backend = backend.is_some(),
        project_showcase, "Chat service configured"
    );
    Box::new(
        ChatServiceImpl::new(responder, backend)
            .with_project_showcase(project_showcase)
            .with_metrics(metrics),
    )
}
