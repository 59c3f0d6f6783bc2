//! FAQ DTO

use serde::{Deserialize, Serialize};

use crate::faq::{CorpusEntry, FaqReply, ReplySource};

/// FAQ 匹配请求
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FaqMatchRequest {
    pub query: String,
}

/// FAQ 匹配响应
#[derive(Debug, Serialize)]
pub struct FaqMatchResponse {
    pub answer: String,
    pub follow_ups: Vec<String>,
    pub source: ReplySource,
    pub score: f32,
}

impl From<FaqReply> for FaqMatchResponse {
    fn from(reply: FaqReply) -> Self {
        Self {
            answer: reply.answer,
            follow_ups: reply.follow_ups,
            source: reply.source,
            score: reply.score,
        }
    }
}

/// 语料列表响应
#[derive(Debug, Serialize)]
pub struct FaqEntriesResponse {
    pub entries: Vec<CorpusEntry>,
    pub total: usize,
}
