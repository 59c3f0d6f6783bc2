//! 兜底回复

use rand::Rng;
use serde::Serialize;

use crate::faq::corpus::CorpusError;

const DEFAULT_REPLIES: [&str; 4] = [
    "I'm not sure how to respond to that. Could you try rephrasing your question?",
    "Sorry, I didn't quite catch that. Try asking about my skills, projects, or experience.",
    "Hmm, I don't have an answer for that yet. Maybe ask about the technologies I work with?",
    "I'm afraid I don't understand. Could you ask that in a different way?",
];

const DEFAULT_FOLLOW_UPS: [&str; 3] = [
    "What technologies do you work with?",
    "Tell me about your experience",
    "What projects have you built?",
];

/// 兜底回复集合：若干道歉文案加一组固定的通用后续问题
#[derive(Debug, Clone, Serialize)]
pub struct FallbackSet {
    replies: Vec<String>,
    follow_ups: Vec<String>,
}

impl Default for FallbackSet {
    fn default() -> Self {
        Self {
            replies: DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect(),
            follow_ups: DEFAULT_FOLLOW_UPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FallbackSet {
    /// 自定义兜底集合，至少需要一条回复
    pub fn new(replies: Vec<String>, follow_ups: Vec<String>) -> Result<Self, CorpusError> {
        if replies.iter().all(|r| r.trim().is_empty()) {
            return Err(CorpusError::EmptyFallback);
        }
        Ok(Self {
            replies: replies.into_iter().filter(|r| !r.trim().is_empty()).collect(),
            follow_ups,
        })
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    pub fn follow_ups(&self) -> &[String] {
        &self.follow_ups
    }

    /// 按下标取回复，下标对回复数量取模
    pub fn pick(&self, index: usize) -> &str {
        &self.replies[index % self.replies.len()]
    }

    /// 用注入的随机源均匀选取一条回复
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.pick(rng.gen_range(0..self.replies.len()))
    }
}
