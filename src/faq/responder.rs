//! FAQ 应答器
//!
//! 对一次用户输入选出唯一的回答：
//!
//! 1. 规范化：去除首尾空白并转小写，空输入直接走兜底
//! 2. 精确匹配：按语料顺序、条目内按问题顺序比较，首个相等者立即返回
//! 3. 模糊匹配：条目得分为其所有问题与标签词重叠度的最大值，同分取靠前者
//! 4. 阈值：最高分严格大于 [`MATCH_THRESHOLD`] 才采用
//! 5. 兜底：随机道歉文案 + 通用后续问题
//!
//! 应答器本身无状态、无 I/O，可在任意多个会话间并发共享。

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::faq::corpus::{Corpus, CorpusEntry};
use crate::faq::fallback::FallbackSet;
use crate::faq::similarity::{overlap_of_sets, word_set};

/// 模糊匹配采用阈值（严格大于）
pub const MATCH_THRESHOLD: f32 = 0.3;

/// 回复来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    Exact,
    Fuzzy,
    Fallback,
}

/// 单次查询的匹配结果
#[derive(Debug, Clone, Copy)]
pub struct MatchResult<'a> {
    /// 被选中的条目；没有条目超过阈值时为 None
    pub entry: Option<&'a CorpusEntry>,
    /// 最高相似度，范围 [0, 1]
    pub score: f32,
    pub source: ReplySource,
}

impl MatchResult<'_> {
    fn unmatched(score: f32) -> Self {
        Self {
            entry: None,
            score,
            source: ReplySource::Fallback,
        }
    }
}

/// 应答结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqReply {
    pub answer: String,
    pub follow_ups: Vec<String>,
    pub source: ReplySource,
    pub score: f32,
}

impl FaqReply {
    pub fn is_fallback(&self) -> bool {
        self.source == ReplySource::Fallback
    }
}

#[derive(Debug, Clone, Default)]
pub struct FaqResponder {
    corpus: Corpus,
    fallback: FallbackSet,
}

impl FaqResponder {
    pub fn new(corpus: Corpus, fallback: FallbackSet) -> Self {
        Self { corpus, fallback }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn fallback(&self) -> &FallbackSet {
        &self.fallback
    }

    /// 执行规范化、精确匹配与模糊匹配，不做兜底
    pub fn best_match(&self, query: &str) -> MatchResult<'_> {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return MatchResult::unmatched(0.0);
        }

        if let Some(entry) = self.exact_match(&normalized) {
            return MatchResult {
                entry: Some(entry),
                score: 1.0,
                source: ReplySource::Exact,
            };
        }

        match self.fuzzy_best(&normalized) {
            Some((entry, score)) if score > MATCH_THRESHOLD => MatchResult {
                entry: Some(entry),
                score,
                source: ReplySource::Fuzzy,
            },
            Some((_, score)) => MatchResult::unmatched(score),
            None => MatchResult::unmatched(0.0),
        }
    }

    /// 使用线程本地随机源应答
    pub fn respond(&self, query: &str) -> FaqReply {
        self.respond_with(query, &mut rand::thread_rng())
    }

    /// 使用注入的随机源应答，随机性只影响兜底文案的选择
    pub fn respond_with<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> FaqReply {
        let matched = self.best_match(query);

        match matched.entry {
            Some(entry) => {
                debug!(
                    source = ?matched.source,
                    score = matched.score,
                    "faq entry selected"
                );
                FaqReply {
                    answer: entry.answer.clone(),
                    follow_ups: entry.follow_ups.clone(),
                    source: matched.source,
                    score: matched.score,
                }
            }
            None => {
                debug!(best_score = matched.score, "no faq entry above threshold");
                FaqReply {
                    answer: self.fallback.pick_with(rng).to_string(),
                    follow_ups: self.fallback.follow_ups().to_vec(),
                    source: ReplySource::Fallback,
                    score: matched.score,
                }
            }
        }
    }

    fn exact_match(&self, normalized: &str) -> Option<&CorpusEntry> {
        self.corpus
            .entries()
            .iter()
            .find(|entry| entry.questions.iter().any(|q| q.to_lowercase() == normalized))
    }

    fn fuzzy_best(&self, normalized: &str) -> Option<(&CorpusEntry, f32)> {
        let query_words = word_set(normalized);
        let mut best: Option<(&CorpusEntry, f32)> = None;

        for entry in self.corpus.entries() {
            let score = entry
                .questions
                .iter()
                .chain(entry.tags.iter())
                .map(|surface| overlap_of_sets(&query_words, &word_set(surface)))
                .fold(0.0_f32, f32::max);

            // 严格大于：同分保留先出现的条目
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((entry, score));
            }
        }

        best
    }
}

fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}
