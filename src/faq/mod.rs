//! FAQ 问答模块
//!
//! 基于静态问答表的规则式应答：精确匹配优先，其次是词重叠模糊匹配，
//! 都不满足时随机返回兜底文案。

pub mod corpus;
pub mod fallback;
pub mod responder;
pub mod similarity;

pub use corpus::{Corpus, CorpusEntry, CorpusError};
pub use fallback::FallbackSet;
pub use responder::{FaqReply, FaqResponder, MATCH_THRESHOLD, MatchResult, ReplySource};
pub use similarity::{word_overlap, word_set};

use std::path::Path;
use tracing::info;

/// 创建 FAQ 应答器
///
/// 指定了语料路径时从文件加载，否则使用内置语料。
pub fn create_faq_responder(corpus_path: Option<&Path>) -> Result<FaqResponder, CorpusError> {
    let corpus = match corpus_path {
        Some(path) => {
            info!("Loading FAQ corpus from {}", path.display());
            Corpus::load(path)?
        }
        None => Corpus::builtin()?,
    };
    info!("FAQ corpus ready with {} entries", corpus.len());

    Ok(FaqResponder::new(corpus, FallbackSet::default()))
}
