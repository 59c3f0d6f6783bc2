//! 问答语料
//!
//! 语料在启动时加载一次并完成校验，此后只读，可通过 `Arc` 在任意数量的
//! 调用方之间共享。

use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

const BUILTIN_CORPUS: &str = include_str!("builtin.json");

/// 语料加载/校验错误
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("entry #{index} has no question")]
    MissingQuestion { index: usize },

    #[error("entry #{index} has an empty question at position {position}")]
    EmptyQuestion { index: usize, position: usize },

    #[error("entry #{index} has an empty answer")]
    EmptyAnswer { index: usize },

    #[error("failed to read corpus file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("fallback set needs at least one reply")]
    EmptyFallback,

    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 单条问答记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// 触发短语，按顺序匹配，大小写不敏感
    #[serde(alias = "question", deserialize_with = "one_or_many")]
    pub questions: Vec<String>,
    /// 命中时原样返回的回答
    pub answer: String,
    /// 额外的可匹配关键词
    #[serde(default)]
    pub tags: Vec<String>,
    /// 建议的后续问题
    #[serde(default, alias = "followUp", alias = "followUps")]
    pub follow_ups: Vec<String>,
}

impl CorpusEntry {
    pub fn new<Q, S>(questions: Q, answer: &str) -> Self
    where
        Q: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            questions: questions.into_iter().map(Into::into).collect(),
            answer: answer.to_string(),
            tags: Vec::new(),
            follow_ups: Vec::new(),
        }
    }

    pub fn with_tags<T, S>(mut self, tags: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_follow_ups<T, S>(mut self, follow_ups: T) -> Self
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.follow_ups = follow_ups.into_iter().map(Into::into).collect();
        self
    }

    fn validate(&self, index: usize) -> Result<(), CorpusError> {
        if self.questions.is_empty() {
            return Err(CorpusError::MissingQuestion { index });
        }
        if let Some(position) = self.questions.iter().position(|q| q.trim().is_empty()) {
            return Err(CorpusError::EmptyQuestion { index, position });
        }
        if self.answer.trim().is_empty() {
            return Err(CorpusError::EmptyAnswer { index });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(q) => vec![q],
        OneOrMany::Many(qs) => qs,
    })
}

/// 经过校验的只读语料
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Arc<[CorpusEntry]>,
}

impl Corpus {
    /// 校验并构建语料，任一条目不合法则整体拒绝
    pub fn new(entries: Vec<CorpusEntry>) -> Result<Self, CorpusError> {
        for (index, entry) in entries.iter().enumerate() {
            entry.validate(index)?;
        }
        Ok(Self {
            entries: entries.into(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// 随站点发布的作品集问答表
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::from_json_str(BUILTIN_CORPUS)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CorpusError> {
        let entries: Vec<CorpusEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// 从 JSON 文件加载（顶层为条目数组）
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CorpusEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
