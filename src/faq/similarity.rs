//! 词重叠相似度
//!
//! `|A ∩ B| / max(|A|, |B|)`，分母取两侧词集的较大者。

use std::collections::BTreeSet;

/// 按空白切分并转小写，去重后的词集
pub fn word_set(text: &str) -> BTreeSet<String> {
    text.split_whitespace().map(|w| w.to_lowercase()).collect()
}

/// 两段文本的词重叠相似度，取值范围 [0, 1]
///
/// 任一词集为空时返回 0。
pub fn word_overlap(a: &str, b: &str) -> f32 {
    let left = word_set(a);
    let right = word_set(b);
    overlap_of_sets(&left, &right)
}

pub(crate) fn overlap_of_sets(left: &BTreeSet<String>, right: &BTreeSet<String>) -> f32 {
    let denominator = left.len().max(right.len());
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let shared = left.intersection(right).count();
    shared as f32 / denominator as f32
}
