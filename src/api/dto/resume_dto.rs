//! 简历 DTO

use serde::{Deserialize, Serialize};

use crate::services::resume::ResumeSummary;

/// 下载参数，`view=true` 时内联展示
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ResumeQuery {
    pub view: bool,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeSummary>,
}
