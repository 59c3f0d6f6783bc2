use serde::{Deserialize, Serialize};

/// 简历版本
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResumeKind {
    /// 求职版
    Job,
    /// 自由职业版
    Freelance,
}

impl ResumeKind {
    pub const ALL: [ResumeKind; 2] = [ResumeKind::Job, ResumeKind::Freelance];

    pub fn file_name(&self) -> &'static str {
        match self {
            ResumeKind::Job => "Saumik_Chakraborty_Job_Resume.pdf",
            ResumeKind::Freelance => "Saumik_Chakraborty_Freelance_Resume.pdf",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResumeKind::Job => "Job Application",
            ResumeKind::Freelance => "Freelance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResumeKind::Job => "Optimized for job applications",
            ResumeKind::Freelance => "Project-based experience",
        }
    }

    /// 按文件名或版本标识（`job` / `freelance`）查找
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.file_name() == name || kind_id(kind) == name)
    }
}

fn kind_id(kind: &ResumeKind) -> &'static str {
    match kind {
        ResumeKind::Job => "job",
        ResumeKind::Freelance => "freelance",
    }
}

/// 读取到的简历文件
#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub kind: ResumeKind,
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}
