//! 简历文件服务
//!
//! 只提供 `ResumeKind` 中登记的 PDF，请求名不在表中一律视为不存在。

use serde::Serialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::models::resume::{ResumeFile, ResumeKind};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// 可下载简历的摘要
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResumeSummary {
    pub kind: ResumeKind,
    pub file_name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone)]
pub struct ResumeService {
    dir: PathBuf,
}

impl ResumeService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 按文件名或版本标识读取简历
    pub async fn fetch(&self, name: &str) -> Result<ResumeFile> {
        let kind = ResumeKind::lookup(name)
            .ok_or_else(|| AppError::NotFound(format!("Resume not found: {}", name)))?;
        let path = self.dir.join(kind.file_name());

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Resume file missing: {}", path.display());
                return Err(AppError::NotFound(format!(
                    "Resume not found: {}",
                    kind.file_name()
                )));
            }
            Err(e) => return Err(e.into()),
        };
        debug!("Serving resume {} ({} bytes)", kind.file_name(), bytes.len());

        Ok(ResumeFile {
            kind,
            file_name: kind.file_name().to_string(),
            content_type: PDF_CONTENT_TYPE,
            bytes,
        })
    }

    /// 列出所有简历版本及文件是否存在
    pub async fn list(&self) -> Vec<ResumeSummary> {
        let mut summaries = Vec::with_capacity(ResumeKind::ALL.len());
        for kind in ResumeKind::ALL {
            let available = tokio::fs::try_exists(self.dir.join(kind.file_name()))
                .await
                .unwrap_or(false);
            summaries.push(ResumeSummary {
                kind,
                file_name: kind.file_name(),
                title: kind.title(),
                description: kind.description(),
                available,
            });
        }
        summaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_with_job_resume() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(ResumeKind::Job.file_name()),
            b"%PDF-1.4 job",
        )
        .unwrap();
        dir
    }

    #[tokio::test]
    async fn test_fetch_by_file_name_and_id() {
        let dir = dir_with_job_resume();
        let service = ResumeService::new(dir.path());

        let file = service
            .fetch("Saumik_Chakraborty_Job_Resume.pdf")
            .await
            .unwrap();
        assert_eq!(file.kind, ResumeKind::Job);
        assert_eq!(file.content_type, PDF_CONTENT_TYPE);
        assert_eq!(file.bytes, b"%PDF-1.4 job");

        let by_id = service.fetch("job").await.unwrap();
        assert_eq!(by_id.file_name, file.file_name);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = dir_with_job_resume();
        let service = ResumeService::new(dir.path());

        let err = service.fetch("freelance").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_names_are_not_found() {
        let dir = dir_with_job_resume();
        std::fs::write(dir.path().join("secret.txt"), b"nope").unwrap();
        let service = ResumeService::new(dir.path());

        for name in ["secret.txt", "../secret.txt", "", "JOB"] {
            let err = service.fetch(name).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)), "{name}");
        }
    }

    #[tokio::test]
    async fn test_list_reports_availability() {
        let dir = dir_with_job_resume();
        let service = ResumeService::new(dir.path());

        let list = service.list().await;
        assert_eq!(list.len(), 2);
        assert!(list[0].available);
        assert_eq!(list[0].title, "Job Application");
        assert!(!list[1].available);
    }
}
