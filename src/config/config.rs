use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 服务地址
    pub host: String,
    /// 服务端口
    pub port: u16,
    /// 请求超时（秒）
    pub request_timeout: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别（RUST_LOG 优先）
    pub level: String,
    /// 结构化（JSON）日志格式
    pub structured: bool,
    /// 日志文件目录，为空则只输出到标准输出
    pub log_dir: Option<PathBuf>,
    /// 日志文件名前缀
    pub file_prefix: String,
}

/// 聊天配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    /// 问答语料 JSON 文件，为空时使用内置语料
    pub corpus_path: Option<PathBuf>,
    /// 远程聊天后端地址，为空时不转发
    pub remote_backend_url: Option<String>,
    /// 远程后端请求超时（秒）
    pub remote_timeout_secs: u64,
    /// 是否启用项目介绍生成
    pub project_showcase: bool,
}

/// 简历文件配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResumeConfig {
    /// 简历 PDF 所在目录
    pub dir: PathBuf,
}

/// 屏幕偏好配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PreferenceConfig {
    /// 内存中最多保留的客户端数，超出后淘汰最早写入的客户端
    pub max_clients: usize,
}

/// 联系表单配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactConfig {
    /// 联系表单转发地址，为空时只记录日志
    pub endpoint: Option<String>,
    /// 转发请求超时（秒）
    pub timeout_secs: u64,
}

/// 安全配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SecurityConfig {
    /// CORS 允许的来源，包含 "*" 时放开全部
    pub cors_allowed_origins: Vec<String>,
    /// 最大请求体大小（字节）
    pub max_request_size: usize,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 聊天配置
    pub chat: ChatConfig,
    /// 简历配置
    pub resume: ResumeConfig,
    /// 屏幕偏好配置
    pub preferences: PreferenceConfig,
    /// 联系表单配置
    pub contact: ContactConfig,
    /// 安全配置
    pub security: SecurityConfig,
    /// 应用名称
    pub app_name: String,
    /// 环境
    pub environment: String,
}

impl AppConfig {
    /// 创建开发环境配置
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 8080,
                request_timeout: 30,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
                file_prefix: "folio.log".into(),
            },
            chat: ChatConfig {
                corpus_path: None,
                remote_backend_url: None,
                remote_timeout_secs: 15,
                project_showcase: true,
            },
            resume: ResumeConfig {
                dir: PathBuf::from("./public/resume"),
            },
            preferences: PreferenceConfig {
                max_clients: 10_000,
            },
            contact: ContactConfig {
                endpoint: None,
                timeout_secs: 10,
            },
            security: SecurityConfig {
                cors_allowed_origins: vec!["*".into()],
                max_request_size: 1024 * 1024,
            },
            app_name: "folio".into(),
            environment: "development".into(),
        }
    }

    /// 创建生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.server.host = "0.0.0.0".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config.logging.log_dir = Some(PathBuf::from("./logs"));
        config.security.cors_allowed_origins = Vec::new();
        config
    }
}
