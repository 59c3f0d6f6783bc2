use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 环境变量前缀，嵌套字段用 `__` 分隔，如 `FOLIO_SERVER__PORT`
pub const ENV_PREFIX: &str = "FOLIO_";

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序（后者覆盖前者）：
    /// 1. 开发环境默认值
    /// 2. ./folio.toml
    /// 3. 环境变量
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: PathBuf) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.resume.dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::MissingResumeDir);
        }

        if config.preferences.max_clients == 0 {
            return Err(ConfigValidationError::InvalidPreferenceLimit);
        }

        if config.security.max_request_size == 0 {
            return Err(ConfigValidationError::InvalidBodyLimit);
        }

        if let Some(url) = &config.chat.remote_backend_url {
            if !is_http_url(url) {
                return Err(ConfigValidationError::InvalidUrl(url.clone()));
            }
        }

        if let Some(url) = &config.contact.endpoint {
            if !is_http_url(url) {
                return Err(ConfigValidationError::InvalidUrl(url.clone()));
            }
        }

        if let Some(path) = &config.chat.corpus_path {
            if !path.exists() {
                return Err(ConfigValidationError::InvalidPath(
                    path.display().to_string(),
                ));
            }
        }

        Ok(())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("简历目录未配置")]
    MissingResumeDir,

    #[error("偏好存储的客户端上限必须大于 0")]
    InvalidPreferenceLimit,

    #[error("最大请求体大小必须大于 0")]
    InvalidBodyLimit,

    #[error("地址必须以 http:// 或 https:// 开头: {0}")]
    InvalidUrl(String),

    #[error("配置路径无效: {0}")]
    InvalidPath(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("folio.toml")
}

/// 检查配置文件是否存在
pub fn config_exists() -> bool {
    default_config_path().exists()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        figment::Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_from(PathBuf::from("missing.toml"))?;
            assert_eq!(config.server.port, 8080);
            assert_eq!(config.app_name, "folio");
            assert!(config.chat.remote_backend_url.is_none());
            assert_eq!(config.preferences.max_clients, 10_000);
            Ok(())
        });
    }

    #[test]
    fn test_file_and_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "folio.toml",
                r#"
                    environment = "staging"

                    [server]
                    port = 9000

                    [chat]
                    remote_backend_url = "http://localhost:5000"
                "#,
            )?;
            jail.set_env("FOLIO_SERVER__PORT", "9100");

            let config = ConfigLoader::load()?;
            assert_eq!(config.environment, "staging");
            assert_eq!(config.server.port, 9100);
            assert_eq!(
                config.chat.remote_backend_url.as_deref(),
                Some("http://localhost:5000")
            );
            // untouched sections keep development defaults
            assert_eq!(config.chat.remote_timeout_secs, 15);
            Ok(())
        });
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::development();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.server.port = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPort)
        ));

        let mut config = AppConfig::development();
        config.preferences.max_clients = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPreferenceLimit)
        ));

        let mut config = AppConfig::development();
        config.security.max_request_size = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidBodyLimit)
        ));

        let mut config = AppConfig::development();
        config.contact.endpoint = Some("ftp://example.com".into());
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidUrl(_))
        ));

        let mut config = AppConfig::development();
        config.chat.corpus_path = Some(PathBuf::from("/no/such/corpus.json"));
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_production_preset() {
        let config = AppConfig::production();
        assert_eq!(config.environment, "production");
        assert!(config.logging.structured);
        assert!(config.security.cors_allowed_origins.is_empty());
    }
}
