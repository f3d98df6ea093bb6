use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use std::path::{Path, PathBuf};

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 合并顺序：
    /// 1. 开发环境默认值
    /// 2. ./config.yaml
    /// 3. `FOLIO_` 前缀的环境变量（`__` 分隔嵌套字段）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("FOLIO_").split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.server.request_timeout == 0 {
            return Err(ConfigValidationError::InvalidRequestTimeout);
        }

        if config.assistant.remote_timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidRemoteTimeout);
        }

        // 远程调用必须先于请求超时结束，本地应答才来得及返回
        if config.assistant.remote_timeout_secs >= config.server.request_timeout {
            return Err(ConfigValidationError::RemoteTimeoutTooLong {
                remote: config.assistant.remote_timeout_secs,
                request: config.server.request_timeout,
            });
        }

        if config.chat.max_sessions == 0 || config.chat.max_entries_per_session == 0 {
            return Err(ConfigValidationError::InvalidChatLimits);
        }

        if let Some(url) = &config.assistant.remote_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigValidationError::InvalidRemoteUrl(url.clone()));
            }
        }

        if config.profile.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::InvalidPath(
                "profile.path".to_string(),
            ));
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("请求超时无效，必须大于 0 秒")]
    InvalidRequestTimeout,

    #[error("远程助手超时无效，必须大于 0 秒")]
    InvalidRemoteTimeout,

    #[error("远程助手超时 ({remote}s) 必须小于请求超时 ({request}s)")]
    RemoteTimeoutTooLong { remote: u64, request: u64 },

    #[error("对话历史上限无效，必须大于 0")]
    InvalidChatLimits,

    #[error("远程助手地址无效: {0}")]
    InvalidRemoteUrl(String),

    #[error("配置路径无效: {0}")]
    InvalidPath(String),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.yaml")
}
