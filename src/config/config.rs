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
    /// 允许任意来源跨域访问
    pub cors_allow_any: bool,
}

/// 助手配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssistantConfig {
    /// 远程助手地址，未配置时直接使用本地应答
    pub remote_url: Option<String>,
    /// 远程调用超时（秒）
    pub remote_timeout_secs: u64,
    /// 助手名称，用于开场白
    pub assistant_name: String,
    /// 远程应答的模型标签
    pub model_label: String,
}

/// 档案数据配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileConfig {
    /// 档案文件路径（JSON 或 YAML）
    pub path: PathBuf,
    /// 简历 PDF 路径
    pub resume_path: PathBuf,
}

/// 联系表单配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContactConfig {
    /// 收件箱保留的最大消息数
    pub inbox_capacity: usize,
    /// 默认转发地址
    pub forward_to: Option<String>,
}

/// 对话历史配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ChatConfig {
    /// 内存中保留的最大会话数，超出时淘汰最久未活动的会话
    pub max_sessions: usize,
    /// 每个会话保留的最大问答条数，超出时丢弃最早的记录
    pub max_entries_per_session: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: String,
    /// 结构化日志格式
    pub structured: bool,
    /// 日志文件目录
    pub log_dir: Option<PathBuf>,
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// 服务器配置
    pub server: ServerConfig,
    /// 助手配置
    pub assistant: AssistantConfig,
    /// 档案数据配置
    pub profile: ProfileConfig,
    /// 联系表单配置
    pub contact: ContactConfig,
    /// 对话历史配置
    pub chat: ChatConfig,
    /// 日志配置
    pub logging: LoggingConfig,
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
                host: "0.0.0.0".into(),
                port: 8000,
                request_timeout: 30,
                cors_allow_any: true,
            },
            assistant: AssistantConfig {
                remote_url: None,
                remote_timeout_secs: 5,
                assistant_name: "Luffy".into(),
                model_label: "remote".into(),
            },
            profile: ProfileConfig {
                path: PathBuf::from("data/profile.yaml"),
                resume_path: PathBuf::from("data/resume.pdf"),
            },
            contact: ContactConfig {
                inbox_capacity: 500,
                forward_to: None,
            },
            chat: ChatConfig {
                max_sessions: 1_000,
                max_entries_per_session: 100,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
                log_dir: None,
            },
            app_name: "folio".into(),
            environment: "development".into(),
        }
    }
}
