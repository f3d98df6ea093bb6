//! 对话消息模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// 单条对话消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

impl ConversationMessage {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// 应答来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// 远程助手
    Remote,
    /// 本地关键词应答
    Fallback,
}

/// 一问一答的历史记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    /// 会话内自增序号，从 1 开始
    pub id: u64,
    pub session_id: String,
    pub user_message: String,
    pub bot_response: String,
    pub source: ReplySource,
    pub timestamp: DateTime<Utc>,
}

impl ChatExchange {
    pub fn new(
        id: u64,
        session_id: &str,
        user_message: &str,
        bot_response: &str,
        source: ReplySource,
    ) -> Self {
        Self {
            id,
            session_id: session_id.to_string(),
            user_message: user_message.to_string(),
            bot_response: bot_response.to_string(),
            source,
            timestamp: Utc::now(),
        }
    }
}
