//! 对话 DTO
//!
//! 定义对话相关的请求和响应数据结构。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::message::ChatExchange;

/// 发送消息请求
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// 访客的问题
    pub message: String,
    /// 会话 ID，缺省时由服务端生成
    #[serde(default)]
    pub session_id: Option<String>,
}

/// 发送消息响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub sources: Vec<String>,
    pub session_id: String,
    pub model: Option<String>,
}

/// 历史记录条目
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub id: u64,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ChatExchange> for ChatHistoryResponse {
    fn from(exchange: ChatExchange) -> Self {
        Self {
            id: exchange.id,
            user_message: exchange.user_message,
            bot_response: exchange.bot_response,
            timestamp: exchange.timestamp,
        }
    }
}

/// 反馈类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Positive,
    Negative,
}

/// 反馈请求
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub session_id: String,
    pub message_id: u64,
    pub feedback: Feedback,
    #[serde(default)]
    pub comment: Option<String>,
}

/// 通用状态响应
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }
}
