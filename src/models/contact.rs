//! 联系表单消息模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 访客通过联系表单提交的消息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// 指定的收件地址，缺省时使用配置的转发地址
    pub to_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
            to_email: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_recipient(mut self, to_email: Option<String>) -> Self {
        self.to_email = to_email.filter(|e| !e.trim().is_empty());
        self
    }
}
