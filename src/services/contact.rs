//! 联系表单服务
//!
//! 校验访客提交的表单，保存到收件箱，并在后台交给通知器转发。

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::models::contact::ContactMessage;
use crate::security::validation::{
    Validatable, ValidationResult, sanitize_string, validate_email, validate_required,
};
use crate::storage::repository::ContactRepository;

const MAX_NAME_LEN: usize = 100;
const MAX_SUBJECT_LEN: usize = 200;
const MAX_MESSAGE_LEN: usize = 5_000;

/// 联系表单
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub to_email: Option<String>,
}

impl Validatable for ContactForm {
    fn validate(&self) -> ValidationResult<()> {
        validate_required("name", &self.name, MAX_NAME_LEN)?;
        validate_required("email", &self.email, MAX_NAME_LEN)?;
        validate_email("email", &self.email)?;
        validate_required("subject", &self.subject, MAX_SUBJECT_LEN)?;
        validate_required("message", &self.message, MAX_MESSAGE_LEN)?;
        if let Some(to) = self.to_email.as_deref().filter(|t| !t.trim().is_empty()) {
            validate_email("to_email", to)?;
        }
        Ok(())
    }
}

/// 联系消息通知器 trait
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// 转发一条联系消息
    async fn notify(&self, message: &ContactMessage, recipient: Option<&str>) -> Result<()>;
}

/// 把消息写入日志的通知器
pub struct LogNotifier;

#[async_trait]
impl ContactNotifier for LogNotifier {
    async fn notify(&self, message: &ContactMessage, recipient: Option<&str>) -> Result<()> {
        info!(
            id = %message.id,
            to = recipient.unwrap_or("Admin"),
            from = %message.email,
            subject = %message.subject,
            "New portfolio contact message from {}: {}",
            message.name,
            message.message
        );
        Ok(())
    }
}

/// 联系表单服务
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
    notifier: Arc<dyn ContactNotifier>,
    forward_to: Option<String>,
}

impl ContactService {
    pub fn new(
        repository: Arc<dyn ContactRepository>,
        notifier: Arc<dyn ContactNotifier>,
        forward_to: Option<String>,
    ) -> Self {
        Self {
            repository,
            notifier,
            forward_to,
        }
    }

    /// 提交表单：校验、保存、后台转发
    pub async fn submit(&self, form: ContactForm) -> Result<ContactMessage> {
        form.validate()?;

        let message = ContactMessage::new(
            &sanitize_string(&form.name),
            &form.email,
            &sanitize_string(&form.subject),
            &sanitize_string(&form.message),
        )
        .with_recipient(form.to_email);

        let stored = self.repository.create(&message).await?;

        let recipient = stored.to_email.clone().or_else(|| self.forward_to.clone());
        if recipient.is_none() {
            warn!("No contact recipient configured, message is only logged");
        }

        let notifier = self.notifier.clone();
        let outgoing = stored.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&outgoing, recipient.as_deref()).await {
                error!("Failed to forward contact message {}: {}", outgoing.id, e);
            }
        });

        Ok(stored)
    }

    /// 收件箱中的消息数
    pub async fn count(&self) -> Result<u64> {
        self.repository.count().await
    }
}
