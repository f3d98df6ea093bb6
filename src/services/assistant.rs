//! 助手服务
//!
//! 两阶段应答：先请求远程助手，出现任何 [`RemoteError`] 时记录原因并改用
//! 本地意图应答。本地应答不会失败，因此 [`AssistantService::reply`] 总有结果。

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::message::{ConversationMessage, ReplySource};
use crate::models::profile::ProfileRecord;
use crate::services::remote::{RemoteAssistant, RemoteError};
use crate::services::responder;

/// 本地应答的模型标签
pub const FALLBACK_MODEL: &str = "fallback";

/// 助手应答
#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub response: String,
    pub source: ReplySource,
    pub model: String,
}

/// 助手服务
pub struct AssistantService {
    profile: Arc<ProfileRecord>,
    remote: Box<dyn RemoteAssistant>,
    assistant_name: String,
    model_label: String,
}

impl AssistantService {
    pub fn new(
        profile: Arc<ProfileRecord>,
        remote: Box<dyn RemoteAssistant>,
        assistant_name: &str,
        model_label: &str,
    ) -> Self {
        Self {
            profile,
            remote,
            assistant_name: assistant_name.to_string(),
            model_label: model_label.to_string(),
        }
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// 回答访客的问题
    pub async fn reply(&self, message: &str, session_id: &str) -> AssistantReply {
        match self.remote.ask(message, session_id).await {
            Ok(response) => AssistantReply {
                response,
                source: ReplySource::Remote,
                model: self.model_label.clone(),
            },
            Err(err) => {
                match &err {
                    RemoteError::Disabled => debug!("Remote assistant disabled, answering locally"),
                    _ => warn!(session_id, error = %err, "Remote assistant failed, falling back to local responder"),
                }
                self.local_reply(message)
            }
        }
    }

    /// 仅使用本地意图应答
    pub fn local_reply(&self, message: &str) -> AssistantReply {
        AssistantReply {
            response: responder::respond(message, &self.profile),
            source: ReplySource::Fallback,
            model: FALLBACK_MODEL.to_string(),
        }
    }

    /// 对话开场白
    pub fn greeting(&self) -> ConversationMessage {
        ConversationMessage::assistant(format!(
            "Hi there! I'm {}, an AI assistant for {}'s portfolio. \
             I can answer questions about their background, projects, skills, and experience. \
             What would you like to know?",
            self.assistant_name, self.profile.personal.name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::Role;
    use crate::models::profile::PersonalInfo;
    use crate::services::remote::MockRemoteAssistant;
    use std::time::Duration;

    fn profile() -> Arc<ProfileRecord> {
        Arc::new(ProfileRecord {
            personal: PersonalInfo {
                name: "Ada".into(),
                title: "Engineer".into(),
                location: "London".into(),
                bio: "Analyst.\nPoet.".into(),
                email: "ada@example.com".into(),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_remote_success_is_used() {
        let mut remote = MockRemoteAssistant::new();
        remote
            .expect_ask()
            .withf(|message, session_id| message == "who are you" && session_id == "s1")
            .times(1)
            .returning(|_, _| Ok("I am the remote".to_string()));

        let service = AssistantService::new(profile(), Box::new(remote), "Luffy", "gemini");
        let reply = service.reply("who are you", "s1").await;

        assert_eq!(reply.response, "I am the remote");
        assert_eq!(reply.source, ReplySource::Remote);
        assert_eq!(reply.model, "gemini");
    }

    #[tokio::test]
    async fn test_every_failure_falls_back() {
        let failures = [
            RemoteError::Disabled,
            RemoteError::Timeout(Duration::from_secs(5)),
            RemoteError::Transport("connection refused".into()),
            RemoteError::Status(500),
            RemoteError::Malformed("missing field `response`".into()),
        ];

        for failure in failures {
            let mut remote = MockRemoteAssistant::new();
            remote.expect_ask().return_once(move |_, _| Err(failure));

            let service = AssistantService::new(profile(), Box::new(remote), "Luffy", "gemini");
            let reply = service.reply("who are you", "s1").await;

            assert_eq!(reply.source, ReplySource::Fallback);
            assert_eq!(reply.model, FALLBACK_MODEL);
            assert_eq!(reply.response, "Ada is a Engineer based in London. Analyst.");
        }
    }

    #[test]
    fn test_greeting_mentions_owner() {
        let service = AssistantService::new(
            profile(),
            Box::new(MockRemoteAssistant::new()),
            "Luffy",
            "gemini",
        );
        let greeting = service.greeting();
        assert_eq!(greeting.role, Role::Assistant);
        assert!(greeting.content.starts_with("Hi there! I'm Luffy"));
        assert!(greeting.content.contains("Ada's portfolio"));
    }
}
