use std::path::PathBuf;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::profile::ProfileRecord;
use crate::observability::AppMetrics;
use crate::services::assistant::AssistantService;
use crate::services::contact::{ContactNotifier, ContactService, LogNotifier};
use crate::services::remote::{DisabledRemote, RemoteAssistant};
use crate::storage::repository::{
    ChatHistoryRepository, ContactRepository, InMemoryChatHistory, InMemoryContactInbox,
};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only portfolio profile
    pub profile: Arc<ProfileRecord>,
    /// Assistant with remote delegation and local fallback
    pub assistant: Arc<AssistantService>,
    /// Chat history per session
    pub chat_history: Arc<dyn ChatHistoryRepository>,
    /// Contact form intake
    pub contact_service: Arc<ContactService>,
    /// Request and reply counters
    pub metrics: Arc<AppMetrics>,
    /// Resume PDF served by the download endpoint
    pub resume_path: PathBuf,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("profile", &self.profile.personal.name)
            .field("assistant", &"Arc<AssistantService>")
            .field("chat_history", &"Arc<dyn ChatHistoryRepository>")
            .field("contact_service", &"Arc<ContactService>")
            .field("resume_path", &self.resume_path)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        config: &AppConfig,
        profile: Arc<ProfileRecord>,
        remote: Box<dyn RemoteAssistant>,
        chat_history: Arc<dyn ChatHistoryRepository>,
        contact_repository: Arc<dyn ContactRepository>,
        notifier: Arc<dyn ContactNotifier>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        let assistant = AssistantService::new(
            profile.clone(),
            remote,
            &config.assistant.assistant_name,
            &config.assistant.model_label,
        );
        let contact_service = ContactService::new(
            contact_repository,
            notifier,
            config.contact.forward_to.clone(),
        );

        Self {
            profile,
            assistant: Arc::new(assistant),
            chat_history,
            contact_service: Arc::new(contact_service),
            metrics,
            resume_path: config.profile.resume_path.clone(),
        }
    }

    /// Create development application state with in-memory stores and the given remote
    pub fn development(profile: Arc<ProfileRecord>, remote: Box<dyn RemoteAssistant>) -> Self {
        let config = AppConfig::development();
        Self::new(
            &config,
            profile,
            remote,
            Arc::new(InMemoryChatHistory::from_config(&config.chat)),
            Arc::new(InMemoryContactInbox::new(config.contact.inbox_capacity)),
            Arc::new(LogNotifier),
            Arc::new(AppMetrics::default()),
        )
    }

    /// Development state that always answers locally
    pub fn offline(profile: Arc<ProfileRecord>) -> Self {
        Self::development(profile, Box::new(DisabledRemote))
    }
}
