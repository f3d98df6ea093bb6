//! 服务模块

pub mod assistant;
pub mod contact;
pub mod remote;
pub mod responder;

pub use assistant::{AssistantReply, AssistantService, FALLBACK_MODEL};
pub use contact::{ContactForm, ContactNotifier, ContactService, LogNotifier};
pub use remote::{
    DisabledRemote, HttpRemoteAssistant, RemoteAssistant, RemoteError, create_remote_assistant,
};
pub use responder::{Intent, classify, respond};
