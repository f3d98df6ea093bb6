//! 存储层模块
//!
//! 档案文件加载，以及对话历史和联系消息的内存仓储。

pub mod profile_loader;
pub mod repository;

pub use profile_loader::{ProfileFormat, ProfileLoader};
pub use repository::{
    ChatHistoryRepository, ContactRepository, InMemoryChatHistory, InMemoryContactInbox,
};
