//! 核心数据模型模块
//!
//! 定义作品集档案、对话消息和联系表单消息。

pub mod contact;
pub mod message;
pub mod profile;

pub use contact::*;
pub use message::*;
pub use profile::*;
