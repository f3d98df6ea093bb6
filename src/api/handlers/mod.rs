//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod chat_handler;
pub mod contact_handler;
pub mod portfolio_handler;

pub use chat_handler::*;
pub use contact_handler::*;
pub use portfolio_handler::*;
