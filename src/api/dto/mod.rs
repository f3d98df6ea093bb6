//! DTO 模块
//!
//! 定义 API 请求和响应的数据传输对象。

pub mod chat_dto;
pub mod portfolio_dto;

pub use chat_dto::*;
pub use portfolio_dto::*;
