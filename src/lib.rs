//! Folio - 作品集后端服务
//!
//! 提供作品集档案的只读 API，以及一个先请求远程助手、失败时退回本地
//! 关键词应答的对话助手。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod security;
pub mod services;
pub mod storage;
