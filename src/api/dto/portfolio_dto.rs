//! 作品集 DTO

use serde::Deserialize;

/// 项目列表查询参数
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProjectsQuery {
    /// 仅返回 featured（或非 featured）项目
    pub featured: Option<bool>,
}
