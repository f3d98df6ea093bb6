//! 档案数据加载
//!
//! 从 JSON 或 YAML 文件读取 [`ProfileRecord`]，启动时调用一次。

use figment::{
    Figment,
    providers::{Format, Json, Yaml},
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::profile::ProfileRecord;

/// 档案文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Yaml,
}

impl ProfileFormat {
    /// 根据扩展名推断格式
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            other => Err(AppError::Profile(format!(
                "unsupported profile file extension: {:?}",
                other
            ))),
        }
    }
}

/// 档案加载器
pub struct ProfileLoader;

impl ProfileLoader {
    /// 从文件加载档案
    pub fn load(path: impl AsRef<Path>) -> Result<Arc<ProfileRecord>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::Profile(format!(
                "profile file not found: {}",
                path.display()
            )));
        }

        let figment = match ProfileFormat::from_path(path)? {
            ProfileFormat::Json => Figment::from(Json::file(path)),
            ProfileFormat::Yaml => Figment::from(Yaml::file(path)),
        };
        let record = Self::extract(figment)?;

        info!(
            "Loaded profile for {} from {}: {} projects, {} experience entries, {} skills",
            record.personal.name,
            path.display(),
            record.projects.len(),
            record.experience.len(),
            record.skill_names().count()
        );

        Ok(Arc::new(record))
    }

    /// 从字符串解析档案
    pub fn parse(content: &str, format: ProfileFormat) -> Result<ProfileRecord> {
        let figment = match format {
            ProfileFormat::Json => Figment::from(Json::string(content)),
            ProfileFormat::Yaml => Figment::from(Yaml::string(content)),
        };
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<ProfileRecord> {
        figment
            .extract::<ProfileRecord>()
            .map_err(|e| AppError::Profile(e.to_string()))
    }
}
