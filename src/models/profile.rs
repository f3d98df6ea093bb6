//! 作品集档案数据模型
//!
//! 描述作品集所有者的个人信息、教育、经历、项目、技能和证书。
//! 档案在启动时加载一次，之后只读共享。

use serde::{Deserialize, Deserializer, Serialize};

/// 作品集档案
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileRecord {
    /// 个人信息
    pub personal: PersonalInfo,
    /// 教育背景（按存储顺序）
    pub education: Vec<Education>,
    /// 工作/实习经历
    pub experience: Vec<Experience>,
    /// 项目
    pub projects: Vec<Project>,
    /// 技能分类
    pub skills: Vec<SkillCategory>,
    /// 证书
    pub certifications: Vec<Certification>,
    /// 页面导航
    pub navigation: Vec<NavItem>,
}

/// 个人信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// 多段简介，段落之间以换行分隔
    pub bio: String,
    pub email: String,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(
        rename = "resumePDF",
        alias = "resumePdf",
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub resume_pdf: Option<String>,
    pub social_links: SocialLinks,
}

impl PersonalInfo {
    /// 简介的第一行（到第一个换行符为止）
    pub fn bio_first_line(&self) -> &str {
        self.bio.split('\n').next().unwrap_or_default()
    }
}

/// 社交链接，每一项都可能缺失
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub leetcode: Option<String>,
}

/// 教育经历
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_year: u16,
    pub end_year: u16,
    pub grade: String,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 工作或实习经历
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// 是否为当前职位
    pub current: bool,
    pub description: String,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Experience {
    /// 结束时间标签：当前职位为 `Present`，否则为记录的结束日期
    pub fn end_label(&self) -> Option<&str> {
        if self.current {
            Some("Present")
        } else {
            self.end_date.as_deref()
        }
    }

    /// 任职区间，例如 `June 2025 – Present`
    pub fn period(&self) -> String {
        match self.end_label() {
            Some(end) => format!("{} – {}", self.start_date, end),
            None => self.start_date.clone(),
        }
    }
}

/// 项目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub live_demo_url: Option<String>,
    pub featured: bool,
    /// 展示用的日期标签
    pub date: String,
}

/// 技能分类
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<SkillItem>,
}

/// 单项技能
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub percentage: Proficiency,
}

/// 熟练度百分比，取值范围 [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Proficiency(u8);

impl Proficiency {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Proficiency {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("percentage must be within 0..=100, got {}", value))
    }
}

impl From<Proficiency> for u8 {
    fn from(p: Proficiency) -> u8 {
        p.0
    }
}

/// 证书
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date_issued: String,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 导航项
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

impl ProfileRecord {
    /// 所有分类下的技能名称，按存储顺序展开
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .flat_map(|category| category.items.iter().map(|item| item.name.as_str()))
    }

    /// 按毕业年份倒序排列的教育经历
    pub fn education_by_recency(&self) -> Vec<&Education> {
        let mut entries: Vec<&Education> = self.education.iter().collect();
        entries.sort_by(|a, b| b.end_year.cmp(&a.end_year));
        entries
    }

    /// 按 featured 标志过滤项目；`None` 返回全部
    pub fn projects_filtered(&self, featured: Option<bool>) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| featured.is_none_or(|f| p.featured == f))
            .collect()
    }
}

/// 空字符串视为缺失
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
