//! 本地意图应答
//!
//! 远程助手不可用时的兜底应答。查询先转为小写，再按固定优先级逐条检查
//! 关键词规则，第一条命中的规则负责生成回答；全部未命中时返回话题菜单。
//!
//! 优先级即冲突裁决：`"tell me about your work experience"` 同时包含
//! Projects 的 `work` 和 Experience 的 `experience`，结果为 Projects。

use serde::Serialize;

use crate::models::profile::ProfileRecord;

/// 查询意图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Skills,
    Projects,
    Experience,
    Education,
    Certifications,
    Contact,
    About,
    Default,
}

/// 一条意图规则：关键词任一子串命中即触发
struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
    render: fn(&ProfileRecord) -> String,
}

impl IntentRule {
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|keyword| query.contains(keyword))
    }
}

/// 按优先级排列的规则表
static RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Skills,
        keywords: &["skill", "technology", "tech stack", "know"],
        render: render_skills,
    },
    IntentRule {
        intent: Intent::Projects,
        keywords: &["project", "work", "built", "portfolio"],
        render: render_projects,
    },
    IntentRule {
        intent: Intent::Experience,
        keywords: &["experience", "internship", "job", "company"],
        render: render_experience,
    },
    IntentRule {
        intent: Intent::Education,
        keywords: &["education", "degree", "study", "college", "university"],
        render: render_education,
    },
    IntentRule {
        intent: Intent::Certifications,
        keywords: &["certification", "certificate", "certified"],
        render: render_certifications,
    },
    IntentRule {
        intent: Intent::Contact,
        keywords: &["contact", "email", "reach", "hire"],
        render: render_contact,
    },
    IntentRule {
        intent: Intent::About,
        keywords: &["about", "who", "tell me about", "introduction"],
        render: render_about,
    },
];

/// 最多展示的项目数
const MAX_PROJECTS: usize = 3;

impl Intent {
    /// 触发该意图的关键词；`Default` 没有关键词
    pub fn keywords(self) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|rule| rule.intent == self)
            .map(|rule| rule.keywords)
            .unwrap_or(&[])
    }

    /// 按优先级排列的全部关键词意图
    pub fn ordered() -> impl Iterator<Item = Intent> {
        RULES.iter().map(|rule| rule.intent)
    }
}

/// 对查询进行意图分类
pub fn classify(query: &str) -> Intent {
    let query = query.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&query))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::Default)
}

/// 根据档案数据生成回答
///
/// 纯函数：不修改档案，相同输入得到相同输出，任何输入都返回非空字符串。
pub fn respond(query: &str, profile: &ProfileRecord) -> String {
    let query = query.to_lowercase();
    match RULES.iter().find(|rule| rule.matches(&query)) {
        Some(rule) => (rule.render)(profile),
        None => render_menu(profile),
    }
}

fn render_skills(profile: &ProfileRecord) -> String {
    let all_skills = profile.skill_names().collect::<Vec<_>>().join(", ");
    format!(
        "{} is proficient in a wide range of technologies including: {}. \
         Their strongest areas include frontend development with React.js and \
         backend development with Node.js and FastAPI.",
        profile.personal.name, all_skills
    )
}

fn render_projects(profile: &ProfileRecord) -> String {
    let project_list = profile
        .projects
        .iter()
        .take(MAX_PROJECTS)
        .map(|p| format!("**{}**: {}", p.title, p.description))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "Here are some of {}'s notable projects:\n\n{}\n\n\
         You can find more details and links to live demos in the Projects section above!",
        profile.personal.name, project_list
    )
}

fn render_experience(profile: &ProfileRecord) -> String {
    if profile.experience.is_empty() {
        return format!(
            "{} is actively seeking opportunities. Feel free to reach out via the contact section!",
            profile.personal.name
        );
    }

    let exp_list = profile
        .experience
        .iter()
        .map(|e| format!("**{}** at {} ({})", e.position, e.company, e.period()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Here's {}'s professional experience:\n\n{}",
        profile.personal.name, exp_list
    )
}

fn render_education(profile: &ProfileRecord) -> String {
    let edu_list = profile
        .education
        .iter()
        .map(|e| {
            format!(
                "**{}** in {} from {} ({}) – {}",
                e.degree, e.field, e.institution, e.end_year, e.grade
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Here's {}'s educational background:\n\n{}",
        profile.personal.name, edu_list
    )
}

fn render_certifications(profile: &ProfileRecord) -> String {
    let cert_list = profile
        .certifications
        .iter()
        .map(|c| format!("**{}** from {} ({})", c.name, c.issuer, c.date_issued))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{} holds the following certifications:\n\n{}",
        profile.personal.name, cert_list
    )
}

fn render_contact(profile: &ProfileRecord) -> String {
    let personal = &profile.personal;
    format!(
        "You can reach {} at:\n\n📧 Email: {}\n📍 Location: {}\n\n\
         Or use the contact form above to send a message directly!",
        personal.name, personal.email, personal.location
    )
}

fn render_about(profile: &ProfileRecord) -> String {
    let personal = &profile.personal;
    format!(
        "{} is a {} based in {}. {}",
        personal.name,
        personal.title,
        personal.location,
        personal.bio_first_line()
    )
}

fn render_menu(profile: &ProfileRecord) -> String {
    format!(
        "I can help you learn about {}'s:\n\n\
         • **Skills & Technologies** - Programming languages, frameworks, and tools\n\
         • **Projects** - Portfolio of work with live demos\n\
         • **Experience** - Work history and internships\n\
         • **Education** - Academic background\n\
         • **Certifications** - Professional certifications\n\
         • **Contact** - How to get in touch\n\n\
         What would you like to know more about?",
        profile.personal.name
    )
}
