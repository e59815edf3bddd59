use serde::{Deserialize, Serialize};

/// Everything shown on the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Oldest first.
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,
    pub contact: ContactCta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Titles cycled by the header rotator.
    pub titles: Vec<String>,
    #[serde(default)]
    pub links: ProfileLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub code: Option<String>,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub timeframe: String,
    pub role: String,
    pub org: String,
    pub summary: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCta {
    pub headline: String,
    pub email: String,
    pub linkedin: Option<String>,
}

/// One experience entry in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    /// 1-based, the most recent entry carries the highest number.
    pub position: usize,
    pub total: usize,
    pub item: &'a ExperienceItem,
}

impl Content {
    /// Experience, most recent first.
    pub fn timeline(&self) -> Vec<TimelineEntry<'_>> {
        let total = self.experience.len();
        self.experience
            .iter()
            .rev()
            .enumerate()
            .map(|(idx, item)| TimelineEntry {
                position: total - idx,
                total,
                item,
            })
            .collect()
    }
}

/// Skill label as displayed: a trailing " basics (...)" qualifier is dropped.
pub fn skill_label(item: &str) -> &str {
    match item.find(" basics (") {
        Some(idx) if item.ends_with(')') => &item[..idx],
        _ => item,
    }
}
