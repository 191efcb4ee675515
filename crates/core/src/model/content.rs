
use folio_protocol::{IconKind, LevelBadge, TabId, ThemeToken};
use indexmap::IndexMap;
use serde::Deserialize;

/// Sentinel end date of an ongoing career record.
pub const PRESENT: &str = "present";

/// All display content of one locale.
///
/// Both locale trees are expected to share structure (same categories,
/// same career ids); the generators do not reconcile differences.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTree {
    pub portfolio: PortfolioText,
    pub tabs: TabLabels,
    pub profile_tab: ProfileText,
    pub skills: SkillsContent,
    pub careers: CareersContent,
    pub projects: ProjectsContent,
    pub social: SocialContent,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioText {
    pub user: String,
    pub host: String,
    pub section_titles: TabLabels,
}

/// One string per tab.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TabLabels {
    pub profile: String,
    pub skills: String,
    pub careers: String,
    pub projects: String,
}

impl TabLabels {
    pub fn get(&self, tab: TabId) -> &str {
        match tab {
            TabId::Profile => &self.profile,
            TabId::Skills => &self.skills,
            TabId::Careers => &self.careers,
            TabId::Projects => &self.projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileText {
    pub about_me: String,
    pub skills: String,
    pub career: String,
    pub projects: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillsContent {
    #[serde(default = "default_tree_command")]
    pub command: String,
    pub categories: Vec<SkillCategory>,
}

fn default_tree_command() -> String {
    "tree".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub is_strength: bool,
    #[serde(default)]
    pub children: Vec<Skill>,
}

/// How often a skill is in use. Unknown tags read as `Learning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SkillLevel {
    Daily,
    Regular,
    Learning,
    Unused,
}

impl From<String> for SkillLevel {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "daily" => Self::Daily,
            "regular" => Self::Regular,
            "unused" => Self::Unused,
            _ => Self::Learning,
        }
    }
}

impl SkillLevel {
    pub fn badge(self) -> Option<LevelBadge> {
        match self {
            Self::Daily => Some(LevelBadge::Daily),
            Self::Regular => Some(LevelBadge::Regular),
            Self::Learning => Some(LevelBadge::Learning),
            Self::Unused => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareersContent {
    pub command: String,
    /// Localized label for the `present` sentinel.
    pub present: String,
    pub section_labels: SectionLabels,
    /// Keyed by id, in document order.
    pub items: IndexMap<String, CareerRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLabels {
    pub responsibilities: String,
    pub achievements: String,
    pub coming_soon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CareerRecord {
    pub company: String,
    pub position: String,
    pub period: Period,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// `YYYY-MM` start and end, or [`PRESENT`] as end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Period {
    pub start: String,
    pub end: String,
}

impl Period {
    pub fn is_present(&self) -> bool {
        self.end == PRESENT
    }

    /// `YYYY/MM - YYYY/MM`, with the sentinel replaced by `present_label`.
    pub fn format(&self, present_label: &str) -> String {
        let fmt = |date: &str| -> String {
            if date == PRESENT {
                return present_label.to_string();
            }
            match date.split_once('-') {
                Some((year, month)) => format!("{year}/{month}"),
                None => date.to_string(),
            }
        };
        format!("{} - {}", fmt(&self.start), fmt(&self.end))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsContent {
    pub items: Vec<Project>,
    pub coming_soon: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialContent {
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon_type: IconKind,
    pub color: ThemeToken,
}
