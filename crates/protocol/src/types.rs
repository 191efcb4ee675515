use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two supported content languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ja, Locale::En];

    /// The persisted / wire representation (`"ja"` or `"en"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ja => "ja",
            Self::En => "en",
        }
    }

    /// The other supported locale.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ja => Self::En,
            Self::En => Self::Ja,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not exactly `"ja"` or `"en"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale: {0:?}")]
pub struct ParseLocaleError(pub String);

impl std::str::FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Self::Ja),
            "en" => Ok(Self::En),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}

/// The four terminal tabs, in tab-bar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Profile,
    Skills,
    Careers,
    Projects,
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::Profile,
        TabId::Skills,
        TabId::Careers,
        TabId::Projects,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Skills => "skills",
            Self::Careers => "careers",
            Self::Projects => "projects",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Profile => 0,
            Self::Skills => 1,
            Self::Careers => 2,
            Self::Projects => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab in bar order, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab in bar order, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One indent column of a tree row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeGuide {
    /// `├──` a sibling follows.
    Branch,
    /// `└──` last sibling.
    Last,
    /// `│` an ancestor still has siblings below.
    Vertical,
    /// Blank column under an ancestor that was the last sibling.
    Blank,
}

impl TreeGuide {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Branch => "├── ",
            Self::Last => "└── ",
            Self::Vertical => "│   ",
            Self::Blank => "    ",
        }
    }
}

/// Icon shown next to a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Github,
    Linkedin,
    X,
}

/// Usage tag drawn after a skill name. Unused skills carry no badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelBadge {
    Daily,
    Regular,
    Learning,
}

impl LevelBadge {
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Regular => "Regular",
            Self::Learning => "Learning",
        }
    }
}
