use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;
use crate::types::{IconKind, LevelBadge, TabId, TreeGuide};

/// A single, stateless paint instruction.
///
/// The core emits a `Vec<PaintCommand>` for the active tab on every frame.
/// Renderers consume the list top to bottom; each command is one visual
/// block and carries everything it needs, so renderers hold no timing or
/// animation state of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaintCommand {
    /// A shell line: `$ command arg`. While a command is being typed the
    /// strings hold the revealed prefix only and `cursor` is set.
    Command {
        command: String,
        arg: Option<String>,
        cursor: bool,
    },

    /// A block of plain output. May contain `\n`.
    Text { text: String, color: ThemeToken },

    /// Output that navigates to another tab when activated.
    TabLink { label: String, target: TabId },

    /// One row of a directory-style tree.
    TreeRow {
        guides: Vec<TreeGuide>,
        label: String,
        color: ThemeToken,
        badge: Option<LevelBadge>,
        note: Option<String>,
        strength: bool,
    },

    /// One entry of the career timeline.
    Career(CareerCard),

    /// One project card.
    Project(ProjectCard),

    /// One social link row.
    Social {
        name: String,
        href: String,
        icon: IconKind,
        color: ThemeToken,
    },

    /// The idle prompt shown once a tab has finished animating.
    Prompt,

    /// Vertical gap between groups.
    Spacer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCard {
    pub id: String,
    /// Already formatted, e.g. `2022/04 - 現在`.
    pub period: String,
    pub current: bool,
    /// First entry of the timeline (the rail starts at its bullet).
    pub first: bool,
    pub company: String,
    pub position: String,
    pub description: String,
    pub expanded: bool,
    /// Fully revealed. A card still being revealed cannot be focused or
    /// expanded.
    pub interactive: bool,
    /// Present only when `expanded`.
    pub details: Option<CareerDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerDetails {
    /// `<id>/README.md`
    pub readme: String,
    pub responsibilities_heading: String,
    pub responsibilities: Vec<String>,
    pub achievements_heading: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
    /// Set when there is nothing else to show.
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}
