use std::borrow::Cow;
use std::convert::Infallible;

/// Type tag of a line; the key of every delay table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Command,
    Output,
    TabLink,
    Category,
    SkillItem,
    ChildSkillItem,
    GrandchildSkillItem,
    CareerEntry,
    SocialLink,
    Project,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "command",
            Self::Output => "output",
            Self::TabLink => "tab-link",
            Self::Category => "category",
            Self::SkillItem => "skill-item",
            Self::ChildSkillItem => "child-skill-item",
            Self::GrandchildSkillItem => "grandchild-skill-item",
            Self::CareerEntry => "career-entry",
            Self::SocialLink => "social-link",
            Self::Project => "project",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a line signals that its reveal finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reveal<'a> {
    /// Painted at once; done after the tab's settle delay.
    Instant,
    /// Typed character by character; done when the typewriter finishes.
    Typed(Cow<'a, str>),
}

/// Anything a sequencer can walk: tab lines and auxiliary items alike.
pub trait RevealItem {
    fn kind(&self) -> LineKind;
    fn reveal(&self) -> Reveal<'_>;
}

/// Stands in for the auxiliary list of tabs that have none.
impl RevealItem for Infallible {
    fn kind(&self) -> LineKind {
        match *self {}
    }

    fn reveal(&self) -> Reveal<'_> {
        match *self {}
    }
}

impl RevealItem for super::content::SocialLink {
    fn kind(&self) -> LineKind {
        LineKind::SocialLink
    }

    fn reveal(&self) -> Reveal<'_> {
        Reveal::Instant
    }
}

impl RevealItem for super::content::Project {
    fn kind(&self) -> LineKind {
        LineKind::Project
    }

    fn reveal(&self) -> Reveal<'_> {
        Reveal::Instant
    }
}
