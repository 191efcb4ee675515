use serde::{Deserialize, Serialize};

/// Semantic color tokens resolved by the renderer's palette.
///
/// Content data refers to the `Social*` tokens by their kebab-case names
/// (`"social-github"`), everything else is chosen by the paint views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeToken {
    Background,
    Surface,
    Border,

    // Window chrome
    TitleText,
    SectionTitle,
    TabActive,
    TabInactive,

    // Prompt
    PromptSymbol,
    CommandText,
    CommandArg,
    Cursor,

    TextPrimary,
    TextSecondary,
    TextMuted,
    Link,

    // Skills tree
    TreeGuide,
    CategoryName,
    SkillName,
    SkillUnused,
    LevelDaily,
    LevelRegular,
    LevelLearning,
    Strength,

    // Careers timeline
    TimelineActive,
    TimelineInactive,
    CareerBullet,
    CareerPeriod,
    CareerCurrent,
    Company,
    Position,
    AchievementMarker,
    TechBadge,

    // Projects
    ProjectName,
    ProjectLink,

    // Social links
    SocialGithub,
    SocialLinkedin,
    SocialX,

    // Background rain
    RainHead,
    RainTrail,
}
