pub mod content;
pub mod line;

pub use content::{
    CareerRecord, CareersContent, ContentTree, PRESENT, Period, PortfolioText, ProfileText,
    Project, ProjectsContent, SectionLabels, Skill, SkillCategory, SkillLevel, SkillsContent,
    SocialContent, SocialLink, TabLabels,
};
pub use line::{LineKind, Reveal, RevealItem};
