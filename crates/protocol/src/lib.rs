pub mod commands;
pub mod frame;
pub mod theme;
pub mod types;

pub use commands::{CareerCard, CareerDetails, PaintCommand, ProjectCard};
pub use frame::{Interactive, TabLabel, TerminalFrame};
pub use theme::ThemeToken;
pub use types::{IconKind, LevelBadge, Locale, ParseLocaleError, TabId, TreeGuide};
