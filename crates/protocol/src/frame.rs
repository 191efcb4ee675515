use serde::{Deserialize, Serialize};

use crate::commands::PaintCommand;
use crate::types::{Locale, TabId};

/// Everything a renderer needs to draw one frame of the terminal window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalFrame {
    pub locale: Locale,
    pub active_tab: TabId,
    /// `user@host - ~/<tab>`
    pub window_title: String,
    /// Heading above the window for the active tab.
    pub section_title: String,
    pub tabs: Vec<TabLabel>,
    /// Paint stream of the active tab.
    pub body: Vec<PaintCommand>,
    /// The active tab has finished its reveal.
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabLabel {
    pub id: TabId,
    pub label: String,
    pub active: bool,
}

impl TerminalFrame {
    /// Tab targets and revealed career ids in paint order, for focus
    /// navigation.
    pub fn interactive_items(&self) -> Vec<Interactive> {
        self.body
            .iter()
            .filter_map(|cmd| match cmd {
                PaintCommand::TabLink { target, .. } => Some(Interactive::TabLink(*target)),
                PaintCommand::Career(card) if card.interactive => {
                    Some(Interactive::Career(card.id.clone()))
                }
                _ => None,
            })
            .collect()
    }
}

/// A paint command the user can activate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interactive {
    TabLink(TabId),
    Career(String),
}
