//! Timing constants and per-line-type delay tables.

use std::collections::HashMap;

use crate::model::LineKind;

/// Base interval between typed command characters.
pub const COMMAND_CHAR_MS: u64 = 40;
/// Maximum deviation from [`COMMAND_CHAR_MS`] in either direction.
pub const COMMAND_CHAR_JITTER_MS: u64 = 20;
/// Pause with an empty prompt before the first typed character.
pub const PROMPT_DELAY_MS: u64 = 300;
/// Floor for a jittered character interval.
pub const MIN_CHAR_DELAY_MS: u64 = 10;

pub const POST_COMMAND_DELAY_MS: u64 = 300;
pub const POST_OUTPUT_DELAY_MS: u64 = 400;
pub const SOCIAL_LINK_DELAY_MS: u64 = 300;

/// Delay between a tab becoming visible and its first line.
pub const START_DELAY_MS: u64 = 300;
/// Paint-commit delay of instantly revealed lines.
pub const INSTANT_SETTLE_MS: u64 = 50;
pub const PROJECT_SETTLE_MS: u64 = 100;

/// The skills tree reveals much faster than the prose tabs.
pub mod skills {
    pub const POST_COMMAND_DELAY_MS: u64 = 20;
    pub const CATEGORY_DELAY_MS: u64 = 5;
    pub const SKILL_ITEM_DELAY_MS: u64 = 3;
    pub const SETTLE_MS: u64 = 1;
}

/// Post-reveal delay per line kind, with a fallback for unlisted kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayTable {
    delays: HashMap<LineKind, u64>,
    default_ms: u64,
}

impl DelayTable {
    pub fn new(default_ms: u64) -> Self {
        Self {
            delays: HashMap::new(),
            default_ms,
        }
    }

    pub fn with(mut self, kind: LineKind, delay_ms: u64) -> Self {
        self.delays.insert(kind, delay_ms);
        self
    }

    pub fn get(&self, kind: LineKind) -> u64 {
        self.delays.get(&kind).copied().unwrap_or(self.default_ms)
    }
}

/// Everything a sequencer needs to know about time for one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPlan {
    pub start_delay_ms: u64,
    /// Settle delay of instant primary lines.
    pub settle_ms: u64,
    pub delays: DelayTable,
    /// Settle delay of instant auxiliary items.
    pub aux_settle_ms: u64,
    /// Post-reveal delay of every auxiliary item.
    pub aux_delay_ms: u64,
}

impl RevealPlan {
    pub fn new(delays: DelayTable) -> Self {
        Self {
            start_delay_ms: START_DELAY_MS,
            settle_ms: INSTANT_SETTLE_MS,
            delays,
            aux_settle_ms: INSTANT_SETTLE_MS,
            aux_delay_ms: 0,
        }
    }

    pub fn settle(mut self, settle_ms: u64) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    pub fn auxiliary(mut self, settle_ms: u64, delay_ms: u64) -> Self {
        self.aux_settle_ms = settle_ms;
        self.aux_delay_ms = delay_ms;
        self
    }

    pub fn start_delay(mut self, start_delay_ms: u64) -> Self {
        self.start_delay_ms = start_delay_ms;
        self
    }
}
