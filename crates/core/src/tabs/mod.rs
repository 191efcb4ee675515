//! The four tab instantiations of the reveal engine.
//!
//! A tab is a [`TabSpec`] (what to reveal, how fast, how to paint it)
//! bound to its own [`TabRuntime`]. Nothing is shared between tabs.

mod careers;
mod profile;
mod projects;
mod skills;

use std::collections::BTreeSet;

use folio_protocol::{PaintCommand, TabId};
use rand::rngs::StdRng;

pub use careers::Careers;
pub use profile::Profile;
pub use projects::Projects;
pub use skills::Skills;

use crate::engine::{MotionPolicy, RevealPlan, TabRuntime};
use crate::model::{ContentTree, RevealItem};

/// Inputs to painting besides the runtime itself.
#[derive(Debug, Clone, Copy)]
pub struct PaintContext<'a> {
    pub content: &'a ContentTree,
    /// Career ids currently shown expanded.
    pub expanded: &'a BTreeSet<String>,
}

pub trait TabSpec {
    const ID: TabId;
    type Line: RevealItem;
    type Aux: RevealItem;

    /// Flatten this tab's content into its primary and auxiliary lists.
    fn generate(content: &ContentTree) -> (Vec<Self::Line>, Vec<Self::Aux>);

    fn plan() -> RevealPlan;

    fn paint(runtime: &TabRuntime<Self::Line, Self::Aux>, ctx: PaintContext<'_>) -> Vec<PaintCommand>;
}

pub struct Tab<S: TabSpec> {
    runtime: TabRuntime<S::Line, S::Aux>,
}

impl<S: TabSpec> Tab<S> {
    pub fn new(content: &ContentTree, start_delay_ms: u64, motion: MotionPolicy, rng: StdRng) -> Self {
        let (lines, aux) = S::generate(content);
        tracing::debug!(tab = %S::ID, lines = lines.len(), aux = aux.len(), "tab sequence generated");
        let plan = S::plan().start_delay(start_delay_ms);
        Self {
            runtime: TabRuntime::new(lines, aux, plan, motion, rng),
        }
    }

    pub fn set_visible(&mut self, visible: bool, now_ms: u64) -> bool {
        self.runtime.set_visible(visible, now_ms)
    }

    /// Regenerate from `content` (locale change) and start over.
    pub fn reload(&mut self, content: &ContentTree, now_ms: u64) {
        let (lines, aux) = S::generate(content);
        tracing::debug!(tab = %S::ID, lines = lines.len(), aux = aux.len(), "tab sequence regenerated");
        self.runtime.reload(lines, aux, now_ms);
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.runtime.tick(now_ms)
    }

    pub fn next_wakeup(&self) -> Option<u64> {
        self.runtime.next_wakeup()
    }

    pub fn paint(&self, ctx: PaintContext<'_>) -> Vec<PaintCommand> {
        S::paint(&self.runtime, ctx)
    }

    pub fn is_complete(&self) -> bool {
        self.runtime.sequencer().is_complete()
    }

    pub fn runtime(&self) -> &TabRuntime<S::Line, S::Aux> {
        &self.runtime
    }
}
