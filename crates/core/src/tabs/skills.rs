use folio_protocol::{PaintCommand, TabId};

use super::{PaintContext, TabSpec};
use crate::engine::timing::skills::{CATEGORY_DELAY_MS, POST_COMMAND_DELAY_MS, SETTLE_MS, SKILL_ITEM_DELAY_MS};
use crate::engine::{DelayTable, RevealPlan, TabRuntime};
use crate::lines::skills::{self, SkillsLine};
use crate::model::{ContentTree, LineKind};
use crate::views;

pub struct Skills;

impl TabSpec for Skills {
    const ID: TabId = TabId::Skills;
    type Line = SkillsLine;
    type Aux = std::convert::Infallible;

    fn generate(content: &ContentTree) -> (Vec<SkillsLine>, Vec<Self::Aux>) {
        (skills::generate(&content.skills), Vec::new())
    }

    /// Tree rows land almost at once; only the command is paced.
    fn plan() -> RevealPlan {
        RevealPlan::new(
            DelayTable::new(SKILL_ITEM_DELAY_MS)
                .with(LineKind::Command, POST_COMMAND_DELAY_MS)
                .with(LineKind::Category, CATEGORY_DELAY_MS)
                .with(LineKind::SkillItem, SKILL_ITEM_DELAY_MS),
        )
        .settle(SETTLE_MS)
    }

    fn paint(runtime: &TabRuntime<SkillsLine, Self::Aux>, _ctx: PaintContext<'_>) -> Vec<PaintCommand> {
        views::skills::paint(runtime)
    }
}
