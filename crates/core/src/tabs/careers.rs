use folio_protocol::{PaintCommand, TabId};

use super::{PaintContext, TabSpec};
use crate::engine::timing::POST_COMMAND_DELAY_MS;
use crate::engine::timing::skills::SKILL_ITEM_DELAY_MS;
use crate::engine::{DelayTable, RevealPlan, TabRuntime};
use crate::lines::careers::{self, CareersLine};
use crate::model::{ContentTree, LineKind};
use crate::views;

pub struct Careers;

impl TabSpec for Careers {
    const ID: TabId = TabId::Careers;
    type Line = CareersLine;
    type Aux = std::convert::Infallible;

    fn generate(content: &ContentTree) -> (Vec<CareersLine>, Vec<Self::Aux>) {
        (careers::generate(&content.careers), Vec::new())
    }

    fn plan() -> RevealPlan {
        RevealPlan::new(
            DelayTable::new(0)
                .with(LineKind::Command, POST_COMMAND_DELAY_MS)
                .with(LineKind::CareerEntry, SKILL_ITEM_DELAY_MS),
        )
    }

    fn paint(runtime: &TabRuntime<CareersLine, Self::Aux>, ctx: PaintContext<'_>) -> Vec<PaintCommand> {
        views::careers::paint(runtime, ctx.content, ctx.expanded)
    }
}
