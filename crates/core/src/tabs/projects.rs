use folio_protocol::{PaintCommand, TabId};

use super::{PaintContext, TabSpec};
use crate::engine::timing::{POST_COMMAND_DELAY_MS, POST_OUTPUT_DELAY_MS, PROJECT_SETTLE_MS};
use crate::engine::{DelayTable, RevealPlan, TabRuntime};
use crate::lines::projects::{self, ListingCommand};
use crate::model::{ContentTree, LineKind, Project};
use crate::views;

/// `idle → command → project(i) → complete`: the listing command is the
/// only primary line and the cards are the auxiliary list.
pub struct Projects;

impl TabSpec for Projects {
    const ID: TabId = TabId::Projects;
    type Line = ListingCommand;
    type Aux = Project;

    fn generate(content: &ContentTree) -> (Vec<ListingCommand>, Vec<Project>) {
        projects::generate(&content.projects)
    }

    fn plan() -> RevealPlan {
        RevealPlan::new(DelayTable::new(0).with(LineKind::Command, POST_COMMAND_DELAY_MS))
            .auxiliary(PROJECT_SETTLE_MS, POST_OUTPUT_DELAY_MS)
    }

    fn paint(runtime: &TabRuntime<ListingCommand, Project>, ctx: PaintContext<'_>) -> Vec<PaintCommand> {
        views::projects::paint(runtime, &ctx.content.projects)
    }
}
