use folio_protocol::{PaintCommand, TabId};

use super::{PaintContext, TabSpec};
use crate::engine::timing::{
    INSTANT_SETTLE_MS, POST_COMMAND_DELAY_MS, POST_OUTPUT_DELAY_MS, SOCIAL_LINK_DELAY_MS,
};
use crate::engine::{DelayTable, RevealPlan, TabRuntime};
use crate::lines::profile::{self, ProfileLine};
use crate::model::{ContentTree, LineKind, SocialLink};
use crate::views;

pub struct Profile;

impl TabSpec for Profile {
    const ID: TabId = TabId::Profile;
    type Line = ProfileLine;
    type Aux = SocialLink;

    fn generate(content: &ContentTree) -> (Vec<ProfileLine>, Vec<SocialLink>) {
        profile::generate(content)
    }

    fn plan() -> RevealPlan {
        RevealPlan::new(
            DelayTable::new(0)
                .with(LineKind::Command, POST_COMMAND_DELAY_MS)
                .with(LineKind::Output, POST_OUTPUT_DELAY_MS)
                .with(LineKind::TabLink, POST_OUTPUT_DELAY_MS),
        )
        .auxiliary(INSTANT_SETTLE_MS, SOCIAL_LINK_DELAY_MS)
    }

    fn paint(runtime: &TabRuntime<ProfileLine, SocialLink>, _ctx: PaintContext<'_>) -> Vec<PaintCommand> {
        views::profile::paint(runtime)
    }
}
