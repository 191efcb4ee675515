use super::CommandLine;
use crate::model::{LineKind, Project, ProjectsContent, Reveal, RevealItem};

/// The projects tab has a single primary line: the listing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCommand(pub CommandLine);

impl Default for ListingCommand {
    fn default() -> Self {
        Self(CommandLine::with_arg("ls -la", "projects/"))
    }
}

impl RevealItem for ListingCommand {
    fn kind(&self) -> LineKind {
        LineKind::Command
    }

    fn reveal(&self) -> Reveal<'_> {
        Reveal::Typed(self.0.full_text())
    }
}

pub fn generate(projects: &ProjectsContent) -> (Vec<ListingCommand>, Vec<Project>) {
    (vec![ListingCommand::default()], projects.items.clone())
}
