use folio_protocol::{PaintCommand, ProjectCard, ThemeToken};

use super::{Visible, auxiliary, command, primary, push_prompt};
use crate::engine::TabRuntime;
use crate::lines::projects::ListingCommand;
use crate::model::{Project, ProjectsContent};

pub fn paint(runtime: &TabRuntime<ListingCommand, Project>, projects: &ProjectsContent) -> Vec<PaintCommand> {
    let mut out = Vec::new();
    for Visible { item, typing, .. } in primary(runtime) {
        out.push(command(&item.0, typing));
    }
    for project in auxiliary(runtime) {
        out.push(PaintCommand::Spacer);
        out.push(PaintCommand::Project(ProjectCard {
            name: project.name.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            github_url: project.github_url.clone(),
            live_url: project.live_url.clone(),
        }));
    }
    if runtime.sequencer().is_complete() {
        out.push(PaintCommand::Spacer);
        out.push(PaintCommand::Text {
            text: projects.coming_soon.clone(),
            color: ThemeToken::TextMuted,
        });
    }
    push_prompt(&mut out, runtime);
    out
}
