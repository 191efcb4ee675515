use folio_protocol::{PaintCommand, ThemeToken};

use super::{Visible, auxiliary, command, primary, push_prompt};
use crate::engine::TabRuntime;
use crate::lines::profile::ProfileLine;
use crate::model::SocialLink;

pub fn paint(runtime: &TabRuntime<ProfileLine, SocialLink>) -> Vec<PaintCommand> {
    let mut out = Vec::new();
    for Visible { index, item, typing } in primary(runtime) {
        match item {
            ProfileLine::Command(cmd) => {
                if index > 0 {
                    out.push(PaintCommand::Spacer);
                }
                out.push(command(cmd, typing));
            }
            ProfileLine::Output(text) => out.push(PaintCommand::Text {
                text: text.clone(),
                color: ThemeToken::TextPrimary,
            }),
            ProfileLine::TabLink { label, target } => out.push(PaintCommand::TabLink {
                label: label.clone(),
                target: *target,
            }),
        }
    }

    let mut social = auxiliary(runtime).peekable();
    if social.peek().is_some() {
        out.push(PaintCommand::Spacer);
    }
    out.extend(social.map(|link| PaintCommand::Social {
        name: link.name.clone(),
        href: link.href.clone(),
        icon: link.icon_type,
        color: link.color,
    }));

    push_prompt(&mut out, runtime);
    out
}
