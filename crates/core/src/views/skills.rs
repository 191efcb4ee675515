use std::convert::Infallible;

use folio_protocol::{PaintCommand, ThemeToken};

use super::{Visible, command, primary, push_prompt};
use crate::engine::TabRuntime;
use crate::lines::skills::SkillsLine;

pub fn paint(runtime: &TabRuntime<SkillsLine, Infallible>) -> Vec<PaintCommand> {
    let mut out = Vec::new();
    for Visible { item, typing, .. } in primary(runtime) {
        out.push(match item {
            SkillsLine::Command(cmd) => command(cmd, typing),
            SkillsLine::Category { name, branch } => PaintCommand::TreeRow {
                guides: branch.guides(),
                label: format!("{name}/"),
                color: ThemeToken::CategoryName,
                badge: None,
                note: None,
                strength: false,
            },
            SkillsLine::Skill { skill, branch, .. } => {
                let badge = skill.level.badge();
                PaintCommand::TreeRow {
                    guides: branch.guides(),
                    label: skill.name.clone(),
                    color: if badge.is_some() {
                        ThemeToken::SkillName
                    } else {
                        ThemeToken::SkillUnused
                    },
                    badge,
                    note: skill.experience.clone(),
                    strength: skill.is_strength,
                }
            }
        });
    }
    push_prompt(&mut out, runtime);
    out
}
