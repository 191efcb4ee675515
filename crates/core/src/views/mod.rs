//! Paint views: pure functions from a tab's runtime state to a
//! [`PaintCommand`] stream. Nothing here schedules or mutates anything.

pub mod careers;
pub mod profile;
pub mod projects;
pub mod skills;

use folio_protocol::PaintCommand;

use crate::engine::{Stage, TabRuntime};
use crate::lines::CommandLine;
use crate::model::RevealItem;

/// Typing progress of the active command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Typing<'a> {
    pub typed: &'a str,
    pub cursor: bool,
}

/// A line that is on screen, with its typing progress when it is the
/// command currently being typed. Active instant lines carry no typing
/// and paint in final form.
pub(crate) struct Visible<'a, T> {
    pub index: usize,
    pub item: &'a T,
    pub typing: Option<Typing<'a>>,
}

/// Completed primary lines followed by the active one, if any.
pub(crate) fn primary<'a, L: RevealItem, A: RevealItem>(
    runtime: &'a TabRuntime<L, A>,
) -> impl Iterator<Item = Visible<'a, L>> {
    let seq = runtime.sequencer();
    seq.completed_lines()
        .iter()
        .enumerate()
        .map(|(index, item)| Visible {
            index,
            item,
            typing: None,
        })
        .chain(seq.active_line().map(|(index, item)| Visible {
            index,
            item,
            typing: runtime
                .typed(Stage::Primary, index)
                .map(|(typed, cursor)| Typing { typed, cursor }),
        }))
}

/// Completed auxiliary items followed by the active one, if any.
pub(crate) fn auxiliary<'a, L: RevealItem, A: RevealItem>(
    runtime: &'a TabRuntime<L, A>,
) -> impl Iterator<Item = &'a A> {
    let seq = runtime.sequencer();
    seq.completed_aux()
        .iter()
        .chain(seq.active_aux().map(|(_, item)| item))
}

/// A command line in final form, or as much of it as has been typed.
pub(crate) fn command(line: &CommandLine, typing: Option<Typing<'_>>) -> PaintCommand {
    match typing {
        None => PaintCommand::Command {
            command: line.command.clone(),
            arg: line.arg.clone(),
            cursor: false,
        },
        Some(Typing { typed, cursor }) => {
            let (command, arg) = line.split_prefix(typed);
            PaintCommand::Command {
                command: command.to_string(),
                arg: arg.map(str::to_string),
                cursor,
            }
        }
    }
}

/// Trailing idle prompt, once the tab is done.
pub(crate) fn push_prompt<L: RevealItem, A: RevealItem>(out: &mut Vec<PaintCommand>, runtime: &TabRuntime<L, A>) {
    if runtime.sequencer().is_complete() {
        out.push(PaintCommand::Spacer);
        out.push(PaintCommand::Prompt);
    }
}
