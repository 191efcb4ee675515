use folio_protocol::TabId;

use super::CommandLine;
use crate::model::{ContentTree, LineKind, Reveal, RevealItem, SocialLink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileLine {
    Command(CommandLine),
    Output(String),
    TabLink { label: String, target: TabId },
}

impl RevealItem for ProfileLine {
    fn kind(&self) -> LineKind {
        match self {
            Self::Command(_) => LineKind::Command,
            Self::Output(_) => LineKind::Output,
            Self::TabLink { .. } => LineKind::TabLink,
        }
    }

    fn reveal(&self) -> Reveal<'_> {
        match self {
            Self::Command(cmd) => Reveal::Typed(cmd.full_text()),
            Self::Output(_) | Self::TabLink { .. } => Reveal::Instant,
        }
    }
}

/// The fixed nine-line profile script and the social links revealed after it.
pub fn generate(content: &ContentTree) -> (Vec<ProfileLine>, Vec<SocialLink>) {
    let text = &content.profile_tab;
    let cd = |target: TabId, label: &str| {
        [
            ProfileLine::Command(CommandLine::with_arg("cd .. &&", target.as_str())),
            ProfileLine::TabLink {
                label: label.to_string(),
                target,
            },
        ]
    };

    let mut lines = Vec::with_capacity(9);
    lines.push(ProfileLine::Command(CommandLine::with_arg("cat", "about-me.txt")));
    lines.push(ProfileLine::Output(text.about_me.clone()));
    lines.extend(cd(TabId::Skills, &text.skills));
    lines.extend(cd(TabId::Careers, &text.career));
    lines.extend(cd(TabId::Projects, &text.projects));
    lines.push(ProfileLine::Command(CommandLine::with_arg("cat", "sns.lnk")));

    (lines, content.social.links.clone())
}
