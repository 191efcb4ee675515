use std::collections::BTreeSet;
use std::convert::Infallible;

use folio_protocol::{CareerCard, CareerDetails, PaintCommand};

use super::{Visible, command, primary, push_prompt};
use crate::engine::TabRuntime;
use crate::lines::careers::{CareerEntry, CareersLine};
use crate::model::{CareersContent, ContentTree};

pub fn paint(
    runtime: &TabRuntime<CareersLine, Infallible>,
    content: &ContentTree,
    expanded: &BTreeSet<String>,
) -> Vec<PaintCommand> {
    let mut out = Vec::new();
    let revealed = runtime.sequencer().completed_count();
    for Visible { index, item, typing } in primary(runtime) {
        match item {
            CareersLine::Command(cmd) => {
                out.push(command(cmd, typing));
                out.push(PaintCommand::Spacer);
            }
            CareersLine::Entry(entry) => {
                let settled = index < revealed;
                let open = settled && expanded.contains(&entry.id);
                let mut card = card(entry, &content.careers, open);
                card.interactive = settled;
                out.push(PaintCommand::Career(card));
            }
        }
    }
    push_prompt(&mut out, runtime);
    out
}

pub fn card(entry: &CareerEntry, careers: &CareersContent, expanded: bool) -> CareerCard {
    let record = &entry.record;
    CareerCard {
        id: entry.id.clone(),
        period: record.period.format(&careers.present),
        current: record.period.is_present(),
        first: entry.position == 0,
        company: record.company.clone(),
        position: record.position.clone(),
        description: record.description.clone(),
        expanded,
        interactive: true,
        details: expanded.then(|| details(entry, careers)),
    }
}

fn details(entry: &CareerEntry, careers: &CareersContent) -> CareerDetails {
    let record = &entry.record;
    let labels = &careers.section_labels;
    let empty = record.responsibilities.is_empty()
        && record.achievements.is_empty()
        && record.technologies.is_empty();
    CareerDetails {
        readme: format!("{}/README.md", entry.id),
        responsibilities_heading: labels.responsibilities.clone(),
        responsibilities: record.responsibilities.clone(),
        achievements_heading: labels.achievements.clone(),
        achievements: record.achievements.clone(),
        technologies: record.technologies.clone(),
        placeholder: empty.then(|| format!("// {}", labels.coming_soon)),
    }
}

#[cfg(test)]
mod tests {
    use folio_protocol::Locale;

    use super::*;
    use crate::lines::careers::generate;
    use crate::store::TranslationStore;

    fn entries(content: &ContentTree) -> Vec<CareerEntry> {
        generate(&content.careers)
            .into_iter()
            .filter_map(|line| match line {
                CareersLine::Entry(entry) => Some(entry),
                CareersLine::Command(_) => None,
            })
            .collect()
    }

    #[test]
    fn collapsed_card_has_no_details() {
        let store = TranslationStore::embedded().expect("embedded content parses");
        let content = store.get(Locale::En);
        let first = entries(content).into_iter().next().expect("at least one career");

        let card = card(&first, &content.careers, false);
        assert!(card.first);
        assert!(card.current);
        assert!(card.details.is_none());
        assert!(card.period.ends_with(&content.careers.present));
    }

    #[test]
    fn empty_record_expands_to_placeholder() {
        let store = TranslationStore::embedded().expect("embedded content parses");
        let content = store.get(Locale::Ja);
        let bare = entries(content)
            .into_iter()
            .find(|e| e.record.technologies.is_empty() && e.record.achievements.is_empty())
            .expect("fixture has a record without details");

        let details = card(&bare, &content.careers, true).details.expect("expanded");
        assert_eq!(details.readme, format!("{}/README.md", bare.id));
        assert_eq!(
            details.placeholder,
            Some(format!("// {}", content.careers.section_labels.coming_soon))
        );
    }
}
