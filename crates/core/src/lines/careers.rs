use std::cmp::Ordering;

use super::CommandLine;
use crate::model::{CareerRecord, CareersContent, LineKind, Reveal, RevealItem};

#[derive(Debug, Clone, PartialEq)]
pub struct CareerEntry {
    pub id: String,
    pub record: CareerRecord,
    /// Position in the timeline, `0` at the top.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CareersLine {
    Command(CommandLine),
    Entry(CareerEntry),
}

impl RevealItem for CareersLine {
    fn kind(&self) -> LineKind {
        match self {
            Self::Command(_) => LineKind::Command,
            Self::Entry(_) => LineKind::CareerEntry,
        }
    }

    fn reveal(&self) -> Reveal<'_> {
        match self {
            Self::Command(cmd) => Reveal::Typed(cmd.full_text()),
            Self::Entry(_) => Reveal::Instant,
        }
    }
}

/// Ongoing records first, then newest start date first within each group.
///
/// Start dates are fixed-width `YYYY-MM`, so string order is date order.
pub fn timeline_order(a: &CareerRecord, b: &CareerRecord) -> Ordering {
    b.period
        .is_present()
        .cmp(&a.period.is_present())
        .then_with(|| b.period.start.cmp(&a.period.start))
}

pub fn generate(careers: &CareersContent) -> Vec<CareersLine> {
    let mut records: Vec<(&String, &CareerRecord)> = careers.items.iter().collect();
    records.sort_by(|(_, a), (_, b)| timeline_order(a, b));

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CareersLine::Command(CommandLine::new(careers.command.clone())));
    lines.extend(records.into_iter().enumerate().map(|(position, (id, record))| {
        CareersLine::Entry(CareerEntry {
            id: id.clone(),
            record: record.clone(),
            position,
        })
    }));
    lines
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::model::{Period, SectionLabels};

    fn record(start: &str, end: &str) -> CareerRecord {
        CareerRecord {
            company: String::new(),
            position: String::new(),
            period: Period {
                start: start.to_string(),
                end: end.to_string(),
            },
            description: String::new(),
            responsibilities: vec![],
            achievements: vec![],
            technologies: vec![],
        }
    }

    fn careers(items: &[(&str, CareerRecord)]) -> CareersContent {
        CareersContent {
            command: "git log".to_string(),
            present: "present".to_string(),
            section_labels: SectionLabels {
                responsibilities: String::new(),
                achievements: String::new(),
                coming_soon: String::new(),
            },
            items: items
                .iter()
                .map(|(id, r)| (id.to_string(), r.clone()))
                .collect::<IndexMap<_, _>>(),
        }
    }

    fn ids(lines: &[CareersLine]) -> Vec<&str> {
        lines
            .iter()
            .filter_map(|line| match line {
                CareersLine::Entry(entry) => Some(entry.id.as_str()),
                CareersLine::Command(_) => None,
            })
            .collect()
    }

    #[test]
    fn present_first_then_newest_start() {
        let lines = generate(&careers(&[
            ("B", record("2022-01", "2023-12")),
            ("A", record("2024-01", "present")),
            ("C", record("2022-06", "present")),
        ]));
        assert_eq!(ids(&lines), vec!["A", "C", "B"]);
        assert_eq!(lines[0].kind(), LineKind::Command);
    }

    #[test]
    fn equal_start_dates_keep_document_order() {
        let lines = generate(&careers(&[
            ("zeta", record("2019-04", "2020-03")),
            ("alpha", record("2019-04", "2021-03")),
            ("mid", record("2019-04", "present")),
        ]));
        assert_eq!(ids(&lines), vec!["mid", "zeta", "alpha"]);
    }

    #[test]
    fn positions_follow_sorted_order() {
        let lines = generate(&careers(&[
            ("old", record("2015-04", "2017-03")),
            ("new", record("2018-04", "2020-03")),
        ]));
        let positions: Vec<_> = lines
            .iter()
            .filter_map(|line| match line {
                CareersLine::Entry(entry) => Some((entry.id.as_str(), entry.position)),
                CareersLine::Command(_) => None,
            })
            .collect();
        assert_eq!(positions, vec![("new", 0), ("old", 1)]);
    }
}
