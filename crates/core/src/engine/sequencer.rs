//! Generic indexed reveal state machine.
//!
//! A sequencer walks a primary list of lines and, optionally, an auxiliary
//! list chained after it. It never touches a clock: every transition comes
//! in as a [`SequencerEvent`] and goes out as a [`Step`] telling the owner
//! what to schedule next.
//!
//! ```text
//!   idle ──Start──▶ line(0) ─▶ … ─▶ line(N-1) ─▶ aux(0) ─▶ … ─▶ aux(M-1) ─▶ complete
//!                     │  reveal done                │
//!                     └─ Settled / typed ─▶ Advance ┘  (after the line's delay)
//! ```

use std::borrow::Cow;
use std::convert::Infallible;

use super::timing::RevealPlan;
use crate::model::{Reveal, RevealItem};

/// Which list a cursor points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Primary,
    Auxiliary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Revealing primary line `index`.
    Line(usize),
    /// Revealing auxiliary item `index`.
    Auxiliary(usize),
    Complete,
}

impl Phase {
    pub fn cursor(self) -> Option<(Stage, usize)> {
        match self {
            Self::Line(index) => Some((Stage::Primary, index)),
            Self::Auxiliary(index) => Some((Stage::Auxiliary, index)),
            Self::Idle | Self::Complete => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The start delay elapsed.
    Start,
    /// An instant line finished its settle delay.
    Settled { stage: Stage, index: usize },
    /// A finished line's post-delay elapsed.
    Advance { stage: Stage, index: usize },
}

/// What the owner has to do after feeding the sequencer an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Nothing,
    Schedule { after_ms: u64, event: SequencerEvent },
    /// Start a typewriter for the given line; report back through
    /// [`RevealSequencer::complete`].
    Type { stage: Stage, index: usize },
}

/// Records which line completions were already accepted.
#[derive(Debug, Clone, Default)]
struct CompletionLatch {
    primary: Vec<bool>,
    auxiliary: Vec<bool>,
}

impl CompletionLatch {
    fn new(primary: usize, auxiliary: usize) -> Self {
        Self {
            primary: vec![false; primary],
            auxiliary: vec![false; auxiliary],
        }
    }

    /// `true` the first time a given line is claimed, `false` ever after.
    fn claim(&mut self, stage: Stage, index: usize) -> bool {
        let slots = match stage {
            Stage::Primary => &mut self.primary,
            Stage::Auxiliary => &mut self.auxiliary,
        };
        match slots.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealSequencer<L, A = Infallible> {
    lines: Vec<L>,
    aux: Vec<A>,
    plan: RevealPlan,
    phase: Phase,
    completed: usize,
    aux_completed: usize,
    started: bool,
    latch: CompletionLatch,
    /// The one outstanding timer, kept so a suspended tab can resume.
    pending: Option<(u64, SequencerEvent)>,
}

impl<L: RevealItem, A: RevealItem> RevealSequencer<L, A> {
    pub fn new(lines: Vec<L>, aux: Vec<A>, plan: RevealPlan) -> Self {
        let latch = CompletionLatch::new(lines.len(), aux.len());
        Self {
            lines,
            aux,
            plan,
            phase: Phase::Idle,
            completed: 0,
            aux_completed: 0,
            started: false,
            latch,
            pending: None,
        }
    }

    /// Replace both lists and return to `idle` with a fresh start guard.
    pub fn reset(&mut self, lines: Vec<L>, aux: Vec<A>) {
        *self = Self::new(lines, aux, self.plan.clone());
    }

    /// Arm the start timer. Only the first call per sequence does anything.
    pub fn trigger(&mut self) -> Step {
        if self.started {
            return Step::Nothing;
        }
        self.started = true;
        self.schedule(self.plan.start_delay_ms, SequencerEvent::Start)
    }

    pub fn handle(&mut self, event: SequencerEvent) -> Step {
        if self.pending.map(|(_, e)| e) == Some(event) {
            self.pending = None;
        }
        match event {
            SequencerEvent::Start => {
                if self.phase != Phase::Idle {
                    return Step::Nothing;
                }
                self.phase = if !self.lines.is_empty() {
                    Phase::Line(0)
                } else if !self.aux.is_empty() {
                    Phase::Auxiliary(0)
                } else {
                    Phase::Complete
                };
                tracing::debug!(phase = ?self.phase, "sequence started");
                self.begin()
            }
            SequencerEvent::Settled { stage, index } => self.complete(stage, index),
            SequencerEvent::Advance { stage, index } => {
                if self.phase.cursor() != Some((stage, index)) {
                    return Step::Nothing;
                }
                self.advance(stage, index);
                self.begin()
            }
        }
    }

    /// Report that the line at `(stage, index)` finished revealing. Stale
    /// or repeated reports are ignored.
    pub fn complete(&mut self, stage: Stage, index: usize) -> Step {
        if self.phase.cursor() != Some((stage, index)) {
            return Step::Nothing;
        }
        if !self.latch.claim(stage, index) {
            return Step::Nothing;
        }
        let delay = self.post_delay(stage, index);
        self.schedule(delay, SequencerEvent::Advance { stage, index })
    }

    /// The timer that was outstanding when the owner cancelled its timers.
    pub fn resume(&self) -> Step {
        match self.pending {
            Some((after_ms, event)) => Step::Schedule { after_ms, event },
            None => Step::Nothing,
        }
    }

    fn advance(&mut self, stage: Stage, index: usize) {
        let next = index + 1;
        match stage {
            Stage::Primary if next < self.lines.len() => {
                self.completed = next;
                self.phase = Phase::Line(next);
            }
            Stage::Primary => {
                self.completed = self.lines.len();
                self.phase = if self.aux.is_empty() {
                    Phase::Complete
                } else {
                    Phase::Auxiliary(0)
                };
            }
            Stage::Auxiliary if next < self.aux.len() => {
                self.aux_completed = next;
                self.phase = Phase::Auxiliary(next);
            }
            Stage::Auxiliary => {
                self.aux_completed = self.aux.len();
                self.phase = Phase::Complete;
            }
        }
        tracing::trace!(phase = ?self.phase, completed = self.completed, "advanced");
        if self.phase == Phase::Complete {
            tracing::debug!(lines = self.lines.len(), aux = self.aux.len(), "sequence complete");
        }
    }

    fn begin(&mut self) -> Step {
        let Some((stage, index)) = self.phase.cursor() else {
            return Step::Nothing;
        };
        match self.reveal_of(stage, index) {
            Some(Reveal::Typed(_)) => Step::Type { stage, index },
            Some(Reveal::Instant) => {
                let settle = match stage {
                    Stage::Primary => self.plan.settle_ms,
                    Stage::Auxiliary => self.plan.aux_settle_ms,
                };
                self.schedule(settle, SequencerEvent::Settled { stage, index })
            }
            None => Step::Nothing,
        }
    }

    fn schedule(&mut self, after_ms: u64, event: SequencerEvent) -> Step {
        self.pending = Some((after_ms, event));
        Step::Schedule { after_ms, event }
    }

    fn reveal_of(&self, stage: Stage, index: usize) -> Option<Reveal<'_>> {
        match stage {
            Stage::Primary => self.lines.get(index).map(RevealItem::reveal),
            Stage::Auxiliary => self.aux.get(index).map(RevealItem::reveal),
        }
    }

    fn post_delay(&self, stage: Stage, index: usize) -> u64 {
        match stage {
            Stage::Primary => self
                .lines
                .get(index)
                .map_or(0, |line| self.plan.delays.get(line.kind())),
            Stage::Auxiliary => self.plan.aux_delay_ms,
        }
    }

    /// Text to type for a `Step::Type` cursor.
    pub fn typed_text(&self, stage: Stage, index: usize) -> Cow<'_, str> {
        match self.reveal_of(stage, index) {
            Some(Reveal::Typed(text)) => text,
            _ => Cow::Borrowed(""),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the earliest primary line not yet fully revealed.
    pub fn completed_count(&self) -> usize {
        self.completed
    }

    #[cfg(test)]
    pub fn aux_completed_count(&self) -> usize {
        self.aux_completed
    }

    /// Primary lines in final form.
    pub fn completed_lines(&self) -> &[L] {
        &self.lines[..self.completed]
    }

    /// Auxiliary items in final form.
    pub fn completed_aux(&self) -> &[A] {
        &self.aux[..self.aux_completed]
    }

    /// The primary line currently animating.
    pub fn active_line(&self) -> Option<(usize, &L)> {
        match self.phase {
            Phase::Line(index) => self.lines.get(index).map(|line| (index, line)),
            _ => None,
        }
    }

    /// The auxiliary item currently animating.
    pub fn active_aux(&self) -> Option<(usize, &A)> {
        match self.phase {
            Phase::Auxiliary(index) => self.aux.get(index).map(|item| (index, item)),
            _ => None,
        }
    }

    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::timing::DelayTable;
    use crate::model::LineKind;

    #[derive(Debug, Clone)]
    enum TestLine {
        Cmd(&'static str),
        Out,
    }

    impl RevealItem for TestLine {
        fn kind(&self) -> LineKind {
            match self {
                Self::Cmd(_) => LineKind::Command,
                Self::Out => LineKind::Output,
            }
        }

        fn reveal(&self) -> Reveal<'_> {
            match self {
                Self::Cmd(text) => Reveal::Typed(Cow::Borrowed(text)),
                Self::Out => Reveal::Instant,
            }
        }
    }

    #[derive(Debug, Clone)]
    struct Card;

    impl RevealItem for Card {
        fn kind(&self) -> LineKind {
            LineKind::Project
        }

        fn reveal(&self) -> Reveal<'_> {
            Reveal::Instant
        }
    }

    fn plan() -> RevealPlan {
        RevealPlan::new(
            DelayTable::new(0)
                .with(LineKind::Command, 300)
                .with(LineKind::Output, 400),
        )
        .auxiliary(50, 250)
    }

    /// Run a sequencer to completion, treating every typed line as done
    /// the moment it starts. Returns the completed-count after each step.
    fn run<A: RevealItem>(seq: &mut RevealSequencer<TestLine, A>) -> Vec<usize> {
        let step = seq.trigger();
        drive(seq, step)
    }

    fn drive<A: RevealItem>(seq: &mut RevealSequencer<TestLine, A>, mut step: Step) -> Vec<usize> {
        let mut counts = Vec::new();
        for _ in 0..1_000 {
            counts.push(seq.completed_count());
            step = match step {
                Step::Nothing => break,
                Step::Schedule { event, .. } => seq.handle(event),
                Step::Type { stage, index } => seq.complete(stage, index),
            };
        }
        counts
    }

    #[test]
    fn walks_every_line_then_completes() {
        let mut seq: RevealSequencer<TestLine> = RevealSequencer::new(
            vec![TestLine::Cmd("cat a"), TestLine::Out, TestLine::Out],
            vec![],
            plan(),
        );
        let counts = run(&mut seq);
        assert!(counts.windows(2).all(|w| w[0] <= w[1]), "monotonic: {counts:?}");
        assert_eq!(seq.phase(), Phase::Complete);
        assert_eq!(seq.completed_count(), 3);
        assert_eq!(seq.completed_lines().len(), 3);
    }

    #[test]
    fn start_waits_for_the_start_delay() {
        let mut seq: RevealSequencer<TestLine> =
            RevealSequencer::new(vec![TestLine::Out], vec![], plan().start_delay(120));
        assert_eq!(
            seq.trigger(),
            Step::Schedule {
                after_ms: 120,
                event: SequencerEvent::Start
            }
        );
        assert_eq!(seq.phase(), Phase::Idle);
    }

    #[test]
    fn trigger_fires_once_per_sequence() {
        let mut seq: RevealSequencer<TestLine> =
            RevealSequencer::new(vec![TestLine::Out], vec![], plan());
        let armed = seq.trigger();
        assert!(matches!(armed, Step::Schedule { .. }));
        assert_eq!(seq.trigger(), Step::Nothing);
        drive(&mut seq, armed);
        assert!(seq.is_complete());
        assert_eq!(seq.trigger(), Step::Nothing);
        assert_eq!(seq.handle(SequencerEvent::Start), Step::Nothing);
        assert!(seq.is_complete());
    }

    #[test]
    fn typed_lines_request_a_typewriter() {
        let mut seq: RevealSequencer<TestLine> =
            RevealSequencer::new(vec![TestLine::Cmd("ls"), TestLine::Out], vec![], plan());
        seq.trigger();
        let step = seq.handle(SequencerEvent::Start);
        assert_eq!(
            step,
            Step::Type {
                stage: Stage::Primary,
                index: 0
            }
        );
        assert_eq!(seq.typed_text(Stage::Primary, 0), "ls");
    }

    #[test]
    fn completion_is_accepted_once() {
        let mut seq: RevealSequencer<TestLine> =
            RevealSequencer::new(vec![TestLine::Cmd("ls"), TestLine::Out], vec![], plan());
        seq.trigger();
        seq.handle(SequencerEvent::Start);
        let first = seq.complete(Stage::Primary, 0);
        assert_eq!(
            first,
            Step::Schedule {
                after_ms: 300,
                event: SequencerEvent::Advance {
                    stage: Stage::Primary,
                    index: 0
                }
            }
        );
        for _ in 0..5 {
            assert_eq!(seq.complete(Stage::Primary, 0), Step::Nothing);
        }
        assert_eq!(seq.completed_count(), 0);
    }

    #[test]
    fn stale_events_are_ignored() {
        let mut seq: RevealSequencer<TestLine> =
            RevealSequencer::new(vec![TestLine::Out, TestLine::Out], vec![], plan());
        run(&mut seq);
        let stale = SequencerEvent::Advance {
            stage: Stage::Primary,
            index: 0,
        };
        assert_eq!(seq.handle(stale), Step::Nothing);
        assert_eq!(seq.complete(Stage::Primary, 1), Step::Nothing);
        assert_eq!(seq.completed_count(), 2);
    }

    #[test]
    fn auxiliary_stage_follows_the_primary_list() {
        let mut seq = RevealSequencer::new(vec![TestLine::Out], vec![Card, Card], plan());
        seq.trigger();
        seq.handle(SequencerEvent::Start);
        let settle = seq.handle(SequencerEvent::Settled {
            stage: Stage::Primary,
            index: 0,
        });
        assert!(matches!(settle, Step::Schedule { after_ms: 400, .. }));
        let step = seq.handle(SequencerEvent::Advance {
            stage: Stage::Primary,
            index: 0,
        });
        assert_eq!(seq.phase(), Phase::Auxiliary(0));
        assert_eq!(seq.completed_count(), 1);
        assert_eq!(
            step,
            Step::Schedule {
                after_ms: 50,
                event: SequencerEvent::Settled {
                    stage: Stage::Auxiliary,
                    index: 0
                }
            }
        );
        let step = seq.handle(SequencerEvent::Settled {
            stage: Stage::Auxiliary,
            index: 0,
        });
        assert!(matches!(step, Step::Schedule { after_ms: 250, .. }));
        seq.handle(SequencerEvent::Advance {
            stage: Stage::Auxiliary,
            index: 0,
        });
        assert_eq!(seq.phase(), Phase::Auxiliary(1));
        assert_eq!(seq.aux_completed_count(), 1);
        seq.handle(SequencerEvent::Settled {
            stage: Stage::Auxiliary,
            index: 1,
        });
        seq.handle(SequencerEvent::Advance {
            stage: Stage::Auxiliary,
            index: 1,
        });
        assert!(seq.is_complete());
        assert_eq!(seq.aux_completed_count(), 2);
    }

    #[test]
    fn empty_sequences_complete_on_start() {
        let mut seq: RevealSequencer<TestLine> = RevealSequencer::new(vec![], vec![], plan());
        seq.trigger();
        assert_eq!(seq.handle(SequencerEvent::Start), Step::Nothing);
        assert!(seq.is_complete());
        assert_eq!(seq.completed_count(), 0);
    }

    #[test]
    fn resume_reissues_the_outstanding_timer() {
        let mut seq: RevealSequencer<TestLine> =
            RevealSequencer::new(vec![TestLine::Out, TestLine::Out], vec![], plan());
        let armed = seq.trigger();
        assert_eq!(seq.resume(), armed);
        let settle = seq.handle(SequencerEvent::Start);
        assert_eq!(seq.resume(), settle);
        seq.handle(SequencerEvent::Settled {
            stage: Stage::Primary,
            index: 0,
        });
        assert!(matches!(
            seq.resume(),
            Step::Schedule {
                event: SequencerEvent::Advance { index: 0, .. },
                ..
            }
        ));
    }

    #[test]
    fn reset_restores_idle_and_the_start_guard() {
        let mut seq: RevealSequencer<TestLine> =
            RevealSequencer::new(vec![TestLine::Out], vec![], plan());
        run(&mut seq);
        assert!(seq.is_complete());
        seq.reset(vec![TestLine::Out, TestLine::Out], vec![]);
        assert_eq!(seq.phase(), Phase::Idle);
        assert_eq!(seq.completed_count(), 0);
        assert!(!seq.has_started());
        run(&mut seq);
        assert_eq!(seq.completed_count(), 2);
    }
}
