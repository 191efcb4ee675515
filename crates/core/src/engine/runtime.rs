//! One tab's animation runtime: a sequencer, its private timer queue and
//! the typewriter of the command line being typed.

use std::convert::Infallible;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::scheduler::Scheduler;
use super::sequencer::{RevealSequencer, SequencerEvent, Stage, Step};
use super::timing::RevealPlan;
use super::typewriter::{MotionPolicy, Typewriter, TypewriterTiming};
use crate::model::RevealItem;

#[derive(Debug, Clone)]
struct ActiveTyping {
    stage: Stage,
    index: usize,
    /// Host time corresponding to typewriter time zero.
    origin_ms: u64,
    writer: Typewriter,
}

#[derive(Debug, Clone)]
pub struct TabRuntime<L, A = Infallible> {
    sequencer: RevealSequencer<L, A>,
    scheduler: Scheduler<SequencerEvent>,
    typing: Option<ActiveTyping>,
    timing: TypewriterTiming,
    motion: MotionPolicy,
    rng: StdRng,
    visible: bool,
}

impl<L: RevealItem, A: RevealItem> TabRuntime<L, A> {
    pub fn new(lines: Vec<L>, aux: Vec<A>, plan: RevealPlan, motion: MotionPolicy, rng: StdRng) -> Self {
        Self {
            sequencer: RevealSequencer::new(lines, aux, plan),
            scheduler: Scheduler::new(),
            typing: None,
            timing: TypewriterTiming::COMMAND,
            motion,
            rng,
            visible: false,
        }
    }

    pub fn with_typing(mut self, timing: TypewriterTiming) -> Self {
        self.timing = timing;
        self
    }

    /// `visible` is "this is the active tab and content has hydrated".
    ///
    /// Showing a tab for the first time arms its start trigger; showing it
    /// again resumes where it stopped. Hiding cancels every pending timer
    /// and freezes the typewriter, so a hidden tab never changes state.
    pub fn set_visible(&mut self, visible: bool, now_ms: u64) -> bool {
        if visible == self.visible {
            return false;
        }
        self.visible = visible;
        if visible {
            if let Some(typing) = self.typing.as_mut() {
                typing.origin_ms = now_ms.saturating_sub(typing.writer.elapsed_ms());
            }
            let step = if self.sequencer.has_started() {
                self.sequencer.resume()
            } else {
                self.sequencer.trigger()
            };
            self.apply(step, now_ms);
        } else {
            let dropped = self.scheduler.cancel_all();
            tracing::debug!(dropped, "tab hidden, timers cancelled");
        }
        true
    }

    /// Swap in a regenerated sequence (locale change). All progress is
    /// discarded; a visible tab starts over right away.
    pub fn reload(&mut self, lines: Vec<L>, aux: Vec<A>, now_ms: u64) {
        self.scheduler.cancel_all();
        self.typing = None;
        self.sequencer.reset(lines, aux);
        if self.visible {
            let step = self.sequencer.trigger();
            self.apply(step, now_ms);
        }
    }

    /// Fire everything due at or before `now_ms`. Returns whether anything
    /// visible changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.visible {
            return false;
        }
        let mut changed = false;
        loop {
            let mut progressed = false;

            let typed = match self.typing.as_mut() {
                Some(typing) => {
                    let elapsed = now_ms.saturating_sub(typing.origin_ms);
                    let dt = elapsed.saturating_sub(typing.writer.elapsed_ms());
                    let progress = typing.writer.advance(dt);
                    changed |= progress.revealed > 0;
                    progress
                        .completed_at
                        .map(|at| (typing.stage, typing.index, typing.origin_ms + at))
                }
                None => None,
            };
            if let Some((stage, index, done_ms)) = typed {
                let step = self.sequencer.complete(stage, index);
                self.apply(step, done_ms);
                changed = true;
                progressed = true;
            }

            if let Some(fired) = self.scheduler.poll(now_ms) {
                tracing::trace!(due_ms = fired.due_ms, event = ?fired.event, "timer fired");
                let step = self.sequencer.handle(fired.event);
                self.apply(step, fired.due_ms);
                changed = true;
                progressed = true;
            }

            if !progressed {
                return changed;
            }
        }
    }

    fn apply(&mut self, step: Step, at_ms: u64) {
        match step {
            Step::Nothing => {}
            Step::Schedule { after_ms, event } => self.scheduler.schedule(at_ms, after_ms, event),
            Step::Type { stage, index } => {
                let text = self.sequencer.typed_text(stage, index).into_owned();
                let rng = StdRng::seed_from_u64(self.rng.random());
                self.typing = Some(ActiveTyping {
                    stage,
                    index,
                    origin_ms: at_ms,
                    writer: Typewriter::new(text, self.timing, self.motion, rng),
                });
            }
        }
    }

    /// The revealed prefix of the line at `(stage, index)`, if it is the
    /// line being typed, and whether the typewriter is still going.
    pub fn typed(&self, stage: Stage, index: usize) -> Option<(&str, bool)> {
        self.typing
            .as_ref()
            .filter(|t| t.stage == stage && t.index == index)
            .map(|t| (t.writer.displayed(), !t.writer.is_complete()))
    }

    /// When the host should tick next, or `None` when nothing is pending.
    pub fn next_wakeup(&self) -> Option<u64> {
        if !self.visible {
            return None;
        }
        let typing = self
            .typing
            .as_ref()
            .and_then(|t| t.writer.next_event_ms().map(|at| t.origin_ms + at));
        match (typing, self.scheduler.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn sequencer(&self) -> &RevealSequencer<L, A> {
        &self.sequencer
    }

    #[cfg(test)]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::engine::sequencer::Phase;
    use crate::engine::timing::DelayTable;
    use crate::model::{LineKind, Reveal};

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

    fn runtime(seed: u64) -> TabRuntime<TestLine> {
        let plan = RevealPlan::new(
            DelayTable::new(0)
                .with(LineKind::Command, 300)
                .with(LineKind::Output, 400),
        );
        TabRuntime::new(
            vec![TestLine::Cmd("hello"), TestLine::Out, TestLine::Cmd("ls"), TestLine::Out],
            Vec::new(),
            plan,
            MotionPolicy::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    fn snapshot(rt: &TabRuntime<TestLine>) -> (Phase, usize, Option<String>) {
        let typed = rt
            .sequencer()
            .phase()
            .cursor()
            .and_then(|(stage, index)| rt.typed(stage, index))
            .map(|(text, _)| text.to_string());
        (rt.sequencer().phase(), rt.sequencer().completed_count(), typed)
    }

    #[test]
    fn runs_to_completion_in_virtual_time() {
        let mut rt = runtime(1);
        rt.set_visible(true, 0);
        assert_eq!(rt.next_wakeup(), Some(300));

        rt.tick(10_000);
        assert!(rt.sequencer().is_complete());
        assert_eq!(rt.sequencer().completed_count(), 4);
        assert_eq!(rt.next_wakeup(), None);
    }

    #[test]
    fn hidden_tab_never_changes() {
        let mut rt = runtime(2);
        rt.set_visible(true, 0);
        rt.tick(100);
        rt.set_visible(false, 100);
        assert_eq!(rt.pending_timers(), 0);

        let before = snapshot(&rt);
        assert!(!rt.tick(60_000));
        assert_eq!(snapshot(&rt), before);
        assert_eq!(rt.next_wakeup(), None);
    }

    #[test]
    fn showing_again_resumes_mid_command() {
        let mut rt = runtime(3);
        rt.set_visible(true, 0);
        // Start fires at 300, the first character lands one prompt delay later.
        rt.tick(610);
        let (_, _, typed) = snapshot(&rt);
        assert_eq!(typed.as_deref(), Some("h"));

        rt.set_visible(false, 610);
        rt.set_visible(true, 30_000);
        assert_eq!(snapshot(&rt).2.as_deref(), Some("h"));
        assert_eq!(rt.sequencer().phase(), Phase::Line(0));

        rt.tick(40_000);
        assert!(rt.sequencer().is_complete());
    }

    #[test]
    fn completed_tab_stays_complete_when_shown_again() {
        let mut rt = runtime(4);
        rt.set_visible(true, 0);
        rt.tick(10_000);
        rt.set_visible(false, 10_000);
        rt.set_visible(true, 20_000);
        assert!(!rt.tick(30_000));
        assert!(rt.sequencer().is_complete());
        assert_eq!(rt.pending_timers(), 0);
    }

    #[test]
    fn tick_granularity_does_not_change_the_outcome() {
        let mut fine = runtime(9);
        let mut coarse = runtime(9);
        fine.set_visible(true, 0);
        coarse.set_visible(true, 0);

        let mut now = 0;
        while now < 5_000 {
            for t in now + 1..=now + 250 {
                fine.tick(t);
            }
            now += 250;
            coarse.tick(now);
            assert_eq!(snapshot(&fine), snapshot(&coarse), "diverged at {now}ms");
        }
        assert!(coarse.sequencer().is_complete());
    }

    #[test]
    fn reload_restarts_a_visible_tab() {
        let mut rt = runtime(5);
        rt.set_visible(true, 0);
        rt.tick(10_000);

        rt.reload(vec![TestLine::Cmd("pwd")], Vec::new(), 10_000);
        assert_eq!(rt.sequencer().phase(), Phase::Idle);
        assert_eq!(rt.next_wakeup(), Some(10_300));

        rt.tick(10_300);
        assert_eq!(rt.sequencer().phase(), Phase::Line(0));
    }

    #[test]
    fn reload_leaves_a_hidden_tab_unstarted() {
        let mut rt = runtime(6);
        rt.reload(vec![TestLine::Out], Vec::new(), 0);
        assert!(!rt.sequencer().has_started());
        assert_eq!(rt.pending_timers(), 0);
    }
}
