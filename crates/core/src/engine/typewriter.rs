//! Character-by-character reveal of command lines.
//!
//! Frame driven: the host feeds elapsed time through [`Typewriter::advance`]
//! and the typewriter emits a character whenever its clock crosses the
//! current per-character threshold. Feeding the same total time in one
//! call or in many produces the same reveal sequence.

use rand::Rng;
use rand::rngs::StdRng;
use serde::Deserialize;

use super::timing::{COMMAND_CHAR_JITTER_MS, COMMAND_CHAR_MS, MIN_CHAR_DELAY_MS, PROMPT_DELAY_MS};

/// Environment preferences layered over the typing schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MotionPolicy {
    /// Show the whole string at once.
    pub reduced_motion: bool,
    /// Halve the interval and jitter.
    pub touch: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub base_ms: u64,
    pub jitter_ms: u64,
    /// Delay before the first character; `0` means one base interval.
    pub initial_delay_ms: u64,
}

impl TypewriterTiming {
    pub const COMMAND: Self = Self {
        base_ms: COMMAND_CHAR_MS,
        jitter_ms: COMMAND_CHAR_JITTER_MS,
        initial_delay_ms: PROMPT_DELAY_MS,
    };

    pub fn for_motion(self, motion: MotionPolicy) -> Self {
        if motion.touch {
            Self {
                base_ms: self.base_ms / 2,
                jitter_ms: self.jitter_ms / 2,
                ..self
            }
        } else {
            self
        }
    }
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self::COMMAND
    }
}

/// Result of one [`Typewriter::advance`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    /// Characters revealed during this call.
    pub revealed: usize,
    /// Set on exactly one call per target: the typewriter-clock time at
    /// which the reveal finished.
    pub completed_at: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    target: String,
    /// Byte offset just past each character of `target`.
    ends: Vec<usize>,
    shown: usize,
    clock_ms: u64,
    next_at_ms: u64,
    timing: TypewriterTiming,
    instant: bool,
    rng: StdRng,
    complete: bool,
    notified: bool,
}

impl Typewriter {
    pub fn new(
        target: impl Into<String>,
        timing: TypewriterTiming,
        motion: MotionPolicy,
        rng: StdRng,
    ) -> Self {
        let mut writer = Self {
            target: String::new(),
            ends: Vec::new(),
            shown: 0,
            clock_ms: 0,
            next_at_ms: 0,
            timing: timing.for_motion(motion),
            instant: motion.reduced_motion,
            rng,
            complete: false,
            notified: false,
        };
        writer.restart(target.into());
        writer
    }

    fn restart(&mut self, target: String) {
        self.ends = target.char_indices().map(|(i, c)| i + c.len_utf8()).collect();
        self.target = target;
        self.clock_ms = 0;
        self.next_at_ms = if self.timing.initial_delay_ms > 0 {
            self.timing.initial_delay_ms
        } else {
            self.timing.base_ms
        };
        self.notified = false;
        if self.ends.is_empty() || self.instant {
            self.shown = self.ends.len();
            self.complete = true;
        } else {
            self.shown = 0;
            self.complete = false;
        }
    }

    pub fn advance(&mut self, dt_ms: u64) -> Progress {
        let before = self.shown;
        if self.notified {
            self.clock_ms += dt_ms;
            return Progress::default();
        }
        if self.complete {
            // Empty target or reduced motion: done before any time passed.
            self.notified = true;
            let at = self.clock_ms;
            self.clock_ms += dt_ms;
            return Progress {
                revealed: 0,
                completed_at: Some(at),
            };
        }

        self.clock_ms += dt_ms;
        let mut completed_at = None;
        while self.next_at_ms <= self.clock_ms {
            if self.shown < self.ends.len() {
                self.shown += 1;
                self.next_at_ms += self.char_delay();
            } else {
                self.complete = true;
                self.notified = true;
                completed_at = Some(self.next_at_ms);
                break;
            }
        }
        Progress {
            revealed: self.shown - before,
            completed_at,
        }
    }

    fn char_delay(&mut self) -> u64 {
        let jitter = self.timing.jitter_ms as i64;
        let spread = if jitter == 0 {
            0
        } else {
            self.rng.random_range(-jitter..=jitter)
        };
        (self.timing.base_ms as i64 + spread).max(MIN_CHAR_DELAY_MS as i64) as u64
    }

    /// The revealed prefix.
    pub fn displayed(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.target[..self.ends[n - 1]],
        }
    }

    #[cfg(test)]
    pub fn shown_chars(&self) -> usize {
        self.shown
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Typewriter-clock time of the next character or of the completion
    /// report. `None` once settled.
    pub fn next_event_ms(&self) -> Option<u64> {
        match (self.notified, self.complete) {
            (true, _) => None,
            (false, true) => Some(self.clock_ms),
            (false, false) => Some(self.next_at_ms),
        }
    }

    /// Time fed in so far for the current target.
    pub fn elapsed_ms(&self) -> u64 {
        self.clock_ms
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;

    fn writer(text: &str, motion: MotionPolicy) -> Typewriter {
        Typewriter::new(
            text,
            TypewriterTiming::COMMAND,
            motion,
            StdRng::seed_from_u64(7),
        )
    }

    /// Drive in 1 ms steps, recording every observed prefix length and the
    /// number of completion signals.
    fn drive(w: &mut Typewriter, limit_ms: u64) -> (Vec<usize>, usize) {
        let mut lengths = vec![w.shown_chars()];
        let mut completions = 0;
        for _ in 0..limit_ms {
            let p = w.advance(1);
            if p.revealed > 0 {
                lengths.push(w.shown_chars());
            }
            if p.completed_at.is_some() {
                completions += 1;
            }
        }
        (lengths, completions)
    }

    #[test]
    fn reveals_one_char_at_a_time_and_completes_once() {
        let mut w = writer("cat about-me.txt", MotionPolicy::default());
        let (lengths, completions) = drive(&mut w, 5_000);
        let expected: Vec<usize> = (0..=16).collect();
        assert_eq!(lengths, expected);
        assert_eq!(completions, 1);
        assert!(w.is_complete());
        assert_eq!(w.displayed(), "cat about-me.txt");
    }

    #[test]
    fn nothing_before_the_initial_delay() {
        let mut w = writer("ls", MotionPolicy::default());
        let p = w.advance(PROMPT_DELAY_MS - 1);
        assert_eq!(p.revealed, 0);
        assert_eq!(w.displayed(), "");
        let p = w.advance(1);
        assert_eq!(p.revealed, 1);
        assert_eq!(w.displayed(), "l");
    }

    #[test]
    fn intervals_stay_within_jitter_bounds() {
        let mut w = writer("abcdefghijklmnopqrstuvwxyz", MotionPolicy::default());
        let mut stamps = Vec::new();
        let mut t = 0;
        while !w.is_complete() && t < 10_000 {
            t += 1;
            if w.advance(1).revealed > 0 {
                stamps.push(t);
            }
        }
        assert_eq!(stamps.first(), Some(&PROMPT_DELAY_MS));
        for pair in stamps.windows(2) {
            let gap = pair[1] - pair[0];
            assert!((20..=60).contains(&gap), "gap {gap} outside 40±20");
        }
    }

    #[test]
    fn one_large_step_matches_many_small_steps() {
        let mut coarse = writer("tree", MotionPolicy::default());
        let mut fine = writer("tree", MotionPolicy::default());
        let big = coarse.advance(2_000);
        let mut fine_completed = None;
        for _ in 0..2_000 {
            if let Some(at) = fine.advance(1).completed_at {
                fine_completed = Some(at);
            }
        }
        assert_eq!(big.revealed, 4);
        assert_eq!(big.completed_at, fine_completed);
    }

    #[test]
    fn empty_target_is_complete_immediately() {
        let mut w = writer("", MotionPolicy::default());
        assert!(w.is_complete());
        assert_eq!(w.displayed(), "");
        assert_eq!(
            w.advance(0),
            Progress {
                revealed: 0,
                completed_at: Some(0)
            }
        );
        assert_eq!(w.advance(100).completed_at, None);
    }

    #[test]
    fn reduced_motion_shows_everything_at_once() {
        let motion = MotionPolicy {
            reduced_motion: true,
            touch: false,
        };
        let mut w = writer("cd .. && skills", motion);
        assert_eq!(w.displayed(), "cd .. && skills");
        let (_, completions) = drive(&mut w, 10);
        assert_eq!(completions, 1);
    }

    #[test]
    fn touch_halves_interval_and_jitter() {
        let timing = TypewriterTiming::COMMAND.for_motion(MotionPolicy {
            reduced_motion: false,
            touch: true,
        });
        assert_eq!(timing.base_ms, 20);
        assert_eq!(timing.jitter_ms, 10);
        assert_eq!(timing.initial_delay_ms, PROMPT_DELAY_MS);
    }

    #[test]
    fn delays_never_drop_below_the_floor() {
        let timing = TypewriterTiming {
            base_ms: 5,
            jitter_ms: 20,
            initial_delay_ms: 0,
        };
        let mut w = Typewriter::new(
            "xxxxxxxxxx",
            timing,
            MotionPolicy::default(),
            StdRng::seed_from_u64(1),
        );
        let mut stamps = Vec::new();
        for t in 1..=1_000 {
            if w.advance(1).revealed > 0 {
                stamps.push(t);
            }
        }
        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= MIN_CHAR_DELAY_MS);
        }
    }

    #[test]
    fn multibyte_prefixes_stay_on_char_boundaries() {
        let mut w = writer("経歴を表示", MotionPolicy::default());
        w.advance(PROMPT_DELAY_MS);
        assert_eq!(w.displayed(), "経");
        w.advance(5_000);
        assert_eq!(w.displayed(), "経歴を表示");
    }
}
