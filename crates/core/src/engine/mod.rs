//! Clock-free animation engine shared by every tab.

pub mod runtime;
pub mod scheduler;
pub mod sequencer;
pub mod timing;
pub mod typewriter;

pub use runtime::TabRuntime;
pub use scheduler::{Fired, Scheduler};
pub use sequencer::{Phase, RevealSequencer, SequencerEvent, Stage, Step};
pub use timing::{DelayTable, RevealPlan};
pub use typewriter::{MotionPolicy, Progress, Typewriter, TypewriterTiming};
