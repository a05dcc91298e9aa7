//! Simulated playback: who is playing, how far along, and what comes next.

pub mod sequencer;
pub mod state;
pub mod timer;

pub use sequencer::{Direction, Sequencer, TickOutcome};
pub use state::PlaybackState;
pub use timer::{PlaybackTick, ProgressTimer, TickScheduler};
