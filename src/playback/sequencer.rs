use std::time::Duration;

use tracing::{debug, info};

use super::state::PlaybackState;
use super::timer::{PlaybackTick, TickScheduler};
use crate::catalog::{OrderedCatalog, SongDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing playing, or a tick from an older arm
    Idle,
    Progressed,
    /// The track ran out and the sequencer moved on
    Advanced,
}

/// Owns [`PlaybackState`] and every transition on it.
///
/// `(has_track = false, is_playing = true)` is unreachable: the only way to
/// set `is_playing` is through a track being loaded or toggled while loaded.
pub struct Sequencer {
    state: PlaybackState,
    catalog: OrderedCatalog,
    tick_interval: Duration,
    scheduler: Option<Box<dyn TickScheduler>>,
    /// Id the scheduler is currently armed for
    armed_for: Option<String>,
    generation: u64,
}

impl Sequencer {
    pub fn new(catalog: OrderedCatalog, tick_interval: Duration) -> Self {
        Self {
            state: PlaybackState::default(),
            catalog,
            tick_interval,
            scheduler: None,
            armed_for: None,
            generation: 0,
        }
    }

    pub fn with_scheduler(mut self, scheduler: Box<dyn TickScheduler>) -> Self {
        self.set_scheduler(scheduler);
        self
    }

    /// Swap in a new scheduler; it is armed immediately if a track is playing.
    pub fn set_scheduler(&mut self, scheduler: Box<dyn TickScheduler>) {
        if let Some(old) = self.scheduler.as_mut() {
            old.disarm();
        }
        self.scheduler = Some(scheduler);
        self.armed_for = None;
        self.reconcile_timer();
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn catalog(&self) -> &OrderedCatalog {
        &self.catalog
    }

    pub fn set_catalog(&mut self, catalog: OrderedCatalog) {
        self.catalog = catalog;
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Load `track`, or toggle pause when it is already the current one.
    pub fn play(&mut self, track: &SongDescriptor) {
        if self.state.is_current(&track.id) {
            self.toggle_play();
            return;
        }
        info!(id = %track.id, title = %track.title, "playing track");
        self.state.load(track.clone());
        self.reconcile_timer();
    }

    pub fn toggle_play(&mut self) {
        if self.state.current_track.is_none() {
            return;
        }
        self.state.is_playing = !self.state.is_playing;
        debug!(is_playing = self.state.is_playing, "toggled playback");
        self.reconcile_timer();
    }

    /// Step through the catalog.
    ///
    /// `Next` wraps to the first entry (also when the current track is not
    /// in the catalog); `Previous` stops at the first entry. The target is
    /// always loaded fresh, so landing on the current track restarts it.
    pub fn advance(&mut self, direction: Direction) {
        let Some(current) = &self.state.current_track else {
            return;
        };
        let index = self.catalog.position_of(&current.id);

        let target = match direction {
            Direction::Next => match index {
                Some(i) if i + 1 < self.catalog.len() => self.catalog.get(i + 1),
                _ => self.catalog.first(),
            },
            Direction::Previous => match index {
                Some(i) if i > 0 => self.catalog.get(i - 1),
                _ => None,
            },
        };

        if let Some(target) = target.cloned() {
            debug!(?direction, from = ?index, to = %target.id, "advancing");
            self.restart_with(target);
        }
    }

    /// Move the progress clock forward by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if !self.state.is_playing {
            return TickOutcome::Idle;
        }
        let Some(track) = &self.state.current_track else {
            return TickOutcome::Idle;
        };
        let duration = track.duration();

        self.state.position += elapsed;
        if self.state.position < duration {
            return TickOutcome::Progressed;
        }

        self.advance(Direction::Next);
        self.state.position = Duration::ZERO;
        TickOutcome::Advanced
    }

    /// Entry point for ticks coming from the scheduler.
    pub fn on_timer_tick(&mut self, tick: PlaybackTick) -> TickOutcome {
        if tick.generation != self.generation || self.armed_for.is_none() {
            debug!(
                tick = tick.generation,
                current = self.generation,
                "dropping stale progress tick"
            );
            return TickOutcome::Idle;
        }
        self.tick(self.tick_interval)
    }

    /// Replace-and-reset, never toggle.
    fn restart_with(&mut self, track: SongDescriptor) {
        self.state.load(track);
        self.reconcile_timer();
    }

    fn reconcile_timer(&mut self) {
        let wanted = if self.state.is_playing {
            self.state.current_track.as_ref().map(|t| t.id.clone())
        } else {
            None
        };
        if wanted == self.armed_for {
            return;
        }

        let Some(scheduler) = self.scheduler.as_mut() else {
            self.armed_for = wanted;
            return;
        };
        scheduler.disarm();
        if wanted.is_some() {
            self.generation += 1;
            scheduler.arm(self.generation, self.tick_interval);
        }
        self.armed_for = wanted;
    }
}
