use std::time::Duration;

use crate::catalog::SongDescriptor;

/// Session playback state. Only [`super::Sequencer`] writes to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    pub(super) current_track: Option<SongDescriptor>,
    pub(super) is_playing: bool,
    pub(super) position: Duration,
}

impl PlaybackState {
    pub fn current_track(&self) -> Option<&SongDescriptor> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn has_track(&self) -> bool {
        self.current_track.is_some()
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    /// Elapsed share of the current track, clamped to `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        match &self.current_track {
            Some(track) => {
                let total = track.duration().as_secs_f64();
                (self.position.as_secs_f64() / total).clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }

    pub fn is_current(&self, id: &str) -> bool {
        self.current_track.as_ref().is_some_and(|t| t.id == id)
    }

    pub(super) fn load(&mut self, track: SongDescriptor) {
        self.current_track = Some(track);
        self.is_playing = true;
        self.position = Duration::ZERO;
    }
}
