use crossterm::event::Event;

use crate::catalog::SongDescriptor;
use crate::playback::PlaybackTick;

pub enum AppEvent {
    Input(Event),
    /// UI animation / housekeeping
    Tick,
    Playback(PlaybackTick),
    MoodResult {
        request: u64,
        mood: String,
        songs: Vec<SongDescriptor>,
    },
}

impl From<PlaybackTick> for AppEvent {
    fn from(tick: PlaybackTick) -> Self {
        AppEvent::Playback(tick)
    }
}
