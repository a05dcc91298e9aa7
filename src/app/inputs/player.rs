use crossterm::event::KeyEvent;

use crate::app::App;
use crate::playback::Direction;

pub fn handle_player_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    // Play/Pause ('Space')
    if keys.matches(key, &keys.play_pause) {
        app.toggle_play();
        return true;
    }

    // Next Track ('n')
    if keys.matches(key, &keys.next_track) {
        app.advance(Direction::Next);
        return true;
    }

    // Prev Track ('p')
    if keys.matches(key, &keys.prev_track) {
        app.advance(Direction::Previous);
        return true;
    }

    // Featured mix ('f')
    if keys.matches(key, &keys.play_featured) {
        app.play_featured();
        return true;
    }

    false
}
