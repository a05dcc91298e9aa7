use crossterm::event::KeyEvent;

use crate::app::App;

pub fn handle_browse_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    if keys.matches(key, &keys.nav_down) || keys.matches(key, &keys.nav_down_alt) {
        app.select_next();
        return true;
    }

    if keys.matches(key, &keys.nav_up) || keys.matches(key, &keys.nav_up_alt) {
        app.select_prev();
        return true;
    }

    // Same row twice toggles pause, like clicking a song card again
    if keys.matches(key, &keys.select) {
        app.play_selected();
        return true;
    }

    false
}
