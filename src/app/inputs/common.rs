use crossterm::event::KeyEvent;

use crate::app::{App, ViewState};

pub fn handle_common_events(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();

    if keys.matches(key, &keys.quit) {
        app.is_running = false;
        return true;
    }

    if keys.matches(key, &keys.toggle_keyhints) {
        app.show_keyhints = !app.show_keyhints;
        return true;
    }

    // Esc closes the help popup before anything else sees it
    if app.show_keyhints && keys.matches(key, &keys.cancel) {
        app.show_keyhints = false;
        return true;
    }

    let target = if keys.matches(key, &keys.view_home) {
        Some(ViewState::Home)
    } else if keys.matches(key, &keys.view_search) {
        Some(ViewState::Search)
    } else if keys.matches(key, &keys.view_library) {
        Some(ViewState::Library)
    } else if keys.matches(key, &keys.view_mood) {
        Some(ViewState::AiMood)
    } else if keys.matches(key, &keys.view_next) {
        Some(app.view.next())
    } else if keys.matches(key, &keys.view_prev) {
        Some(app.view.prev())
    } else {
        None
    };

    match target {
        Some(view) => {
            app.set_view(view);
            true
        }
        None => false,
    }
}
