use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::events::AppEvent;
use crate::app::{mood, App, ViewState};
use crate::mood::MoodLookup;

/// Feed keys to the active text input. Returns false when none is active.
pub fn handle_text_input(
    key: KeyEvent,
    app: &mut App,
    lookup: &MoodLookup,
    tx: &mpsc::Sender<AppEvent>,
) -> bool {
    if app.search_active {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.search_active = false,
            KeyCode::Backspace => {
                app.search_query.pop();
                app.update_search();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_query.push(c);
                app.update_search();
            }
            _ => {}
        }
        return true;
    }

    if app.mood.editing {
        match key.code {
            KeyCode::Esc => app.mood.editing = false,
            KeyCode::Enter => {
                mood::submit(app, lookup, tx);
                app.selected = 0;
            }
            KeyCode::Backspace => {
                app.mood.input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.mood.input.push(c);
            }
            _ => {}
        }
        return true;
    }

    false
}

/// Keys that open inputs or fill them, per view.
pub fn handle_view_keys(key: KeyEvent, app: &mut App) -> bool {
    let keys = app.keys.clone();
    let wants_input = keys.matches(key, &keys.edit_input) || keys.matches(key, &keys.search);

    match app.view {
        ViewState::Search if wants_input => {
            app.search_active = true;
            true
        }
        ViewState::AiMood if wants_input => {
            app.mood.editing = true;
            true
        }
        ViewState::AiMood if keys.matches(key, &keys.next_suggestion) => {
            app.mood.cycle_suggestion();
            app.mood.editing = true;
            true
        }
        _ => false,
    }
}
