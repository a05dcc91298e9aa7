use crossterm::event::{KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::events::AppEvent;
use crate::app::App;
use crate::mood::MoodLookup;

pub mod browse;
pub mod common;
pub mod player;
pub mod text;

pub fn handle_event(key: KeyEvent, app: &mut App, lookup: &MoodLookup, tx: &mpsc::Sender<AppEvent>) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // 1. Priority: text inputs capture every key while active
    if text::handle_text_input(key, app, lookup, tx) {
        return;
    }

    // 2. Common/Global Keys (Quit, Help, View switching)
    if common::handle_common_events(key, app) {
        return;
    }

    // 3. View specific: open inputs, suggestions
    if text::handle_view_keys(key, app) {
        return;
    }

    // 4. List navigation and selection
    if browse::handle_browse_events(key, app) {
        return;
    }

    // 5. Global Player Controls
    player::handle_player_events(key, app);
}
