use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::future::BoxFuture;
use tokio::sync::mpsc;

use moodwave::app::config::UserConfig;
use moodwave::app::events::AppEvent;
use moodwave::app::{inputs, App, ViewState};
use moodwave::catalog::{static_catalog, CatalogName};
use moodwave::error::Result;
use moodwave::mood::{MoodLookup, PlaylistGenerator};
use moodwave::playback::Direction;
use moodwave::ui::Theme;

const REPLY: &str = r#"[
  {"title": "Nightcall", "artist": "Kavinsky", "album": "OutRun", "genre": "Synthwave", "moodReason": "Neon drive"},
  {"title": "Resonance", "artist": "HOME", "album": "Odyssey", "genre": "Chillwave", "moodReason": "Keeps you typing"}
]"#;

struct CannedGenerator(&'static str);

impl PlaylistGenerator for CannedGenerator {
    fn generate<'a>(&'a self, _prompt: &'a str) -> BoxFuture<'a, Result<String>> {
        let reply = self.0.to_string();
        Box::pin(async move { Ok(reply) })
    }
}

/// Helper to create a test app instance
fn create_test_app() -> App {
    App::new(&UserConfig::default(), Theme::default())
}

fn harness() -> (MoodLookup, mpsc::Sender<AppEvent>, mpsc::Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel(16);
    (MoodLookup::new(Arc::new(CannedGenerator(REPLY))), tx, rx)
}

fn press(app: &mut App, lookup: &MoodLookup, tx: &mpsc::Sender<AppEvent>, code: KeyCode) {
    inputs::handle_event(KeyEvent::new(code, KeyModifiers::NONE), app, lookup, tx);
}

fn type_text(app: &mut App, lookup: &MoodLookup, tx: &mpsc::Sender<AppEvent>, text: &str) {
    for c in text.chars() {
        press(app, lookup, tx, KeyCode::Char(c));
    }
}

fn current_title(app: &App) -> Option<String> {
    app.sequencer
        .state()
        .current_track()
        .map(|t| t.title.clone())
}

#[test]
fn test_app_initialization() {
    let app = create_test_app();
    assert!(app.is_running);
    assert_eq!(app.view, ViewState::Home);
    assert!(!app.sequencer.state().has_track());
    assert!(!app.sequencer.state().is_playing());
    assert_eq!(app.visible_songs().len(), 7);
}

#[test]
fn test_view_switching_keys() {
    let mut app = create_test_app();
    let (lookup, tx, _rx) = harness();

    press(&mut app, &lookup, &tx, KeyCode::Char('4'));
    assert_eq!(app.view, ViewState::AiMood);

    press(&mut app, &lookup, &tx, KeyCode::Tab);
    assert_eq!(app.view, ViewState::Home);

    press(&mut app, &lookup, &tx, KeyCode::BackTab);
    assert_eq!(app.view, ViewState::AiMood);

    press(&mut app, &lookup, &tx, KeyCode::Char('3'));
    assert_eq!(app.view, ViewState::Library);
    assert_eq!(app.visible_songs(), static_catalog(CatalogName::RecentlyPlayed));
}

#[test]
fn test_enter_plays_then_pauses_selected_row() {
    let mut app = create_test_app();
    let (lookup, tx, _rx) = harness();

    press(&mut app, &lookup, &tx, KeyCode::Char('j'));
    press(&mut app, &lookup, &tx, KeyCode::Enter);
    assert_eq!(current_title(&app).as_deref(), Some("Blinding Lights"));
    assert!(app.sequencer.state().is_playing());

    // Same row again toggles instead of restarting
    press(&mut app, &lookup, &tx, KeyCode::Enter);
    assert_eq!(current_title(&app).as_deref(), Some("Blinding Lights"));
    assert!(!app.sequencer.state().is_playing());

    press(&mut app, &lookup, &tx, KeyCode::Char(' '));
    assert!(app.sequencer.state().is_playing());
}

#[test]
fn test_next_previous_walk_the_default_catalog() {
    let mut app = create_test_app();
    app.play_featured();
    assert_eq!(current_title(&app).as_deref(), Some("Midnight City"));

    // Previous stops at the head of the catalog
    app.toast = None;
    app.advance(Direction::Previous);
    assert_eq!(current_title(&app).as_deref(), Some("Midnight City"));
    assert!(app.toast.is_none());

    app.advance(Direction::Next);
    app.advance(Direction::Next);
    assert_eq!(current_title(&app).as_deref(), Some("Heat Waves"));
    app.advance(Direction::Previous);
    assert_eq!(current_title(&app).as_deref(), Some("Blinding Lights"));
    assert!(app.toast.is_some());

    // Next from the last row wraps around
    let last = static_catalog(CatalogName::RecentlyPlayed)[1].clone();
    app.play(&last);
    app.advance(Direction::Next);
    assert_eq!(current_title(&app).as_deref(), Some("Midnight City"));
}

#[test]
fn test_advance_without_track_is_silent() {
    let mut app = create_test_app();
    app.advance(Direction::Next);
    assert!(!app.sequencer.state().has_track());
    assert!(app.toast.is_none());
}

#[test]
fn test_search_typing() {
    let mut app = create_test_app();
    let (lookup, tx, _rx) = harness();

    press(&mut app, &lookup, &tx, KeyCode::Char('2'));
    press(&mut app, &lookup, &tx, KeyCode::Char('/'));
    assert!(app.search_active);

    // Bound keys are plain text while typing
    type_text(&mut app, &lookup, &tx, "dream");
    assert_eq!(app.search_query, "dream");
    assert_eq!(app.view, ViewState::Search);
    assert!(!app.search_results.is_empty());
    assert!(app
        .search_results
        .iter()
        .any(|s| s.title == "Dreams" || s.album == "Dreamland"));

    press(&mut app, &lookup, &tx, KeyCode::Esc);
    assert!(!app.search_active);
    press(&mut app, &lookup, &tx, KeyCode::Enter);
    assert!(app.sequencer.state().has_track());
}

#[tokio::test]
async fn test_mood_dj_round_trip() {
    let mut app = create_test_app();
    let (lookup, tx, mut rx) = harness();

    press(&mut app, &lookup, &tx, KeyCode::Char('4'));
    press(&mut app, &lookup, &tx, KeyCode::Char('i'));
    type_text(&mut app, &lookup, &tx, "late night coding");
    press(&mut app, &lookup, &tx, KeyCode::Enter);
    assert!(app.mood.is_loading());
    assert!(!app.mood.editing);

    match rx.recv().await {
        Some(AppEvent::MoodResult { request, mood, songs }) => {
            app.apply_mood_result(request, mood, songs)
        }
        _ => panic!("expected a mood result"),
    }

    assert!(!app.mood.is_loading());
    assert_eq!(app.mood.curated_for, "late night coding");
    assert_eq!(app.visible_songs().len(), 2);
    let first = &app.mood.songs[0];
    assert!(first.id.starts_with("ai-"));
    assert_eq!(first.mood_note.as_deref(), Some("Neon drive"));

    // Mood results play like any other row
    press(&mut app, &lookup, &tx, KeyCode::Enter);
    assert_eq!(current_title(&app).as_deref(), Some("Nightcall"));
}

#[tokio::test]
async fn test_blank_mood_submit_does_nothing() {
    let mut app = create_test_app();
    let (lookup, tx, mut rx) = harness();

    press(&mut app, &lookup, &tx, KeyCode::Char('4'));
    press(&mut app, &lookup, &tx, KeyCode::Char('i'));
    type_text(&mut app, &lookup, &tx, "   ");
    press(&mut app, &lookup, &tx, KeyCode::Enter);

    assert!(!app.mood.is_loading());
    assert!(!app.mood.has_searched);
    drop(tx);
    assert!(rx.recv().await.is_none());
}

#[test]
fn test_quit_and_help_keys() {
    let mut app = create_test_app();
    let (lookup, tx, _rx) = harness();

    press(&mut app, &lookup, &tx, KeyCode::Char('?'));
    assert!(app.show_keyhints);
    press(&mut app, &lookup, &tx, KeyCode::Esc);
    assert!(!app.show_keyhints);

    press(&mut app, &lookup, &tx, KeyCode::Char('q'));
    assert!(!app.is_running);
}
