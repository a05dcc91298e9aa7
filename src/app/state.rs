use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tracing::{debug, info};

use super::config::UserConfig;
use super::events::AppEvent;
use super::keys::KeyConfig;
use super::search::fuzzy_search;
use crate::catalog::{default_ordered_catalog, static_catalog, CatalogName, SongDescriptor};
use crate::mood::SUGGESTIONS;
use crate::playback::{Direction, PlaybackTick, ProgressTimer, Sequencer, TickOutcome};
use crate::ui::theme::Theme;

const TOAST_DURATION: Duration = Duration::from_millis(1800);

/// Main panel views, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Search,
    Library,
    AiMood,
}

impl ViewState {
    pub const ALL: [ViewState; 4] = [
        ViewState::Home,
        ViewState::Search,
        ViewState::Library,
        ViewState::AiMood,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewState::Home => "Home",
            ViewState::Search => "Search",
            ViewState::Library => "Your Library",
            ViewState::AiMood => "AI Mood DJ",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ViewState::Home => "⌂",
            ViewState::Search => "⌕",
            ViewState::Library => "♫",
            ViewState::AiMood => "✦",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// AI Mood DJ form and results 🎧
#[derive(Debug, Clone, Default)]
pub struct MoodState {
    pub input: String,
    pub editing: bool,
    /// Prompt the shown results were generated for
    pub curated_for: String,
    pub songs: Vec<SongDescriptor>,
    pub has_searched: bool,
    pub in_flight: usize,
    pub next_suggestion: usize,
    next_request: u64,
    latest_request: u64,
}

impl MoodState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Put the next canned suggestion into the input.
    pub fn cycle_suggestion(&mut self) {
        self.input = SUGGESTIONS[self.next_suggestion % SUGGESTIONS.len()].to_string();
        self.next_suggestion = (self.next_suggestion + 1) % SUGGESTIONS.len();
    }

    /// Register a submission. `None` when the input is blank.
    pub fn begin_request(&mut self) -> Option<(u64, String)> {
        let mood = self.input.trim().to_string();
        if mood.is_empty() {
            return None;
        }
        self.next_request += 1;
        self.latest_request = self.next_request;
        self.in_flight += 1;
        self.has_searched = true;
        self.editing = false;
        Some((self.next_request, mood))
    }

    /// Results are applied in completion order: the last to finish wins.
    pub fn finish_request(&mut self, request: u64, mood: String, songs: Vec<SongDescriptor>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if request != self.latest_request {
            debug!(request, latest = self.latest_request, "older mood lookup completed after a newer one");
        }
        self.curated_for = mood;
        self.songs = songs;
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,
    pub is_running: bool,

    pub view: ViewState,
    pub sequencer: Sequencer,

    /// Row highlighted in the current view's song list
    pub selected: usize,

    pub search_query: String,
    pub search_active: bool,
    pub search_results: Vec<SongDescriptor>,

    pub mood: MoodState,

    /// UI State
    pub show_keyhints: bool,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(config: &UserConfig, theme: Theme) -> Self {
        let sequencer = Sequencer::new(default_ordered_catalog(), config.playback.tick_interval());
        Self {
            theme,
            keys: config.keys.clone(),
            is_running: true,
            view: ViewState::default(),
            sequencer,
            selected: 0,
            search_query: String::new(),
            search_active: false,
            search_results: Vec::new(),
            mood: MoodState::default(),
            show_keyhints: false,
            toast: None,
        }
    }

    /// Drive progress from a real timer posting into the event channel.
    pub fn with_progress_timer(mut self, tx: mpsc::Sender<AppEvent>) -> Self {
        self.sequencer.set_scheduler(Box::new(ProgressTimer::new(tx)));
        self
    }

    pub fn set_view(&mut self, view: ViewState) {
        if self.view != view {
            self.view = view;
            self.selected = 0;
        }
    }

    /// Songs listed in the current view, in display order.
    pub fn visible_songs(&self) -> Vec<SongDescriptor> {
        match self.view {
            ViewState::Home => self.sequencer.catalog().songs().to_vec(),
            ViewState::Search => self.search_results.clone(),
            ViewState::Library => static_catalog(CatalogName::RecentlyPlayed).to_vec(),
            ViewState::AiMood => self.mood.songs.clone(),
        }
    }

    pub fn selected_song(&self) -> Option<SongDescriptor> {
        self.visible_songs().get(self.selected).cloned()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_songs().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_songs().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn play(&mut self, song: &SongDescriptor) {
        self.sequencer.play(song);
        self.toast_playback();
    }

    pub fn play_selected(&mut self) {
        if let Some(song) = self.selected_song() {
            self.play(&song);
        }
    }

    /// Hero "Play Now": first trending track
    pub fn play_featured(&mut self) {
        if let Some(song) = static_catalog(CatalogName::Trending).first() {
            let song = song.clone();
            self.play(&song);
        }
    }

    pub fn toggle_play(&mut self) {
        if self.sequencer.state().has_track() {
            self.sequencer.toggle_play();
            self.toast_playback();
        }
    }

    pub fn advance(&mut self, direction: Direction) {
        let before = self.sequencer.state().clone();
        self.sequencer.advance(direction);
        if *self.sequencer.state() != before {
            let label = match direction {
                Direction::Next => "⏭ Next Track",
                Direction::Previous => "⏮ Previous Track",
            };
            self.show_toast(label);
        }
    }

    pub fn on_playback_tick(&mut self, tick: PlaybackTick) {
        if self.sequencer.on_timer_tick(tick) == TickOutcome::Advanced {
            if let Some(track) = self.sequencer.state().current_track() {
                info!(id = %track.id, "track finished, auto-advanced");
            }
        }
    }

    pub fn update_search(&mut self) {
        self.search_results = fuzzy_search(self.sequencer.catalog(), &self.search_query);
        self.selected = 0;
    }

    pub fn apply_mood_result(&mut self, request: u64, mood: String, songs: Vec<SongDescriptor>) {
        let count = songs.len();
        self.mood.finish_request(request, mood, songs);
        if self.view == ViewState::AiMood {
            self.selected = 0;
        }
        if count == 0 {
            self.show_toast("No tunes found");
        } else {
            self.show_toast(&format!("✦ {} tracks curated", count));
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(toast) = &self.toast {
            if Instant::now() >= toast.deadline {
                self.toast = None;
            }
        }
    }

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        self.toast = Some(Toast {
            message: message.to_string(),
            start_time: now,
            deadline: now + TOAST_DURATION,
        });
    }

    fn toast_playback(&mut self) {
        let state = self.sequencer.state();
        let message = match (state.is_playing(), state.current_track()) {
            (true, Some(track)) => format!("▶ {}", track.title),
            (false, Some(_)) => "⏸ Pause".to_string(),
            _ => return,
        };
        self.show_toast(&message);
    }
}
