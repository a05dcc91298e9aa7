use clap::{Parser, ValueEnum};

use super::ViewState;

/// moodwave - a terminal music player with an AI mood DJ 🎵
#[derive(Parser, Debug, Default)]
#[command(name = "moodwave", version, about)]
pub struct Args {
    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,

    /// View to open on start
    #[arg(long, value_enum)]
    pub view: Option<StartView>,

    /// Ask the mood DJ for a playlist right away (opens the Mood DJ view)
    #[arg(long)]
    pub mood: Option<String>,

    /// Override the configured generator model
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StartView {
    Home,
    Search,
    Library,
    Mood,
}

impl From<StartView> for ViewState {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Home => ViewState::Home,
            StartView::Search => ViewState::Search,
            StartView::Library => ViewState::Library,
            StartView::Mood => ViewState::AiMood,
        }
    }
}

impl Args {
    pub fn start_view(&self) -> ViewState {
        match (self.view, &self.mood) {
            (Some(view), _) => view.into(),
            (None, Some(_)) => ViewState::AiMood,
            (None, None) => ViewState::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::parse_from(["moodwave", "--view", "library", "--model", "gemini-2.0-flash"]);
        assert_eq!(args.view, Some(StartView::Library));
        assert_eq!(args.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(args.start_view(), ViewState::Library);
    }

    #[test]
    fn test_mood_opens_mood_view() {
        let args = Args::parse_from(["moodwave", "--mood", "rainy day"]);
        assert_eq!(args.start_view(), ViewState::AiMood);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(Args::parse_from(["moodwave"]).start_view(), ViewState::Home);
    }
}
