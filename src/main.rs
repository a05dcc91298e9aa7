use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{error, info};

use moodwave::app::cli::Args;
use moodwave::app::config::AppConfig;
use moodwave::app::events::AppEvent;
use moodwave::app::{inputs, mood, App};
use moodwave::mood::{GeminiGenerator, MoodLookup};
use moodwave::ui::{self, theme};

// UI refresh for toasts and the progress bar
const UI_TICK: Duration = Duration::from_millis(100);

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    human_panic::setup_panic!();
    let args = Args::parse();

    if args.generate_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut config = AppConfig::load();
    let _log_guard = moodwave::logging::init(&config.log_level)?;
    if let Some(model) = &args.model {
        config.ai.model = model.clone();
    }
    info!(model = %config.ai.model, "starting moodwave");

    // Global HTTP client (reused)
    let client = reqwest::Client::builder()
        .user_agent(concat!("moodwave/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default();
    let api_key = config.ai.resolve_api_key();
    if api_key.is_none() {
        info!(env = %config.ai.api_key_env, "no API key configured, mood lookups will come back empty");
    }
    let generator = GeminiGenerator::new(client, &config.ai.endpoint, &config.ai.model, api_key);
    let lookup = MoodLookup::new(Arc::new(generator));

    let (tx, mut rx) = mpsc::channel::<AppEvent>(100);

    let mut app = App::new(&config, theme::load_current_theme()).with_progress_timer(tx.clone());
    app.set_view(args.start_view());
    if let Some(prompt) = &args.mood {
        app.mood.input = prompt.clone();
        mood::submit(&mut app, &lookup, &tx);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    // 1. Input Event Task
    let tx_input = tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if tx_input.send(AppEvent::Input(event)).await.is_err() {
                break;
            }
        }
    });

    // 2. UI Tick Task
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(UI_TICK);
        loop {
            interval.tick().await;
            if tx_tick.send(AppEvent::Tick).await.is_err() {
                break;
            }
        }
    });

    let result = run(&mut terminal, &mut app, &mut rx, &lookup, &tx).await;
    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    info!("bye");

    result
}

async fn run(
    terminal: &mut Tui,
    app: &mut App,
    rx: &mut mpsc::Receiver<AppEvent>,
    lookup: &MoodLookup,
    tx: &mpsc::Sender<AppEvent>,
) -> Result<()> {
    while app.is_running {
        terminal.draw(|f| ui::ui(f, app))?;

        let Some(event) = rx.recv().await else {
            break;
        };
        match event {
            AppEvent::Input(Event::Key(key)) => inputs::handle_event(key, app, lookup, tx),
            AppEvent::Input(_) => {}
            AppEvent::Tick => app.on_tick(),
            AppEvent::Playback(tick) => app.on_playback_tick(tick),
            AppEvent::MoodResult { request, mood, songs } => {
                app.apply_mood_result(request, mood, songs)
            }
        }
    }
    Ok(())
}
