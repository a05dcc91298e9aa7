use crate::app::App;
use crate::ui::utils::truncate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub mod controls;
pub mod progress;

/// Bottom "Now Playing" bar. Only drawn while a track is loaded.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let Some(track) = app.sequencer.state().current_track() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(Span::styled(
            " Now Playing ",
            Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(theme.blue))
        .style(Style::default().bg(Color::Reset));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title / artist
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Volume
        ])
        .split(inner);

    let width = inner.width as usize;
    let title = truncate(&track.title, width / 2);
    let artist = truncate(&format!("{} · {}", track.artist, track.album), width / 2);
    let info = Paragraph::new(Line::from(vec![
        Span::styled(title, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)),
        Span::styled("  ", Style::default()),
        Span::styled(artist, Style::default().fg(theme.overlay)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(info, rows[0]);

    controls::render(f, rows[1], app);
    progress::render_progress(f, rows[2], app);
    if rows[3].height > 0 {
        controls::render_volume(f, rows[3], app);
    }
}
