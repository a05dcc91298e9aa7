use crate::app::App;
use crate::catalog::format_time;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// `━━━━●─────` for `ratio` of `width` cells.
pub fn bar_cells(width: usize, ratio: f64) -> Vec<&'static str> {
    let occupied = (width as f64 * ratio.clamp(0.0, 1.0)) as usize;
    (0..width)
        .map(|i| {
            if i + 1 == occupied {
                "●"
            } else if i < occupied {
                "━"
            } else {
                "─"
            }
        })
        .collect()
}

pub fn render_progress(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = app.sequencer.state();
    let Some(track) = state.current_track() else {
        return;
    };

    let elapsed = format_time(state.position().as_secs());
    let total = format_time(u64::from(track.duration_seconds));

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(0),
            Constraint::Length(7),
        ])
        .split(area);

    let fill_style = Style::default().fg(theme.magenta);
    let empty_style = Style::default().fg(theme.surface);
    let bar: Vec<Span> = bar_cells(cols[1].width as usize, state.progress_fraction())
        .into_iter()
        .map(|cell| {
            let style = if cell == "─" { empty_style } else { fill_style };
            Span::styled(cell, style)
        })
        .collect();

    let time_style = Style::default().fg(theme.overlay);
    f.render_widget(
        Paragraph::new(format!("{:>6} ", elapsed)).style(time_style),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(bar)).block(Block::default().style(Style::default().bg(Color::Reset))),
        cols[1],
    );
    f.render_widget(Paragraph::new(format!(" {}", total)).style(time_style), cols[2]);
}
