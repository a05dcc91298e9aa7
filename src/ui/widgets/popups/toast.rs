use crate::app::{App, Toast};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;
use unicode_width::UnicodeWidthStr;

const SLIDE_MS: u128 = 300;

/// Horizontal offset from the resting position: eases in from the right,
/// holds, then eases back out over the last `SLIDE_MS`.
fn slide_offset(width: u16, toast: &Toast, now: Instant) -> u16 {
    let elapsed = now.duration_since(toast.start_time).as_millis();
    let remaining = toast.deadline.saturating_duration_since(now).as_millis();

    let hidden = if elapsed < SLIDE_MS {
        let t = elapsed as f32 / SLIDE_MS as f32;
        (1.0 - t).powi(3) // Cubic out
    } else if remaining < SLIDE_MS {
        let t = (SLIDE_MS - remaining) as f32 / SLIDE_MS as f32;
        t.powi(3) // Cubic in
    } else {
        0.0
    };
    (width as f32 * hidden) as u16
}

pub fn render(f: &mut Frame, app: &App) {
    let Some(toast) = &app.toast else {
        return;
    };
    let theme = &app.theme;
    let screen = f.area();

    let width = (toast.message.width() as u16 + 6).min(screen.width.saturating_sub(4));
    let x = screen.width.saturating_sub(width + 1) + slide_offset(width, toast, Instant::now());
    if x >= screen.width {
        return;
    }

    let area = Rect::new(x, 1, width, 3).intersection(screen);
    if area.is_empty() {
        return;
    }
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.magenta))
        .style(Style::default().bg(Color::Reset));
    let text = Paragraph::new(Line::from(Span::styled(
        toast.message.as_str(),
        Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(block);

    f.render_widget(text, area);
}
