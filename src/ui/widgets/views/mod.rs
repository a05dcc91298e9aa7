use crate::app::{App, ViewState};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub mod home;
pub mod library;
pub mod mood;
pub mod search;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    match app.view {
        ViewState::Home => home::render(f, area, app),
        ViewState::Search => search::render(f, area, app),
        ViewState::Library => library::render(f, area, app),
        ViewState::AiMood => mood::render(f, area, app),
    }
}

/// Rounded panel shared by every view
pub fn panel(title: &str, accent: Color, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.surface))
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(Color::Reset))
}

pub fn section_heading(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", text),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ))
}

/// Cursor line shown while a text input has focus
pub fn input_line<'a>(prompt: &'a str, value: &'a str, focused: bool, theme: &Theme) -> Line<'a> {
    let border = if focused { theme.magenta } else { theme.overlay };
    let mut spans = vec![
        Span::styled(format!(" {} ", prompt), Style::default().fg(border)),
        Span::styled(value, Style::default().fg(theme.text)),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.magenta)));
    }
    Line::from(spans)
}
