use crate::app::{App, ViewState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.surface))
        .title(Line::from(Span::styled(
            " ♪ moodwave ",
            Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
        )))
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(Color::Reset));

    let mut lines = vec![Line::from("")];
    for (i, view) in ViewState::ALL.iter().enumerate() {
        let active = *view == app.view;
        let style = if active {
            Style::default()
                .fg(theme.base)
                .bg(theme.blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", i + 1), Style::default().fg(theme.overlay)),
            Span::styled(format!(" {} {:<14}", view.icon(), view.label()), style),
        ]));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
