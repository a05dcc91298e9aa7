use super::{input_line, panel};
use crate::app::App;
use crate::ui::widgets::song_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = input_line("⌕", &app.search_query, app.search_active, theme);
    let border = panel("Search", theme.blue, theme);
    f.render_widget(Paragraph::new(input).block(border), chunks[0]);

    let block = panel("Results", theme.blue, theme);
    let inner = block.inner(chunks[1]);

    let lines = if app.search_query.trim().is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                " Start typing to search for artists, songs, or podcasts.",
                Style::default().fg(theme.overlay),
            )),
        ]
    } else if app.search_results.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" No results for \"{}\"", app.search_query.trim()),
                Style::default().fg(theme.overlay),
            )),
        ]
    } else {
        song_list::lines(app, &app.search_results, 0, inner.width as usize)
    };

    let scroll = song_list::scroll_for(app.selected, inner.height);
    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), chunks[1]);
}
