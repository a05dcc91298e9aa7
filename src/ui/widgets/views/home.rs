use super::{panel, section_heading};
use crate::app::App;
use crate::catalog::{static_catalog, CatalogName};
use crate::ui::widgets::song_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HERO_HEIGHT: u16 = 6;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HERO_HEIGHT), Constraint::Min(0)])
        .split(area);

    // Featured hero
    let hero = vec![
        Line::from(Span::styled(
            " FEATURED PLAYLIST",
            Style::default().fg(theme.overlay).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Deep Focus Mix",
            Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Ambient beats and lo-fi textures to keep you in the zone.",
            Style::default().fg(theme.text),
        )),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" ▶ Play Now ({}) ", app.keys.display(&app.keys.play_featured)),
                Style::default()
                    .fg(theme.base)
                    .bg(theme.green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    f.render_widget(
        Paragraph::new(hero).block(panel("Home", theme.magenta, theme)),
        chunks[0],
    );

    // Trending then Recently Played; row indices follow the default catalog
    let block = panel("Browse", theme.blue, theme);
    let inner = block.inner(chunks[1]);
    let width = inner.width as usize;

    let trending = static_catalog(CatalogName::Trending);
    let recent = static_catalog(CatalogName::RecentlyPlayed);

    let mut lines = vec![section_heading(CatalogName::Trending.title(), theme)];
    lines.extend(song_list::lines(app, trending, 0, width));
    lines.push(Line::from(""));
    lines.push(section_heading(CatalogName::RecentlyPlayed.title(), theme));
    lines.extend(song_list::lines(app, recent, trending.len(), width));

    // Headings take one line, plus the spacer before the second section
    let selected_line = if app.selected < trending.len() {
        app.selected + 1
    } else {
        app.selected + 3
    };
    let scroll = song_list::scroll_for(selected_line, inner.height);

    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), chunks[1]);
}
