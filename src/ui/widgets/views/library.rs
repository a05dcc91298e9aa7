use super::{panel, section_heading};
use crate::app::App;
use crate::catalog::{static_catalog, CatalogName};
use crate::ui::widgets::song_list;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = panel("Your Library", theme.green, theme);
    let inner = block.inner(area);

    let recent = static_catalog(CatalogName::RecentlyPlayed);
    let mut lines = vec![
        section_heading(CatalogName::RecentlyPlayed.title(), theme),
        Line::from(""),
    ];
    lines.extend(song_list::lines(app, recent, 0, inner.width as usize));

    let scroll = song_list::scroll_for(app.selected + 2, inner.height);
    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}
