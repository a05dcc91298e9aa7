use crate::app::App;
use crate::catalog::{format_time, SongDescriptor};
use crate::ui::utils::fit;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// One row per song. `first_index` is the row's position in
/// [`App::visible_songs`], used to draw the selection.
pub fn lines<'a>(
    app: &App,
    songs: &'a [SongDescriptor],
    first_index: usize,
    width: usize,
) -> Vec<Line<'a>> {
    let theme = &app.theme;
    let playback = app.sequencer.state();

    let time_w = 6;
    let artist_w = width / 4;
    let genre_w = if width > 70 { 12 } else { 0 };
    let title_w = width.saturating_sub(artist_w + genre_w + time_w + 8);

    songs
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let selected = first_index + i == app.selected;
            let active = playback.is_current(&song.id);

            let marker = match (active, playback.is_playing()) {
                (true, true) => "▶",
                (true, false) => "⏸",
                _ => " ",
            };
            let title_style = if active {
                Style::default().fg(theme.green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };

            let mut spans = vec![
                Span::styled(if selected { " ›" } else { "  " }, Style::default().fg(theme.yellow)),
                Span::styled(format!(" {} ", marker), Style::default().fg(theme.green)),
                Span::styled(fit(&song.title, title_w), title_style),
                Span::raw(" "),
                Span::styled(fit(&song.artist, artist_w), Style::default().fg(theme.overlay)),
            ];
            if genre_w > 0 {
                let genre = song.genre.as_deref().unwrap_or("");
                spans.push(Span::raw(" "));
                spans.push(Span::styled(fit(genre, genre_w), Style::default().fg(theme.cyan)));
            }
            spans.push(Span::styled(
                format!("{:>time_w$}", format_time(u64::from(song.duration_seconds))),
                Style::default().fg(theme.overlay),
            ));

            let line = Line::from(spans);
            if selected {
                line.style(Style::default().bg(theme.surface))
            } else {
                line
            }
        })
        .collect()
}

/// Vertical scroll keeping `row` (a line index) inside `height` lines.
pub fn scroll_for(row: usize, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    row.saturating_sub(height - 1).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_row_visible() {
        assert_eq!(scroll_for(0, 10), 0);
        assert_eq!(scroll_for(9, 10), 0);
        assert_eq!(scroll_for(12, 10), 3);
        assert_eq!(scroll_for(5, 0), 5);
    }
}
