use super::{input_line, panel, section_heading};
use crate::app::App;
use crate::mood::SUGGESTIONS;
use crate::ui::widgets::song_list;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mood = &app.mood;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0)])
        .split(area);

    // Prompt form
    let next = SUGGESTIONS[mood.next_suggestion % SUGGESTIONS.len()];
    let form = vec![
        Line::from(Span::styled(
            " AI Mood DJ",
            Style::default().fg(theme.magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Tell me how you feel or what you're doing, and I'll curate the perfect soundtrack.",
            Style::default().fg(theme.overlay),
        )),
        Line::from(""),
        input_line("✦", &mood.input, mood.editing, theme),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", app.keys.display(&app.keys.next_suggestion)),
                Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled("Try: ", Style::default().fg(theme.overlay)),
            Span::styled(next, Style::default().fg(theme.cyan)),
        ]),
    ];
    f.render_widget(
        Paragraph::new(form)
            .wrap(Wrap { trim: false })
            .block(panel("Mood", theme.magenta, theme)),
        chunks[0],
    );

    let block = panel("Playlist", theme.magenta, theme);
    let inner = block.inner(chunks[1]);

    let status = |text: &'static str| {
        vec![
            Line::from(""),
            Line::from(Span::styled(text, Style::default().fg(theme.overlay))),
        ]
    };

    let (lines, scroll) = if mood.is_loading() {
        (status(" Consulting the sonic oracles..."), 0)
    } else if mood.songs.is_empty() {
        if mood.has_searched {
            (status(" No tunes found. Try a different mood?"), 0)
        } else {
            (Vec::new(), 0)
        }
    } else {
        let heading = format!("Curated for \"{}\"", mood.curated_for);
        let mut lines = vec![section_heading(&heading, theme), Line::from("")];
        let width = inner.width as usize;

        // Each song gets its row plus an optional note line
        let mut selected_line = 2;
        for (i, song) in mood.songs.iter().enumerate() {
            if i == app.selected {
                selected_line = lines.len();
            }
            lines.extend(song_list::lines(app, std::slice::from_ref(song), i, width));
            if let Some(note) = &song.mood_note {
                lines.push(Line::from(Span::styled(
                    format!("       “{}”", note),
                    Style::default().fg(theme.overlay).add_modifier(Modifier::ITALIC),
                )));
            }
        }
        (lines, song_list::scroll_for(selected_line, inner.height))
    };

    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), chunks[1]);
}
