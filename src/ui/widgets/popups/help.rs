use crate::app::{App, ViewState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

type KeyHint = (String, &'static str, &'static str);

fn pair(app: &App, a: &str, b: &str) -> String {
    format!("{}/{}", app.keys.display(a), app.keys.display(b))
}

/// Bindings that only apply to the current view.
fn view_hints(app: &App) -> (&'static str, Vec<KeyHint>) {
    let k = &app.keys;
    let navigate = (pair(app, &k.nav_down, &k.nav_up), "↕", "Navigate");
    let select = (k.display(&k.select), "▶", "Play selected");
    match app.view {
        ViewState::Home => (
            "Home",
            vec![
                navigate,
                select,
                (k.display(&k.play_featured), "★", "Play featured mix"),
            ],
        ),
        ViewState::Search => (
            "Search",
            vec![
                (pair(app, &k.search, &k.edit_input), "⌕", "Type query"),
                (k.display(&k.cancel), "←", "Stop typing"),
                navigate,
                select,
            ],
        ),
        ViewState::Library => ("Your Library", vec![navigate, select]),
        ViewState::AiMood => (
            "AI Mood DJ",
            vec![
                (k.display(&k.edit_input), "✎", "Describe a mood"),
                (k.display(&k.select), "✦", "Curate (while typing)"),
                (k.display(&k.next_suggestion), "💡", "Try a suggestion"),
                (k.display(&k.cancel), "←", "Stop typing"),
                navigate,
            ],
        ),
    }
}

fn global_hints(app: &App) -> Vec<KeyHint> {
    let k = &app.keys;
    vec![
        (k.display(&k.play_pause), "⏯", "Play/Pause"),
        (k.display(&k.next_track), "⏭", "Next track"),
        (k.display(&k.prev_track), "⏮", "Previous track"),
        (
            format!(
                "{}-{}",
                k.display(&k.view_home),
                k.display(&k.view_mood)
            ),
            "▦",
            "Views",
        ),
        (pair(app, &k.view_next, &k.view_prev), "⇆", "Cycle views"),
        (k.display(&k.toggle_keyhints), "?", "Close help"),
        (k.display(&k.quit), "⏻", "Quit"),
    ]
}

fn hint_line<'a>(hint: &'a KeyHint, key_color: Color, text_color: Color) -> Line<'a> {
    let (key, icon, desc) = hint;
    Line::from(vec![
        Span::styled(
            format!(" {:<7} ", key),
            Style::default().fg(key_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(format!("{} ", icon), Style::default()),
        Span::styled(*desc, Style::default().fg(text_color)),
    ])
}

pub fn render(f: &mut Frame, app: &App) {
    let theme = &app.theme;

    // 🎹 WhichKey-style floating popup, bottom-right
    let (title, keys) = view_hints(app);
    let global_keys = global_hints(app);

    let mut lines: Vec<Line> = keys
        .iter()
        .map(|hint| hint_line(hint, theme.yellow, theme.text))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "────── Global ──────",
        Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.extend(
        global_keys
            .iter()
            .map(|hint| hint_line(hint, theme.green, theme.text)),
    );

    // padding + key(min 7) + spacer + icon + desc
    let content_width = keys
        .iter()
        .chain(global_keys.iter())
        .map(|(k, i, d)| 2 + k.width().max(7) + 3 + i.width() + 1 + d.width())
        .max()
        .unwrap_or(20)
        .max(22);

    let area = f.area();
    let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(4));
    let popup_width = (content_width as u16 + 4).min(area.width.saturating_sub(2));
    let popup_x = area.width.saturating_sub(popup_width + 1);
    let popup_y = area.height.saturating_sub(popup_height + 2);
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);

    let popup = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.blue))
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Left)
            .style(Style::default().bg(Color::Reset)),
    );
    f.render_widget(popup, popup_area);
}
