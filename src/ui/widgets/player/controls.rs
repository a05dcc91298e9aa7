use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

// Fixed width for center controls ensuring absolute center
const CONTROLS_WIDTH: u16 = 36;
const VOLUME_BAR_WIDTH: usize = 20;
// The volume bar is decorative, there is no audio output
const VOLUME_FILL: f64 = 0.7;

fn centered(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(CONTROLS_WIDTH),
            Constraint::Fill(1),
        ])
        .split(area)[1]
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let state = app.sequencer.state();
    if !state.has_track() {
        return;
    }

    let play_icon = if state.is_playing() { "⏸" } else { "▶" };
    let btn_style = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let play_style = Style::default().fg(theme.green).add_modifier(Modifier::BOLD);

    let buttons = Line::from(vec![
        Span::styled("   ⏮   ", btn_style),
        Span::raw("   "),
        Span::styled(format!("   {}   ", play_icon), play_style),
        Span::raw("   "),
        Span::styled("   ⏭   ", btn_style),
    ]);
    let widget = Paragraph::new(buttons)
        .alignment(Alignment::Center)
        .block(Block::default());
    f.render_widget(widget, centered(area));
}

pub fn render_volume(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let filled = (VOLUME_BAR_WIDTH as f64 * VOLUME_FILL).round() as usize;

    let mut bar_spans = vec![Span::styled("- ", Style::default().fg(theme.overlay))];
    for i in 0..VOLUME_BAR_WIDTH {
        if i < filled {
            bar_spans.push(Span::styled("━", Style::default().fg(theme.magenta)));
        } else {
            bar_spans.push(Span::styled("─", Style::default().fg(theme.surface)));
        }
    }
    bar_spans.push(Span::styled(" +", Style::default().fg(theme.overlay)));

    let widget = Paragraph::new(Line::from(bar_spans))
        .alignment(Alignment::Center)
        .block(Block::default());
    f.render_widget(widget, centered(area));
}
