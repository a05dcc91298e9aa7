use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 24;
pub const PLAYER_HEIGHT: u16 = 6;

pub struct MainLayout {
    pub sidebar: Option<Rect>,
    pub content: Rect,
    pub player: Option<Rect>,
    pub footer: Rect,
}

pub fn get_main_layout(area: Rect, has_track: bool) -> MainLayout {
    // Player bar only exists while a track is loaded
    let player_height = if has_track { PLAYER_HEIGHT } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Body
            Constraint::Length(player_height), // Player bar
            Constraint::Length(1),             // Footer
        ])
        .split(area);

    let body = rows[0];
    let (sidebar, content) = if body.width >= SIDEBAR_WIDTH * 3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(body);
        (Some(cols[0]), cols[1])
    } else {
        // Narrow terminal: drop the sidebar, views stay reachable by keys
        (None, body)
    };

    MainLayout {
        sidebar,
        content,
        player: has_track.then_some(rows[1]),
        footer: rows[2],
    }
}
