pub mod layout;
pub mod theme;
pub mod utils;
pub mod widgets;

pub use theme::Theme;

use crate::app::App;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();

    // 1. Layout
    let main_layout = layout::get_main_layout(area, app.sequencer.state().has_track());

    // 2. Sidebar
    if let Some(sidebar) = main_layout.sidebar {
        widgets::sidebar::render(f, sidebar, app);
    }

    // 3. Current view
    widgets::views::render(f, main_layout.content, app);

    // 4. Player bar
    if let Some(player) = main_layout.player {
        widgets::player::render(f, player, app);
    }

    // 5. Footer hint (if no popup active)
    if !app.show_keyhints {
        let theme = &app.theme;
        let hint = Line::from(vec![
            Span::styled(
                format!(" {} ", app.keys.display(&app.keys.toggle_keyhints)),
                Style::default()
                    .fg(theme.overlay)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("keys", Style::default().fg(theme.overlay)),
        ]);
        let footer = Paragraph::new(hint).alignment(Alignment::Right);
        f.render_widget(footer, main_layout.footer);
    }

    // 6. Popups (overlays)
    widgets::popups::render(f, app);
}
