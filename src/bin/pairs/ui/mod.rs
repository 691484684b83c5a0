//! TUI module for pairs
//!
//! Stateless rendering: everything drawn comes from a [`View`] built fresh
//! each frame.

mod board;
mod status;

use pairs::game::GameState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use board::render_board;
use status::render_status;

/// Key bindings, as handled by `App::handle_key`
pub const HELP: &str =
    " [←↑↓→/hjkl] Move  [Enter/Space] Flip  [R] Restart  [M] Music  [Q/Esc] Quit";

/// Borrowed snapshot of what the screen shows.
pub struct View<'a> {
    pub state: &'a GameState,
    pub cursor: usize,
    pub music_label: &'static str,
    pub music_pressed: bool,
}

/// Render the UI
pub fn render(frame: &mut Frame, view: &View<'_>) {
    let area = frame.area();

    // Main layout: status, board, message, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status bar
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    render_status(frame, chunks[0], view);
    render_board(frame, chunks[1], view);

    let message = Paragraph::new(view.state.message())
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Message ").borders(Borders::ALL));
    frame.render_widget(message, chunks[2]);

    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::HELP;

    #[test]
    fn help_lists_every_binding() {
        for key in ["←↑↓→", "hjkl", "Enter", "Space", "[R]", "[M]", "Q", "Esc"] {
            assert!(HELP.contains(key), "help is missing {key}");
        }
    }
}
