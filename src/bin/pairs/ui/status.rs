//! Status bar widget - moves, elapsed time, pairs found, music toggle

use pairs::game::PAIR_COUNT;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::View;

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let block = Block::default().title(" pairs ").borders(Borders::ALL);
    let state = view.state;

    let music_symbol = if view.music_pressed { "♪" } else { "·" };

    let line = Line::from(vec![
        Span::styled(
            format!(" Moves: {}  ", state.moves()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("Time: {}  ", state.elapsed()),
            Style::default().fg(Color::White),
        ),
        Span::styled(
            format!("Pairs: {}/{}  ", state.pairs(), PAIR_COUNT),
            Style::default().fg(if state.is_won() {
                Color::Green
            } else {
                Color::DarkGray
            }),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{music_symbol} [M] {}", view.music_label),
            Style::default().fg(if view.music_pressed {
                Color::Magenta
            } else {
                Color::Yellow
            }),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
