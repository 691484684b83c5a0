//! Board widget - the card grid

use pairs::game::{Card, CARD_COUNT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::View;
use crate::app::GRID_COLUMNS;

/// Render the card grid
pub fn render_board(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let outer = Block::default().title(" Board ").borders(Borders::ALL);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let rows = CARD_COUNT / GRID_COLUMNS;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell) in cell_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            if let Some(card) = view.state.card(index) {
                render_card(frame, *cell, card, index == view.cursor);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card, selected: bool) {
    let (face, color) = if card.is_matched() {
        (card.symbol().glyph(), Color::Green)
    } else if card.is_flipped() {
        (card.symbol().glyph(), Color::Cyan)
    } else {
        ("?", Color::Gray)
    };

    let mut block = Block::default().borders(Borders::ALL);
    if selected {
        // The cursor card carries its accessible label as a title
        block = block
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", card.label()));
    } else {
        block = block.border_style(Style::default().fg(color));
    }

    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if card.is_matched() {
        style = style.add_modifier(Modifier::DIM);
    }

    // Vertically center the face inside the card
    let padding = area.height.saturating_sub(3) / 2;
    let mut lines: Vec<Line> = (0..padding).map(|_| Line::raw("")).collect();
    lines.push(Line::styled(face, style));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
