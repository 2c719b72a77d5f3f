//! Move list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Renders one row per history entry and returns the area of each drawn row.
///
/// Rows that do not fit are left out, so the returned list can be shorter
/// than `lines`.
pub fn render_moves(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[String],
    current: usize,
    highlighted: Option<usize>,
) -> Vec<Rect> {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    lines
        .iter()
        .enumerate()
        .take(inner.height as usize)
        .map(|(step, line)| {
            let row = Rect::new(inner.x, inner.y + step as u16, inner.width, 1);

            let mut style = Style::default();
            if step == current {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            if highlighted == Some(step) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            let text = format!("{}. {}", step + 1, line);
            f.render_widget(Paragraph::new(text).style(style), row);
            row
        })
        .collect()
}
