//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::games::tictactoe::{Board, Player, Position, Square};

const CELL_WIDTH: u16 = 13;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// One board cell: a mark plus its highlight and cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    square: Square,
    highlighted: bool,
    cursor: bool,
}

impl CellView {
    /// Creates the view of one square.
    pub fn new(square: Square, highlighted: bool, cursor: bool) -> Self {
        Self {
            square,
            highlighted,
            cursor,
        }
    }

    fn style(&self) -> Style {
        let base = match self.square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            }
            Square::Occupied(Player::O) => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        };

        if self.highlighted {
            base.bg(Color::Yellow)
        } else if self.cursor {
            base.bg(Color::White)
        } else {
            base
        }
    }
}

impl Widget for CellView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let symbol = match self.square {
            Square::Empty => " ",
            Square::Occupied(player) => player.symbol(),
        };
        let style = self.style();

        // Pad so the mark sits on the middle row of the cell
        let padding = area.height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..padding).map(|_| Line::from("")).collect();
        lines.push(Line::from(Span::styled(symbol, style)));

        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

/// Renders the board centred in `area` and returns each cell's area.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    highlighted: Option<Position>,
    cursor: Position,
) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);

        for (column, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let Some(pos) = Position::from_row_column(row, column) else {
                continue;
            };
            let view = CellView::new(board.get(pos), highlighted == Some(pos), cursor == pos);
            f.render_widget(view, cell_area);
            cells[pos.to_index()] = cell_area;
        }
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);

    cells
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
