//! UI rendering using ratatui.

mod board;
mod moves;

use super::app::App;
use super::layout::ScreenLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::{CellView, render_board};
pub use moves::render_moves;

/// Draws the whole page and returns where the clickable elements landed.
pub fn draw(f: &mut Frame, app: &App) -> ScreenLayout {
    let language = app.language();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(language.title())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let timeline = app.timeline();
    let cells = render_board(
        f,
        body[0],
        timeline.board(),
        app.highlighted_cell(),
        app.cursor(),
    );
    let moves = render_moves(
        f,
        body[1],
        language.moves_heading(),
        &app.move_lines(),
        timeline.step(),
        app.highlighted_move(),
    );

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(language.status_heading()),
        );
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(language.help())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    ScreenLayout::new(cells, moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::games::tictactoe::Position;
    use crate::tui::input::Action;
    use crate::tui::layout::HitTarget;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn render(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut layout = ScreenLayout::default();
        let view: &App = app;
        terminal.draw(|f| layout = draw(f, view)).unwrap();
        app.set_layout(layout);
        terminal
    }

    #[test]
    fn test_page_shows_status_and_moves() {
        let mut app = App::new(&GameConfig::default());
        app.handle(Action::PlayCell(Position::Center));
        let terminal = render(&mut app);
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Next player: O"));
        assert!(text.contains("1. Go to game start"));
        assert!(text.contains("2. Go to move #1 (2, 2)"));
    }

    #[test]
    fn test_every_drawn_cell_hits_its_position() {
        let mut app = App::new(&GameConfig::default());
        render(&mut app);

        for pos in Position::ALL {
            let rect = app.layout().cell(pos);
            assert!(rect.width > 0 && rect.height > 0);
            assert_eq!(
                app.layout().hit_test(rect.x, rect.y),
                Some(HitTarget::Cell(pos))
            );
        }
    }

    #[test]
    fn test_clicks_play_and_jump() {
        let mut app = App::new(&GameConfig::default());
        render(&mut app);

        let cell = app.layout().cell(Position::TopRight);
        app.handle(Action::Click {
            column: cell.x + 1,
            row: cell.y + 1,
        });
        assert!(!app.timeline().board().is_empty(Position::TopRight));

        render(&mut app);
        let row = app.layout().move_row(0).expect("start row drawn");
        app.handle(Action::Click {
            column: row.x,
            row: row.y,
        });
        assert_eq!(app.timeline().step(), 0);
        assert_eq!(app.timeline().len(), 2);
    }
}
