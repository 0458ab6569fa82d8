//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::{Player, Position, Square};
use crate::view::BoardView;
use strum::IntoEnumIterator;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "arrows move  enter place  1-9 pick  r restart  q quit";

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Area the board is centered in.
    pub board: Rect,
    /// Status box.
    pub status: Rect,
    /// Key help, when enabled.
    pub help: Option<Rect>,
}

/// Splits the frame into title, board, status and help.
pub fn screen_layout(area: Rect, show_help: bool) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(u16::from(show_help)), // Help
        ])
        .split(area);

    ScreenLayout {
        title: chunks[0],
        board: chunks[1],
        status: chunks[2],
        help: show_help.then_some(chunks[3]),
    }
}

/// Rectangles of the 9 cells inside the board region, in index order.
pub fn cell_rects(board: Rect) -> [Rect; 9] {
    let board_area = center_rect(board, BOARD_WIDTH, BOARD_HEIGHT);

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

    let cols: Vec<_> = [rows[0], rows[2], rows[4]]
        .into_iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                    Constraint::Length(1),
                    Constraint::Length(CELL_WIDTH),
                ])
                .split(row)
        })
        .collect();

    std::array::from_fn(|i| cols[i / 3][(i % 3) * 2])
}

/// Finds the cell under a terminal coordinate.
pub fn hit_test(area: Rect, show_help: bool, column: u16, row: u16) -> Option<usize> {
    let layout = screen_layout(area, show_help);
    cell_rects(layout.board).iter().position(|r| {
        column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
    })
}

/// Renders the game: title, board with cursor highlight, status and help.
pub fn draw(frame: &mut Frame, view: &BoardView, cursor: Position, show_help: bool) {
    let layout = screen_layout(frame.area(), show_help);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let winning = view.winning_line();
    for (pos, rect) in Position::iter().zip(cell_rects(layout.board)) {
        let highlight = if winning.is_some_and(|line| line.contains(&pos)) {
            Highlight::Winning
        } else if pos == cursor && !view.outcome.is_over() {
            Highlight::Cursor
        } else {
            Highlight::None
        };
        draw_cell(frame, rect, view, pos, highlight);
    }

    let status_style = if view.outcome.is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(view.status_text())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    if let Some(help_area) = layout.help {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, help_area);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    Cursor,
    Winning,
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &BoardView,
    pos: Position,
    highlight: Highlight,
) {
    let index = pos.to_index();
    let (symbol, mut style) = match view.board.at(pos) {
        Square::Empty => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if !view.is_cell_enabled(index) && highlight != Highlight::Winning {
        style = style.add_modifier(Modifier::DIM);
    }

    style = match highlight {
        Highlight::Cursor => style.bg(Color::White).fg(Color::Black),
        Highlight::Winning => style.bg(Color::Green).fg(Color::Black),
        Highlight::None => style,
    };

    let border_style = match highlight {
        Highlight::None => Style::default().fg(Color::DarkGray),
        Highlight::Cursor | Highlight::Winning => Style::default().fg(Color::White),
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameEngine;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(view: &BoardView, cursor: Position, show_help: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| draw(f, view, cursor, show_help))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_status_and_numbers() {
        let text = screen_text(&GameEngine::new().view(), Position::Center, true);
        assert!(text.contains("Tic Tac Toe"));
        assert!(text.contains("Next: X"));
        assert!(text.contains("r restart"));
    }

    #[test]
    fn test_draw_without_help() {
        let text = screen_text(&GameEngine::new().view(), Position::Center, false);
        assert!(!text.contains("r restart"));
    }

    #[test]
    fn test_draw_shows_winner() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 1, 5, 2] {
            engine.apply_move(index);
        }
        let text = screen_text(&engine.view(), Position::Center, true);
        assert!(text.contains("Winner: X"));
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let rects = cell_rects(Rect::new(0, 3, 60, 18));
        for (i, a) in rects.iter().enumerate() {
            assert_eq!(a.width, CELL_WIDTH);
            assert_eq!(a.height, CELL_HEIGHT);
            for b in rects.iter().skip(i + 1) {
                assert!(a.intersection(*b).is_empty());
            }
        }
        assert!(rects[0].x < rects[1].x && rects[1].x < rects[2].x);
        assert!(rects[0].y < rects[3].y && rects[3].y < rects[6].y);
    }

    #[test]
    fn test_hit_test_finds_cell_centers() {
        let area = Rect::new(0, 0, 60, 24);
        let rects = cell_rects(screen_layout(area, true).board);
        for (index, r) in rects.iter().enumerate() {
            let hit = hit_test(area, true, r.x + r.width / 2, r.y + r.height / 2);
            assert_eq!(hit, Some(index));
        }
        assert_eq!(hit_test(area, true, 0, 0), None);
    }
}
