use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::board::{Board, Cell};
use crate::config::{BOARD_BORDER, CLEAR_CELL_COLOR, GLYPH_CELL, GOAL_COLOR, SNAKE_COLOR};
use crate::game::GameState;
use crate::grid::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::render_stopped_menu;

/// Renders the full game frame from the board projection and game state.
pub fn render(frame: &mut Frame<'_>, board: &Board, state: &GameState) {
    let area = frame.area();
    let play_area = render_hud(frame, area, board, state);

    let block = Block::bordered()
        .border_set(BOARD_BORDER)
        .border_style(Style::new().fg(SNAKE_COLOR));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_cells(frame, inner, board);

    if !state.is_running() {
        render_stopped_menu(frame, play_area, state.tick_count == 0);
    }
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, board: &Board) {
    let bounds = board.bounds();
    let buffer = frame.buffer_mut();

    for row in 0..bounds.rows {
        for col in 0..bounds.cols {
            let position = Position::new(row, col);
            let Some((x, y)) = logical_to_terminal(inner, position) else {
                continue;
            };

            buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(cell_color(board.cell(position))));
        }
    }
}

fn cell_color(cell: Cell) -> Color {
    if cell.occupied {
        SNAKE_COLOR
    } else if cell.goal {
        GOAL_COLOR
    } else {
        CLEAR_CELL_COLOR
    }
}

fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let cell_width = u16::try_from(GLYPH_CELL.chars().count()).ok()?;
    let x = inner.x.checked_add(position.col.checked_mul(cell_width)?)?;
    let y = inner.y.checked_add(position.row)?;

    if x.saturating_add(cell_width) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
