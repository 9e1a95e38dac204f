use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::board::Board;
use crate::config::SNAKE_COLOR;
use crate::game::GameState;

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, board: &Board, state: &GameState) -> Rect {
    let [play_area, score_area, controls_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(
            board.score(),
            state.snake.len(),
            state.level_name(),
            state.tick_interval().as_millis(),
        ))
        .alignment(Alignment::Left),
        score_area,
    );

    frame.render_widget(
        Paragraph::new(Line::from(controls_text(state.is_running())))
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::DarkGray)),
        controls_area,
    );

    play_area
}

fn score_line(score: u32, length: usize, level: Option<&str>, interval_ms: u128) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(SNAKE_COLOR).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(score.to_string(), value),
        Span::styled("  Length: ", label),
        Span::styled(length.to_string(), value),
        Span::styled("  Level: ", label),
        Span::styled(level.unwrap_or("-").to_owned(), value),
        Span::styled(format!(" ({interval_ms} ms)"), label),
    ])
}

fn controls_text(running: bool) -> &'static str {
    if running {
        "[Arrows/WASD] Turn  [Space] Stop  [R] Reset  [Q] Quit"
    } else {
        "[Enter] Start  [R] Reset  [Q] Quit"
    }
}
