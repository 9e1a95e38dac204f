use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::SNAKE_COLOR;

/// Draws the stopped-game popup over the board.
pub fn render_stopped_menu(frame: &mut Frame<'_>, area: Rect, fresh_game: bool) {
    let popup = centered_popup(area, 70, 40);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("SNAKE").style(Style::default().fg(SNAKE_COLOR).add_modifier(Modifier::BOLD)),
        Line::from(""),
        Line::from(if fresh_game { "Ready" } else { "Stopped" }),
        Line::from(""),
        Line::from("[Enter] Start"),
        Line::from("[R] Reset  [Q] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(if fresh_game { " start " } else { " stop " })),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
