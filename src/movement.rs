use crate::config::GridSize;
use crate::grid::Position;
use crate::snake::{Segment, Snake};

/// Computes where every segment lands after one tick.
///
/// Each segment moves one cell along its own stored direction. The result has
/// the same length and order as the snake.
#[must_use]
pub fn next_positions(snake: &Snake, bounds: GridSize) -> Vec<Position> {
    snake
        .segments()
        .map(|segment| segment.position.stepped(segment.direction, bounds))
        .collect()
}

/// Builds the moved snake. Directions are carried over unchanged; propagation
/// happens later in the tick.
#[must_use]
pub fn advance(snake: &Snake, bounds: GridSize) -> Snake {
    let segments = snake
        .segments()
        .zip(next_positions(snake, bounds))
        .map(|(segment, position)| Segment::new(position, segment.direction))
        .collect();

    Snake::from_segments(segments)
}
