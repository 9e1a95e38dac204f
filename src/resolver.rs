//! Per-tick growth, self-intersection and direction bookkeeping.

use crate::config::{GridSize, ScorePolicy};
use crate::grid::Position;
use crate::snake::{Segment, Snake};

/// Grows the snake when its head sits on `goal`.
///
/// The new segment goes one cell behind the tail, against the tail's
/// direction, and inherits that direction. Returns whether growth happened.
pub fn grow_onto_goal(snake: &mut Snake, goal: Option<Position>, bounds: GridSize) -> bool {
    let Some(goal) = goal else {
        return false;
    };

    if snake.head().position != goal {
        return false;
    }

    let tail = snake.tail();
    let behind = tail.position.stepped(tail.direction.opposite(), bounds);
    snake.push_tail(Segment::new(behind, tail.direction));
    true
}

/// Finds the segment the head has bitten into.
///
/// Returns the index in the full body (head = 0). The body behind the head is
/// scanned from the tail end; a coincidence with the segment directly behind
/// the head never counts.
#[must_use]
pub fn bite_index(snake: &Snake) -> Option<usize> {
    let head = snake.head().position;
    let body: Vec<Position> = snake.segments().skip(1).map(|s| s.position).collect();

    let offset = body.iter().rposition(|position| *position == head)?;
    (offset > 0).then_some(offset + 1)
}

/// Cuts the snake right after the bitten segment.
///
/// Returns the new length when a bite happened.
pub fn bite_off_loop(snake: &mut Snake) -> Option<usize> {
    let index = bite_index(snake)?;
    snake.truncate(index + 1);
    Some(snake.len())
}

/// Score after a truncation left the snake `new_len` segments long.
#[must_use]
pub fn score_after_truncation(
    policy: ScorePolicy,
    score: u32,
    new_len: usize,
    default_len: usize,
) -> u32 {
    match policy {
        ScorePolicy::RewardOnly => score,
        ScorePolicy::RecomputeOnTruncation => {
            u32::try_from(new_len.saturating_sub(default_len)).unwrap_or(u32::MAX)
        }
    }
}

/// Shifts every body direction one segment toward the tail.
///
/// Each non-head segment takes the direction its predecessor held before this
/// pass. The head keeps its own direction.
pub fn propagate_directions(snake: &mut Snake) {
    let segments = snake.segments_mut();
    for index in (1..segments.len()).rev() {
        segments[index].direction = segments[index - 1].direction;
    }
}
