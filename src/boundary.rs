//! Boundary contracts between the engine and its outer collaborators.

use std::time::Duration;

use crate::grid::Position;

/// Drawing surface the engine projects its state onto.
///
/// The engine never reads back from the sink; goal and occupancy live in
/// [`crate::game::GameState`].
pub trait RenderSink {
    /// Paints every listed cell as occupied by the snake.
    fn paint_occupied(&mut self, positions: &[Position]);

    /// Clears every cell that does not carry the goal marker.
    fn clear_all_non_goal(&mut self);

    fn mark_goal(&mut self, position: Position);

    fn unmark_goal(&mut self, position: Position);

    fn set_score_display(&mut self, score: u32);
}

/// Recurring tick source.
///
/// Changing the interval means `stop_ticking` followed by `start_ticking`;
/// there is no in-place reschedule.
pub trait Clock {
    fn start_ticking(&mut self, interval: Duration);

    fn stop_ticking(&mut self);
}
