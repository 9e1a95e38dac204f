use log::debug;
use rand::Rng;

use crate::boundary::RenderSink;
use crate::config::GridSize;
use crate::grid::Position;
use crate::snake::Snake;

/// Picks a uniformly random cell not covered by the snake.
///
/// Uses rejection sampling. Terminates only while the snake is shorter than
/// the grid has cells; a full grid panics in debug builds and loops forever
/// in release builds.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Position {
    debug_assert!(snake.len() < bounds.total_cells());

    loop {
        let candidate = Position::new(rng.gen_range(0..bounds.rows), rng.gen_range(0..bounds.cols));
        if !snake.occupies(candidate) {
            return candidate;
        }
    }
}

/// Moves the goal to a fresh free cell and updates the goal marker.
#[must_use]
pub fn place_goal<R, S>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    previous: Option<Position>,
    sink: &mut S,
) -> Position
where
    R: Rng + ?Sized,
    S: RenderSink + ?Sized,
{
    if let Some(previous) = previous {
        sink.unmark_goal(previous);
    }

    let goal = spawn_position(rng, bounds, snake);
    sink.mark_goal(goal);
    debug!("goal placed at ({}, {})", goal.row, goal.col);

    goal
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::boundary::RenderSink;
    use crate::config::GridSize;
    use crate::grid::Position;
    use crate::input::Direction;
    use crate::snake::{Segment, Snake};

    use super::{place_goal, spawn_position};

    #[derive(Default)]
    struct MarkerLog {
        marked: Vec<Position>,
        unmarked: Vec<Position>,
    }

    impl RenderSink for MarkerLog {
        fn paint_occupied(&mut self, _positions: &[Position]) {}

        fn clear_all_non_goal(&mut self) {}

        fn mark_goal(&mut self, position: Position) {
            self.marked.push(position);
        }

        fn unmark_goal(&mut self, position: Position) {
            self.unmarked.push(position);
        }

        fn set_score_display(&mut self, _score: u32) {}
    }

    #[test]
    fn goal_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = GridSize { rows: 6, cols: 8 };
        let snake = Snake::initial(bounds, 5, Direction::Left);

        for _ in 0..100 {
            let goal = spawn_position(&mut rng, bounds, &snake);
            assert!(!snake.occupies(goal));
            assert!(goal.is_within_bounds(bounds));
        }
    }

    #[test]
    fn goal_spawn_finds_the_last_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize { rows: 2, cols: 2 };
        let snake = Snake::from_segments(vec![
            Segment::new(Position::new(0, 0), Direction::Right),
            Segment::new(Position::new(0, 1), Direction::Right),
            Segment::new(Position::new(1, 1), Direction::Right),
        ]);

        assert_eq!(spawn_position(&mut rng, bounds, &snake), Position::new(1, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn full_grid_trips_the_debug_assertion() {
        let mut rng = StdRng::seed_from_u64(11);
        let bounds = GridSize { rows: 1, cols: 2 };
        let snake = Snake::from_segments(vec![
            Segment::new(Position::new(0, 0), Direction::Right),
            Segment::new(Position::new(0, 1), Direction::Right),
        ]);

        let _ = spawn_position(&mut rng, bounds, &snake);
    }

    #[test]
    fn placing_a_goal_swaps_the_marker() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink = MarkerLog::default();
        let bounds = GridSize { rows: 16, cols: 16 };
        let snake = Snake::initial(bounds, 4, Direction::Up);
        let previous = Position::new(0, 0);

        let goal = place_goal(&mut rng, bounds, &snake, Some(previous), &mut sink);

        assert_eq!(sink.unmarked, vec![previous]);
        assert_eq!(sink.marked, vec![goal]);
    }

    #[test]
    fn first_goal_has_nothing_to_unmark() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sink = MarkerLog::default();
        let bounds = GridSize { rows: 16, cols: 16 };
        let snake = Snake::initial(bounds, 4, Direction::Up);

        let _ = place_goal(&mut rng, bounds, &snake, None, &mut sink);

        assert!(sink.unmarked.is_empty());
        assert_eq!(sink.marked.len(), 1);
    }
}
