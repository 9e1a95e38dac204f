use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use torus_snake::board::Board;
use torus_snake::boundary::Clock;
use torus_snake::config::{GameConfig, GridSize};
use torus_snake::game::{GameState, StartKind};
use torus_snake::goal::spawn_position;
use torus_snake::grid::wrap;
use torus_snake::input::Direction;
use torus_snake::snake::Snake;

struct NullClock;

impl Clock for NullClock {
    fn start_ticking(&mut self, _interval: Duration) {}

    fn stop_ticking(&mut self) {}
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn wrap_stays_in_range(dimension in 1u16..200, offset in -1i32..=1, base in 0u16..200) {
        let value = i32::from(base % dimension) + offset;

        prop_assert!(wrap(value, dimension) < dimension);
    }

    #[test]
    fn segments_stay_on_the_grid(
        rows in 6u16..20,
        cols in 6u16..20,
        seed in any::<u64>(),
        turns in proptest::collection::vec(proptest::option::of(direction()), 1..40),
    ) {
        let config = GameConfig {
            grid: GridSize { rows, cols },
            ..GameConfig::default()
        };
        let mut board = Board::new(config.grid);
        let mut clock = NullClock;
        let mut state = GameState::new_with_seed(config, seed);
        state.start(StartKind::Player, &mut board, &mut clock);

        for turn in turns {
            if let Some(direction) = turn {
                state.change_direction(direction);
            }
            let before = state.snake.len();
            state.tick(&mut board, &mut clock);

            let bounds = state.bounds();
            prop_assert!(state.snake.segments().all(|s| s.position.is_within_bounds(bounds)));
            prop_assert!(state.snake.len() <= before + 1);

            if let Some(goal) = state.goal {
                prop_assert!(goal.is_within_bounds(bounds));
            }
        }
    }

    #[test]
    fn spawned_goal_is_always_free(seed in any::<u64>(), length in 1usize..12) {
        let bounds = GridSize { rows: 13, cols: 7 };
        let snake = Snake::initial(bounds, length, Direction::Up);
        let mut rng = StdRng::seed_from_u64(seed);

        let goal = spawn_position(&mut rng, bounds, &snake);

        prop_assert!(!snake.occupies(goal));
        prop_assert!(goal.is_within_bounds(bounds));
    }
}
