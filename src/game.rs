use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::boundary::{Clock, RenderSink};
use crate::config::{GameConfig, GridSize, DEFAULT_TICK_INTERVAL_MS};
use crate::difficulty::DifficultyController;
use crate::goal::place_goal;
use crate::grid::Position;
use crate::input::{Direction, GameInput};
use crate::movement;
use crate::resolver;
use crate::snake::Snake;

/// Why the clock is being (re)started.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StartKind {
    /// The player pressed start; a fresh goal is placed.
    Player,
    /// A level change restarted the clock; the current goal stays.
    SpeedChange,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub goal: Option<Position>,
    pub score: u32,
    pub tick_count: u64,
    running: bool,
    config: GameConfig,
    difficulty: DifficultyController,
    rng: StdRng,
}

impl GameState {
    /// Creates a stopped game with an entropy-seeded goal generator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible games.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let snake = Snake::initial(config.grid, config.snake_length, config.start_direction);
        let difficulty = DifficultyController::new(config.levels.clone(), fallback_interval());

        Self {
            snake,
            goal: None,
            score: 0,
            tick_count: 0,
            running: false,
            config,
            difficulty,
            rng,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Interval the clock runs at for the current level.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.difficulty.active_interval()
    }

    #[must_use]
    pub fn level_name(&self) -> Option<&str> {
        self.difficulty.active_level()
    }

    /// Pushes the whole visible state to `sink`.
    pub fn redraw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        sink.clear_all_non_goal();
        if let Some(goal) = self.goal {
            sink.mark_goal(goal);
        }
        sink.paint_occupied(&self.snake.positions());
        sink.set_score_display(self.score);
    }

    /// Starts ticking. Does nothing while already running.
    pub fn start<S, C>(&mut self, kind: StartKind, sink: &mut S, clock: &mut C)
    where
        S: RenderSink + ?Sized,
        C: Clock + ?Sized,
    {
        if self.running {
            return;
        }

        if kind == StartKind::Player || self.goal.is_none() {
            self.goal = Some(place_goal(
                &mut self.rng,
                self.config.grid,
                &self.snake,
                self.goal,
                sink,
            ));
        }

        clock.start_ticking(self.tick_interval());
        self.running = true;
        info!(
            "clock started ({kind:?}) at {} ms",
            self.tick_interval().as_millis()
        );
    }

    /// Stops ticking. Does nothing while already stopped.
    pub fn stop<C: Clock + ?Sized>(&mut self, clock: &mut C) {
        if !self.running {
            return;
        }

        clock.stop_ticking();
        self.running = false;
        info!("clock stopped after {} ticks", self.tick_count);
    }

    /// Stops the game and restores the initial snake, score and level.
    pub fn reset<S, C>(&mut self, sink: &mut S, clock: &mut C)
    where
        S: RenderSink + ?Sized,
        C: Clock + ?Sized,
    {
        self.stop(clock);

        if let Some(goal) = self.goal.take() {
            sink.unmark_goal(goal);
        }

        self.snake = Snake::initial(
            self.config.grid,
            self.config.snake_length,
            self.config.start_direction,
        );
        self.score = 0;
        self.tick_count = 0;
        self.difficulty.reset(fallback_interval());
        self.redraw(sink);
        info!("game reset");
    }

    /// Points the head in `direction`; reversals are ignored.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        self.snake.steer(direction)
    }

    /// Applies one external input event. `Quit` is left to the caller.
    pub fn apply_input<S, C>(&mut self, input: GameInput, sink: &mut S, clock: &mut C)
    where
        S: RenderSink + ?Sized,
        C: Clock + ?Sized,
    {
        match input {
            GameInput::Direction(direction) => {
                self.change_direction(direction);
            }
            GameInput::Start => self.start(StartKind::Player, sink, clock),
            GameInput::Stop => self.stop(clock),
            GameInput::Reset => self.reset(sink, clock),
            GameInput::Quit => {}
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Eating a goal places the next one by sampling free cells, so the grid
    /// must never fill completely: a full board trips a debug assertion and
    /// would spin forever in a release build.
    pub fn tick<S, C>(&mut self, sink: &mut S, clock: &mut C)
    where
        S: RenderSink + ?Sized,
        C: Clock + ?Sized,
    {
        if !self.running {
            return;
        }

        self.tick_count += 1;
        let bounds = self.config.grid;
        let mut snake = movement::advance(&self.snake, bounds);

        if resolver::grow_onto_goal(&mut snake, self.goal, bounds) {
            self.score = self.score.saturating_add(self.config.goal_reward);
            sink.set_score_display(self.score);
            debug!("goal consumed, length {} score {}", snake.len(), self.score);

            self.goal = Some(place_goal(&mut self.rng, bounds, &snake, self.goal, sink));
        }

        if let Some(new_len) = resolver::bite_off_loop(&mut snake) {
            self.score = resolver::score_after_truncation(
                self.config.score_policy,
                self.score,
                new_len,
                self.config.snake_length,
            );
            sink.set_score_display(self.score);
            debug!("bit own body, length {new_len} score {}", self.score);
        }

        sink.clear_all_non_goal();
        sink.paint_occupied(&snake.positions());

        resolver::propagate_directions(&mut snake);
        self.snake = snake;

        self.update_speed(sink, clock);
    }

    fn update_speed<S, C>(&mut self, sink: &mut S, clock: &mut C)
    where
        S: RenderSink + ?Sized,
        C: Clock + ?Sized,
    {
        let Some(interval) = self.difficulty.evaluate(self.score) else {
            return;
        };

        info!(
            "level {} at score {}, interval {} ms",
            self.level_name().unwrap_or("?"),
            self.score,
            interval.as_millis()
        );

        // Full stop and start; the clock phase resets on every level change.
        self.stop(clock);
        self.start(StartKind::SpeedChange, sink, clock);
    }
}

fn fallback_interval() -> Duration {
    Duration::from_millis(DEFAULT_TICK_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::board::Board;
    use crate::boundary::{Clock, RenderSink};
    use crate::config::{GameConfig, ScorePolicy};
    use crate::grid::Position;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Segment, Snake};

    use super::{GameState, StartKind};

    #[derive(Debug, Default)]
    struct ClockLog {
        running: Option<Duration>,
        starts: Vec<Duration>,
        stops: usize,
    }

    impl Clock for ClockLog {
        fn start_ticking(&mut self, interval: Duration) {
            self.running = Some(interval);
            self.starts.push(interval);
        }

        fn stop_ticking(&mut self) {
            self.running = None;
            self.stops += 1;
        }
    }

    fn started(seed: u64) -> (GameState, Board, ClockLog) {
        let config = GameConfig::default();
        let mut board = Board::new(config.grid);
        let mut clock = ClockLog::default();
        let mut state = GameState::new_with_seed(config, seed);

        state.redraw(&mut board);
        state.start(StartKind::Player, &mut board, &mut clock);
        (state, board, clock)
    }

    fn move_goal(state: &mut GameState, board: &mut Board, position: Position) {
        if let Some(previous) = state.goal {
            board.unmark_goal(previous);
        }
        board.mark_goal(position);
        state.goal = Some(position);
    }

    #[test]
    fn tick_is_ignored_while_stopped() {
        let config = GameConfig::default();
        let mut board = Board::new(config.grid);
        let mut clock = ClockLog::default();
        let mut state = GameState::new_with_seed(config, 1);
        let before = state.snake.clone();

        state.tick(&mut board, &mut clock);

        assert_eq!(state.snake, before);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn start_places_one_goal_and_starts_clock() {
        let (state, board, clock) = started(2);

        let goal = state.goal.expect("start should place a goal");
        assert!(!state.snake.occupies(goal));
        assert_eq!(board.goal_cells().collect::<Vec<_>>(), vec![goal]);
        assert_eq!(clock.starts, vec![Duration::from_millis(1000)]);
        assert!(state.is_running());
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let (mut state, mut board, mut clock) = started(3);
        let goal = state.goal;

        state.start(StartKind::Player, &mut board, &mut clock);

        assert_eq!(state.goal, goal);
        assert_eq!(clock.starts.len(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let (mut state, _board, mut clock) = started(4);

        state.stop(&mut clock);
        state.stop(&mut clock);

        assert!(!state.is_running());
        assert_eq!(clock.stops, 1);
        assert_eq!(clock.running, None);
    }

    #[test]
    fn player_restart_moves_the_goal_marker() {
        let (mut state, mut board, mut clock) = started(5);

        state.stop(&mut clock);
        state.start(StartKind::Player, &mut board, &mut clock);

        let goal = state.goal.expect("goal should exist");
        assert_eq!(board.goal_cells().collect::<Vec<_>>(), vec![goal]);
    }

    #[test]
    fn speed_change_restart_keeps_the_goal() {
        let (mut state, mut board, mut clock) = started(6);
        let goal = state.goal;

        state.stop(&mut clock);
        state.start(StartKind::SpeedChange, &mut board, &mut clock);

        assert_eq!(state.goal, goal);
    }

    #[test]
    fn eating_a_goal_grows_and_scores() {
        let (mut state, mut board, mut clock) = started(7);
        move_goal(&mut state, &mut board, Position::new(7, 8));

        state.tick(&mut board, &mut clock);

        assert_eq!(state.snake.len(), 5);
        assert_eq!(state.score, 10);
        assert_eq!(board.score(), 10);
        let goal = state.goal.expect("a new goal should be placed");
        assert!(!state.snake.occupies(goal));
        assert_eq!(board.goal_cells().collect::<Vec<_>>(), vec![goal]);
    }

    #[test]
    fn biting_truncates_and_rescoring_follows_policy() {
        let (mut state, mut board, mut clock) = started(8);
        move_goal(&mut state, &mut board, Position::new(0, 0));
        state.score = 30;
        state.snake = Snake::from_segments(vec![
            Segment::new(Position::new(5, 5), Direction::Down),
            Segment::new(Position::new(5, 4), Direction::Right),
            Segment::new(Position::new(6, 4), Direction::Right),
            Segment::new(Position::new(7, 4), Direction::Up),
            Segment::new(Position::new(8, 4), Direction::Up),
        ]);

        state.tick(&mut board, &mut clock);

        assert_eq!(
            state.snake.positions(),
            vec![
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(6, 5),
            ]
        );
        assert_eq!(state.score, 0);
        assert_eq!(board.score(), 0);
    }

    #[test]
    fn reward_only_policy_keeps_score_after_bite() {
        let config = GameConfig {
            score_policy: ScorePolicy::RewardOnly,
            ..GameConfig::default()
        };
        let mut board = Board::new(config.grid);
        let mut clock = ClockLog::default();
        let mut state = GameState::new_with_seed(config, 9);
        state.start(StartKind::Player, &mut board, &mut clock);
        move_goal(&mut state, &mut board, Position::new(0, 0));
        state.score = 30;
        state.snake = Snake::from_segments(vec![
            Segment::new(Position::new(5, 5), Direction::Down),
            Segment::new(Position::new(5, 4), Direction::Right),
            Segment::new(Position::new(6, 4), Direction::Right),
            Segment::new(Position::new(7, 4), Direction::Up),
        ]);

        state.tick(&mut board, &mut clock);

        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.score, 30);
    }

    #[test]
    fn level_up_restarts_the_clock_at_the_new_interval() {
        let (mut state, mut board, mut clock) = started(10);
        state.score = 40;
        move_goal(&mut state, &mut board, Position::new(7, 8));

        state.tick(&mut board, &mut clock);

        assert_eq!(state.score, 50);
        assert_eq!(state.tick_interval(), Duration::from_millis(800));
        assert_eq!(state.level_name(), Some("medium"));
        assert_eq!(clock.stops, 1);
        assert_eq!(
            clock.starts,
            vec![Duration::from_millis(1000), Duration::from_millis(800)]
        );
        assert!(state.is_running());
    }

    #[test]
    fn reversal_input_is_ignored() {
        let (mut state, mut board, mut clock) = started(11);

        state.apply_input(GameInput::Direction(Direction::Down), &mut board, &mut clock);
        assert_eq!(state.snake.head().direction, Direction::Up);

        state.apply_input(GameInput::Direction(Direction::Left), &mut board, &mut clock);
        assert_eq!(state.snake.head().direction, Direction::Left);
    }

    #[test]
    fn reset_restores_initial_state() {
        let (mut state, mut board, mut clock) = started(12);
        move_goal(&mut state, &mut board, Position::new(7, 8));
        state.tick(&mut board, &mut clock);
        state.tick(&mut board, &mut clock);

        state.apply_input(GameInput::Reset, &mut board, &mut clock);

        assert!(!state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.goal, None);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head().position, Position::new(8, 8));
        assert_eq!(board.goal_cells().count(), 0);
        assert_eq!(board.occupied_cells().count(), 4);
        assert_eq!(board.score(), 0);
        assert_eq!(clock.running, None);
    }
}
