use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Start,
    Stop,
    Reset,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Settings for the keyboard input collaborator.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct InputConfig {
    /// Quiet period a direction press must survive before it is released.
    pub debounce: Duration,
}

/// Translates terminal key events into game inputs.
///
/// Direction presses are held back until `debounce` passes without another
/// direction key. A newer press replaces the held one, so the last request
/// wins. Control keys are never delayed.
#[derive(Debug)]
pub struct InputHandler {
    config: InputConfig,
    pending: Option<(Direction, Instant)>,
}

impl InputHandler {
    #[must_use]
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    /// Waits up to `timeout` for one terminal event and translates it.
    ///
    /// A held direction whose quiet period ran out is returned first.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if let Some(input) = self.flush_pending(Instant::now()) {
            return Ok(Some(input));
        }

        if !event::poll(timeout)? {
            return Ok(self.flush_pending(Instant::now()));
        }

        match event::read()? {
            Event::Key(key) => Ok(self.translate(key, Instant::now())),
            _ => Ok(self.flush_pending(Instant::now())),
        }
    }

    /// Maps one key event observed at `now` to a game input.
    ///
    /// Direction keys only update the held direction and yield `None`
    /// unless the debounce window is zero.
    pub fn translate(&mut self, key: KeyEvent, now: Instant) -> Option<GameInput> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match map_key(key)? {
            GameInput::Direction(direction) if !self.config.debounce.is_zero() => {
                self.pending = Some((direction, now));
                None
            }
            input => Some(input),
        }
    }

    /// Releases the held direction once `now` is a full window past its press.
    pub fn flush_pending(&mut self, now: Instant) -> Option<GameInput> {
        let (direction, pressed_at) = self.pending?;
        if now.saturating_duration_since(pressed_at) < self.config.debounce {
            return None;
        }

        self.pending = None;
        Some(GameInput::Direction(direction))
    }
}

fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => GameInput::Direction(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => GameInput::Direction(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => GameInput::Direction(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => GameInput::Direction(Direction::Right),
        KeyCode::Enter => GameInput::Start,
        KeyCode::Char(' ') => GameInput::Stop,
        KeyCode::Char('r' | 'R') => GameInput::Reset,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}
