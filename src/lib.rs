//! Snake on a wrap-around grid.
//!
//! The engine ([`game::GameState`]) talks to the outside world only through
//! the [`boundary::RenderSink`] and [`boundary::Clock`] traits. The terminal
//! front end supplies [`board::Board`] and [`clock::IntervalClock`] for them.

pub mod board;
pub mod boundary;
pub mod clock;
pub mod config;
pub mod difficulty;
pub mod game;
pub mod goal;
pub mod grid;
pub mod input;
pub mod movement;
pub mod renderer;
pub mod resolver;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
