use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::warn;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::board::Board;
use crate::game::GameState;
use crate::renderer;

type ScreenTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// The full-screen view the board is drawn into while the game runs.
///
/// Opening it takes over the terminal (raw keys, alternate buffer, hidden
/// cursor). `close` hands the terminal back and reports failures; a screen
/// dropped without `close`, or a panic, restores it silently.
pub struct BoardScreen {
    terminal: ScreenTerminal,
    active: bool,
}

impl BoardScreen {
    pub fn open() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let terminal = Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
            let _ = hand_back_terminal();
        })?;

        Ok(Self {
            terminal,
            active: true,
        })
    }

    /// Draws one frame of `board` and the overlays for `state`.
    pub fn show(&mut self, board: &Board, state: &GameState) -> io::Result<()> {
        self.terminal
            .draw(|frame| renderer::render(frame, board, state))
            .map(|_| ())
    }

    pub fn close(mut self) -> io::Result<()> {
        self.active = false;
        hand_back_terminal()
    }
}

impl Drop for BoardScreen {
    fn drop(&mut self) {
        if self.active {
            if let Err(error) = hand_back_terminal() {
                warn!("terminal restore on drop failed: {error}");
            }
        }
    }
}

fn install_panic_hook() {
    let previous = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        let _ = hand_back_terminal();
        previous(info);
    }));
}

fn hand_back_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;
    raw
}
