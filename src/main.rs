use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use torus_snake::board::Board;
use torus_snake::clock::IntervalClock;
use torus_snake::config::{
    ConfigError, GameConfig, GridSize, ScorePolicy, DEFAULT_DEBOUNCE_MS, DEFAULT_GRID_COLS,
    DEFAULT_GRID_ROWS, FRAME_INTERVAL_MS,
};
use torus_snake::difficulty::{LevelPolicy, LevelTable};
use torus_snake::game::GameState;
use torus_snake::input::{GameInput, InputConfig, InputHandler};
use torus_snake::terminal_runtime::BoardScreen;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    rows: u16,

    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    cols: u16,

    /// JSON level table replacing the built-in easy..impossible tiers.
    #[arg(long)]
    levels: Option<PathBuf>,

    /// Override the level table's selection policy.
    #[arg(long, value_enum)]
    level_policy: Option<LevelPolicy>,

    /// How a self-bite affects the score.
    #[arg(long, value_enum, default_value_t = ScorePolicy::RecomputeOnTruncation)]
    score_policy: ScorePolicy,

    /// Seed for goal placement; omitted means a random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Quiet milliseconds before the last direction press is applied.
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Write log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used with `--log-file`.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;
    let config = build_config(&cli)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error))?;

    run(&cli, config)
}

fn init_logging(cli: &Cli) -> io::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    WriteLogger::init(cli.log_level, Config::default(), File::create(path)?)
        .map_err(io::Error::other)
}

fn build_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut levels = match &cli.levels {
        Some(path) => LevelTable::load(path)?,
        None => LevelTable::default(),
    };
    if let Some(policy) = cli.level_policy {
        levels.policy = policy;
    }

    let config = GameConfig {
        grid: GridSize {
            rows: cli.rows,
            cols: cli.cols,
        },
        score_policy: cli.score_policy,
        levels,
        ..GameConfig::default()
    };
    config.validate()?;

    Ok(config)
}

fn run(cli: &Cli, config: GameConfig) -> io::Result<()> {
    info!(
        "starting {}x{} game, {:?} levels, {:?} scoring",
        config.grid.rows, config.grid.cols, config.levels.policy, config.score_policy
    );

    let mut board = Board::new(config.grid);
    let mut clock = IntervalClock::new();
    let mut input = InputHandler::new(InputConfig {
        debounce: Duration::from_millis(cli.debounce_ms),
    });
    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };
    state.redraw(&mut board);

    let mut screen = BoardScreen::open()?;
    loop {
        screen.show(&board, &state)?;

        if let Some(game_input) = input.poll_input(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if game_input == GameInput::Quit {
                break;
            }

            state.apply_input(game_input, &mut board, &mut clock);
        }

        if clock.tick_due(Instant::now()) {
            state.tick(&mut board, &mut clock);
        }
    }

    screen.close()?;
    info!("quit with score {}", state.score);
    Ok(())
}
