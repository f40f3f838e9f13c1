use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::layout::Rect;
use torus_snake::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS, GameConfig, THEME_CLASSIC,
};
use torus_snake::input::{Command, InputAdapter};
use torus_snake::logging::init_file_logging;
use torus_snake::platform::Platform;
use torus_snake::renderer::{self, CellPainter, painter_for};
use torus_snake::score::{BestScoreStore, JsonFileStore};
use torus_snake::session::Session;
use torus_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use torus_snake::ui::layout::ScreenLayout;
use tracing::info;

/// Upper bound on how long the loop blocks waiting for input while no tick is pending.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, Parser)]
#[command(version, about = "Wrap-around Snake at a constant pace")]
struct Cli {
    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    cols: u16,

    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    rows: u16,

    /// Milliseconds between two moves.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Best-score file (defaults to the platform data directory).
    #[arg(long = "best-file")]
    best_file: Option<PathBuf>,

    /// Append tracing output to this file; filter with RUST_LOG.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Draw with ASCII only.
    #[arg(long)]
    ascii: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match GameConfig::from_args(
        cli.cols,
        cli.rows,
        cli.tick_ms,
        cli.seed,
        cli.best_file,
        cli.log_file,
        cli.ascii,
    ) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid configuration: {error}");
            return ExitCode::from(2);
        }
    };

    if let Some(path) = &config.log_file {
        if let Err(error) = init_file_logging(path) {
            eprintln!("cannot open log file {}: {error}", path.display());
            return ExitCode::from(2);
        }
    }

    install_panic_hook();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("terminal error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &GameConfig) -> io::Result<()> {
    let store = config
        .best_file
        .clone()
        .map_or_else(JsonFileStore::at_default_path, JsonFileStore::new);
    info!(path = %store.path().display(), "using best-score file");

    let platform = if config.force_ascii {
        Platform::ascii()
    } else {
        Platform::detect()
    };
    let painter = painter_for(platform);

    let mut terminal_session = TerminalSession::enter()?;
    let terminal = terminal_session.terminal_mut();

    let mut session = Session::new(config.grid, config.tick_interval, config.seed, store);
    let mut input = InputAdapter::new();
    let size = terminal.size()?;
    let mut layout = ScreenLayout::compute(Rect::new(0, 0, size.width, size.height), config.grid);
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            draw(terminal, &session, &layout, painter.as_ref())?;
            needs_redraw = false;
        }

        let timeout = session
            .time_until_tick(Instant::now())
            .unwrap_or(IDLE_POLL_INTERVAL);

        if event::poll(timeout)? {
            let event = event::read()?;
            if let Event::Resize(width, height) = event {
                layout = ScreenLayout::compute(Rect::new(0, 0, width, height), config.grid);
                terminal.autoresize()?;
                needs_redraw = true;
            }

            for command in input.translate(&event, &layout) {
                if command == Command::Quit {
                    info!(best = session.state().best(), "quitting");
                    return Ok(());
                }
                needs_redraw |= session.handle(command, Instant::now());
            }
        }

        if session.fire_due(Instant::now()).is_some() {
            needs_redraw = true;
        }
    }
}

fn draw<S: BestScoreStore>(
    terminal: &mut torus_snake::terminal_runtime::AppTerminal,
    session: &Session<S>,
    layout: &ScreenLayout,
    painter: &dyn CellPainter,
) -> io::Result<()> {
    terminal.draw(|frame| {
        renderer::render(frame, session.state(), layout, painter, &THEME_CLASSIC);
    })?;
    Ok(())
}
