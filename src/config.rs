use std::path::PathBuf;
use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;
use thiserror::Error;

use crate::snake::Position;

/// Default number of columns, matching a 21 px cell on a 441 px board.
pub const DEFAULT_GRID_WIDTH: u16 = 21;

/// Default number of rows.
pub const DEFAULT_GRID_HEIGHT: u16 = 21;

/// Fixed delay between two ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 240;

/// Smallest accepted tick delay.
pub const MIN_TICK_INTERVAL_MS: u64 = 20;

/// Smallest accepted extent on either grid axis.
pub const MIN_GRID_EXTENT: u16 = 2;

/// Largest accepted extent on either grid axis.
pub const MAX_GRID_EXTENT: u16 = 200;

/// Invalid runtime configuration.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error(
        "grid {width}x{height} is too small: both axes need at least {} cells",
        MIN_GRID_EXTENT
    )]
    GridTooSmall { width: u16, height: u16 },
    #[error("grid {width}x{height} is too large: axes are limited to {} cells", MAX_GRID_EXTENT)]
    GridTooLarge { width: u16, height: u16 },
    #[error("tick interval of {0} ms is below the {} ms minimum", MIN_TICK_INTERVAL_MS)]
    TickTooShort(u64),
}

/// Logical grid dimensions. The grid wraps on both axes.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Validates dimensions so a fresh one-cell snake always leaves room for food.
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width < MIN_GRID_EXTENT || height < MIN_GRID_EXTENT {
            return Err(ConfigError::GridTooSmall { width, height });
        }
        if width > MAX_GRID_EXTENT || height > MAX_GRID_EXTENT {
            return Err(ConfigError::GridTooLarge { width, height });
        }

        Ok(Self { width, height })
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the cell a new snake starts on.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
        }
    }
}

/// Everything the binary needs to start a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub grid: GridSize,
    pub tick_interval: Duration,
    /// Fixed RNG seed for reproducible food placement.
    pub seed: Option<u64>,
    /// Overrides the platform data directory for the best-score file.
    pub best_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub force_ascii: bool,
}

impl GameConfig {
    /// Builds a validated configuration from raw command-line values.
    pub fn from_args(
        cols: u16,
        rows: u16,
        tick_ms: u64,
        seed: Option<u64>,
        best_file: Option<PathBuf>,
        log_file: Option<PathBuf>,
        force_ascii: bool,
    ) -> Result<Self, ConfigError> {
        if tick_ms < MIN_TICK_INTERVAL_MS {
            return Err(ConfigError::TickTooShort(tick_ms));
        }

        Ok(Self {
            grid: GridSize::new(cols, rows)?,
            tick_interval: Duration::from_millis(tick_ms),
            seed,
            best_file,
            log_file,
            force_ascii,
        })
    }
}

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub button_fg: Color,
    pub button_bg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Violet snake, green food on a near-black board.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::Rgb(0x7c, 0x5c, 0xff),
    snake_body: Color::Rgb(0xa9, 0xb1, 0xff),
    food: Color::Rgb(0x22, 0xc5, 0x5e),
    play_bg: Color::Rgb(0x0b, 0x0e, 0x1a),
    border_fg: Color::Rgb(0x3b, 0x42, 0x6b),
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    button_fg: Color::White,
    button_bg: Color::Rgb(0x2a, 0x2f, 0x52),
    menu_title: Color::Rgb(0x7c, 0x5c, 0xff),
    menu_footer: Color::DarkGray,
};

/// Border around the board when Unicode is available.
pub const BORDER_ROUNDED: border::Set = border::ROUNDED;

/// Border around the board in ASCII mode.
pub const BORDER_ASCII: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};
