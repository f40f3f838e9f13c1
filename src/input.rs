use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::trace;

use crate::ui::layout::{ControlButton, ScreenLayout};

/// Terminal cells are roughly twice as tall as wide; vertical drag distance is
/// scaled by this factor before comparing axes.
pub const CELL_ASPECT: i32 = 2;

/// Minimum drag length (in terminal columns) that counts as a swipe.
pub const SWIPE_MIN_DISTANCE: i32 = 4;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
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

    /// Unit vector in grid coordinates (y grows downwards).
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Requests produced by every input device.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Turn(Direction),
    Start,
    TogglePause,
    Restart,
    Quit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps a key press to a command.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let quit = matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'));
        return quit.then_some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(Command::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Turn(Direction::Right))
        }
        KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Enter => Some(Command::Start),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Maps a clicked on-screen control to commands.
///
/// Pad buttons also start an idle or paused run.
#[must_use]
pub fn commands_for_button(button: ControlButton) -> Vec<Command> {
    match button {
        ControlButton::Pad(direction) => vec![Command::Turn(direction), Command::Start],
        ControlButton::Start => vec![Command::Start],
        ControlButton::Pause => vec![Command::TogglePause],
        ControlButton::Restart => vec![Command::Restart],
    }
}

/// Classifies a drag displacement in terminal cells as a swipe direction.
///
/// Returns `None` for drags shorter than [`SWIPE_MIN_DISTANCE`].
#[must_use]
pub fn swipe_direction(dx: i32, dy: i32) -> Option<Direction> {
    let scaled_dy = dy * CELL_ASPECT;
    if dx.abs() + scaled_dy.abs() < SWIPE_MIN_DISTANCE {
        return None;
    }

    let direction = if dx.abs() > scaled_dy.abs() {
        if dx > 0 { Direction::Right } else { Direction::Left }
    } else if scaled_dy > 0 {
        Direction::Down
    } else {
        Direction::Up
    };

    Some(direction)
}

/// Translates keyboard and mouse events into commands.
///
/// Mouse presses on the board begin a swipe gesture that ends as soon as a
/// direction is recognized or the button is released.
#[derive(Debug, Default)]
pub struct InputAdapter {
    swipe_origin: Option<(u16, u16)>,
}

impl InputAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the commands produced by one terminal event, in order.
    pub fn translate(&mut self, event: &Event, layout: &ScreenLayout) -> Vec<Command> {
        match event {
            Event::Key(key) => command_for_key(*key).into_iter().collect(),
            Event::Mouse(mouse) => self.translate_mouse(*mouse, layout),
            _ => Vec::new(),
        }
    }

    fn translate_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) -> Vec<Command> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(button) = layout.button_at(mouse.column, mouse.row) {
                    self.swipe_origin = None;
                    trace!(?button, "control clicked");
                    return commands_for_button(button);
                }
                if layout.board_contains(mouse.column, mouse.row) {
                    self.swipe_origin = Some((mouse.column, mouse.row));
                }
                Vec::new()
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some((origin_x, origin_y)) = self.swipe_origin else {
                    return Vec::new();
                };
                let dx = i32::from(mouse.column) - i32::from(origin_x);
                let dy = i32::from(mouse.row) - i32::from(origin_y);
                let Some(direction) = swipe_direction(dx, dy) else {
                    return Vec::new();
                };

                self.swipe_origin = None;
                trace!(?direction, dx, dy, "swipe recognized");
                vec![Command::Turn(direction), Command::Start]
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.swipe_origin = None;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}
