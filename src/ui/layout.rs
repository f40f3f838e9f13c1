use ratatui::layout::{Constraint, Layout, Position as TermPosition, Rect};

use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::Position;

/// Terminal columns per logical cell at scale 1.
const BASE_CELL_WIDTH: u16 = 2;
const HUD_HEIGHT: u16 = 1;
const CONTROLS_HEIGHT: u16 = 3;
const PAD_BUTTON_WIDTH: u16 = 5;
const CONTROL_GAP: u16 = 3;
const MENU_BUTTON_GAP: u16 = 1;

/// Clickable on-screen controls.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ControlButton {
    Pad(Direction),
    Start,
    Pause,
    Restart,
}

impl ControlButton {
    /// Button caption, padded to the button width.
    #[must_use]
    pub fn label(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Pad(Direction::Up), true) => "  ▲  ",
            (Self::Pad(Direction::Down), true) => "  ▼  ",
            (Self::Pad(Direction::Left), true) => "  ◀  ",
            (Self::Pad(Direction::Right), true) => "  ▶  ",
            (Self::Pad(Direction::Up), false) => "  ^  ",
            (Self::Pad(Direction::Down), false) => "  v  ",
            (Self::Pad(Direction::Left), false) => "  <  ",
            (Self::Pad(Direction::Right), false) => "  >  ",
            (Self::Start, _) => " Start ",
            (Self::Pause, _) => " Pause ",
            (Self::Restart, _) => " Restart ",
        }
    }

    fn width(self) -> u16 {
        // Every caption is ASCII-width, one column per char.
        self.label(false).len() as u16
    }
}

/// Screen geometry derived from the terminal size and the logical grid.
///
/// Recomputed on every resize; the grid itself never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Bordered board frame, clipped to the terminal.
    pub board: Rect,
    /// Visible part of the cell area inside the border.
    pub clip: Rect,
    /// Top-left terminal cell of logical cell (0, 0).
    pub origin: (u16, u16),
    pub cell_width: u16,
    pub cell_height: u16,
    pub hud: Rect,
    pub controls: Rect,
    pub buttons: Vec<(ControlButton, Rect)>,
}

impl ScreenLayout {
    /// Fits the board into `area` with the largest integer scale that shows
    /// every cell, falling back to scale 1 with clipping on tiny terminals.
    #[must_use]
    pub fn compute(area: Rect, grid: GridSize) -> Self {
        let [board_area, hud, controls] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(HUD_HEIGHT),
            Constraint::Length(CONTROLS_HEIGHT),
        ])
        .areas(area);

        let avail_width = board_area.width.saturating_sub(2);
        let avail_height = board_area.height.saturating_sub(2);
        let scale = (avail_width / (grid.width * BASE_CELL_WIDTH))
            .min(avail_height / grid.height)
            .max(1);
        let cell_width = BASE_CELL_WIDTH * scale;
        let cell_height = scale;

        let board_width = grid.width.saturating_mul(cell_width).saturating_add(2);
        let board_height = grid.height.saturating_mul(cell_height).saturating_add(2);
        let board_x = board_area.x + board_area.width.saturating_sub(board_width) / 2;
        let board_y = board_area.y + board_area.height.saturating_sub(board_height) / 2;

        let board =
            Rect::new(board_x, board_y, board_width, board_height).intersection(board_area);
        let origin = (board_x.saturating_add(1), board_y.saturating_add(1));
        let clip = Rect::new(
            origin.0,
            origin.1,
            board_width.saturating_sub(2),
            board_height.saturating_sub(2),
        )
        .intersection(board_area);

        Self {
            board,
            clip,
            origin,
            cell_width,
            cell_height,
            hud,
            controls,
            buttons: control_buttons(controls),
        }
    }

    /// Returns the visible terminal rect of a logical cell.
    #[must_use]
    pub fn cell_rect(&self, position: Position) -> Option<Rect> {
        let x_offset = u16::try_from(position.x).ok()?.checked_mul(self.cell_width)?;
        let y_offset = u16::try_from(position.y).ok()?.checked_mul(self.cell_height)?;
        let rect = Rect::new(
            self.origin.0.checked_add(x_offset)?,
            self.origin.1.checked_add(y_offset)?,
            self.cell_width,
            self.cell_height,
        )
        .intersection(self.clip);

        (!rect.is_empty()).then_some(rect)
    }

    /// Returns true when the terminal cell lies on the visible board.
    #[must_use]
    pub fn board_contains(&self, column: u16, row: u16) -> bool {
        self.clip.contains(TermPosition::new(column, row))
    }

    /// Returns the control under a terminal cell.
    #[must_use]
    pub fn button_at(&self, column: u16, row: u16) -> Option<ControlButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(TermPosition::new(column, row)))
            .map(|(button, _)| *button)
    }

    /// Returns the visible rect of a control.
    #[must_use]
    pub fn button_rect(&self, button: ControlButton) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(candidate, _)| *candidate == button)
            .map(|(_, rect)| *rect)
    }
}

/// D-pad on the left, Start/Pause/Restart on the middle row to its right.
fn control_buttons(controls: Rect) -> Vec<(ControlButton, Rect)> {
    let menu = [ControlButton::Start, ControlButton::Pause, ControlButton::Restart];
    let menu_width: u16 = menu.iter().map(|button| button.width()).sum::<u16>()
        + MENU_BUTTON_GAP * (menu.len() as u16 - 1);
    let pad_width = PAD_BUTTON_WIDTH * 3;
    let total_width = pad_width + CONTROL_GAP + menu_width;

    let left = controls.x + controls.width.saturating_sub(total_width) / 2;
    let top = controls.y;
    let pad = |column: u16, row: u16| {
        Rect::new(
            left.saturating_add(column * PAD_BUTTON_WIDTH),
            top.saturating_add(row),
            PAD_BUTTON_WIDTH,
            1,
        )
    };

    let mut buttons = vec![
        (ControlButton::Pad(Direction::Up), pad(1, 0)),
        (ControlButton::Pad(Direction::Left), pad(0, 1)),
        (ControlButton::Pad(Direction::Right), pad(2, 1)),
        (ControlButton::Pad(Direction::Down), pad(1, 2)),
    ];

    let mut x = left.saturating_add(pad_width + CONTROL_GAP);
    for button in menu {
        let rect = Rect::new(x, top.saturating_add(1), button.width(), 1);
        buttons.push((button, rect));
        x = x.saturating_add(button.width() + MENU_BUTTON_GAP);
    }

    buttons
        .into_iter()
        .map(|(button, rect)| (button, rect.intersection(controls)))
        .filter(|(_, rect)| !rect.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{ControlButton, ScreenLayout};

    #[test]
    fn board_scales_with_terminal_size() {
        let grid = GridSize {
            width: 10,
            height: 10,
        };

        let small = ScreenLayout::compute(Rect::new(0, 0, 40, 20), grid);
        let large = ScreenLayout::compute(Rect::new(0, 0, 120, 60), grid);

        assert_eq!((small.cell_width, small.cell_height), (2, 1));
        assert_eq!((large.cell_width, large.cell_height), (10, 5));
        assert_eq!(large.clip.width, 100);
        assert_eq!(large.clip.height, 50);
    }

    #[test]
    fn cell_rects_tile_the_board() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 40), GridSize::default());

        let first = layout.cell_rect(Position { x: 0, y: 0 }).expect("visible");
        let second = layout.cell_rect(Position { x: 1, y: 0 }).expect("visible");

        assert_eq!((first.x, first.y), layout.origin);
        assert_eq!(second.x, first.x + layout.cell_width);
        assert_eq!(layout.cell_rect(Position { x: -1, y: 0 }), None);
    }

    #[test]
    fn tiny_terminal_clips_instead_of_panicking() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 12, 8), GridSize::default());

        assert_eq!(layout.cell_width, 2);
        assert!(layout.cell_rect(Position { x: 20, y: 20 }).is_none());
        assert!(layout.board.width <= 12);
    }

    #[test]
    fn controls_have_distinct_hit_areas() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 40), GridSize::default());
        let up = layout
            .button_rect(ControlButton::Pad(Direction::Up))
            .expect("pad fits");
        let restart = layout
            .button_rect(ControlButton::Restart)
            .expect("restart fits");

        assert_eq!(layout.buttons.len(), 7);
        assert_eq!(
            layout.button_at(up.x, up.y),
            Some(ControlButton::Pad(Direction::Up))
        );
        assert_eq!(
            layout.button_at(restart.right() - 1, restart.y),
            Some(ControlButton::Restart)
        );
        assert_eq!(layout.button_at(0, 0), None);
    }
}
