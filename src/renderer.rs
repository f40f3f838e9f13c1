use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::config::{BORDER_ASCII, BORDER_ROUNDED, Theme};
use crate::game::{GameState, GameStatus};
use crate::platform::Platform;
use crate::ui::controls::render_controls;
use crate::ui::hud::render_hud;
use crate::ui::layout::ScreenLayout;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// What occupies a painted cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CellRole {
    Head,
    Body,
    Food,
}

/// Draws one logical cell into its terminal rect.
///
/// Implementations are picked once at startup from the terminal's capabilities.
pub trait CellPainter {
    fn paint(&self, buffer: &mut Buffer, rect: Rect, role: CellRole, theme: &Theme);

    /// Border set for the board frame.
    fn border(&self) -> border::Set;

    /// Whether captions may use non-ASCII glyphs.
    fn unicode(&self) -> bool;
}

/// Padded beads with rounded corners built from half and quadrant blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundedCells;

/// Bracketed ASCII cells for terminals without reliable Unicode.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareCells;

impl CellPainter for RoundedCells {
    fn paint(&self, buffer: &mut Buffer, rect: Rect, role: CellRole, theme: &Theme) {
        let style = role_style(role, theme);
        let width = usize::from(rect.width);

        for (row, y) in (rect.y..rect.bottom()).enumerate() {
            let line = if rect.height == 1 {
                bead_row(width, "▐", "█", "▌")
            } else if row == 0 {
                bead_row(width, "▗", "▄", "▖")
            } else if y + 1 == rect.bottom() {
                bead_row(width, "▝", "▀", "▘")
            } else {
                "█".repeat(width)
            };
            buffer.set_stringn(rect.x, y, line, width, style);
        }
    }

    fn border(&self) -> border::Set {
        BORDER_ROUNDED
    }

    fn unicode(&self) -> bool {
        true
    }
}

impl CellPainter for SquareCells {
    fn paint(&self, buffer: &mut Buffer, rect: Rect, role: CellRole, theme: &Theme) {
        let style = role_style(role, theme);
        let width = usize::from(rect.width);
        let (left, fill, right) = match role {
            CellRole::Head => ("[", "@", "]"),
            CellRole::Body => ("[", "#", "]"),
            CellRole::Food => ("(", "o", ")"),
        };
        // Brackets would hide the fill on narrow cells, except around food.
        let line = if width <= 2 && role != CellRole::Food {
            fill.repeat(width)
        } else {
            bead_row(width, left, fill, right)
        };

        for y in rect.y..rect.bottom() {
            buffer.set_stringn(rect.x, y, &line, width, style);
        }
    }

    fn border(&self) -> border::Set {
        BORDER_ASCII
    }

    fn unicode(&self) -> bool {
        false
    }
}

/// Selects the cell painter for this terminal.
#[must_use]
pub fn painter_for(platform: Platform) -> Box<dyn CellPainter> {
    if platform.supports_unicode() {
        Box::new(RoundedCells)
    } else {
        Box::new(SquareCells)
    }
}

fn bead_row(width: usize, left: &str, fill: &str, right: &str) -> String {
    match width {
        0 => String::new(),
        1 => fill.to_owned(),
        _ => format!("{left}{}{right}", fill.repeat(width - 2)),
    }
}

fn role_style(role: CellRole, theme: &Theme) -> Style {
    let base = Style::new().bg(theme.play_bg);
    match role {
        CellRole::Head => base.fg(theme.snake_head).add_modifier(Modifier::BOLD),
        CellRole::Body => base.fg(theme.snake_body),
        CellRole::Food => base.fg(theme.food),
    }
}

/// Renders the full game frame from immutable state.
pub fn render(
    frame: &mut Frame<'_>,
    state: &GameState,
    layout: &ScreenLayout,
    painter: &dyn CellPainter,
    theme: &Theme,
) {
    let block = Block::bordered()
        .border_set(painter.border())
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.play_bg));
    frame.render_widget(block, layout.board);

    render_board(frame.buffer_mut(), state, layout, painter, theme);
    render_hud(frame, layout.hud, state, theme, painter.unicode());
    render_controls(frame, layout, state, theme, painter.unicode());

    match state.status() {
        GameStatus::Idle => render_start_menu(frame, layout.board, state.best(), theme),
        GameStatus::Paused => render_pause_menu(frame, layout.board, theme),
        GameStatus::Over => render_game_over_menu(
            frame,
            layout.board,
            state.score(),
            state.best(),
            state.new_record(),
            theme,
        ),
        GameStatus::Won => {
            render_victory_menu(frame, layout.board, state.score(), state.best(), theme);
        }
        GameStatus::Running => {}
    }
}

/// Paints food and snake cells; segments outside the visible board are skipped.
pub fn render_board(
    buffer: &mut Buffer,
    state: &GameState,
    layout: &ScreenLayout,
    painter: &dyn CellPainter,
    theme: &Theme,
) {
    if let Some(rect) = state.food().and_then(|food| layout.cell_rect(food)) {
        painter.paint(buffer, rect, CellRole::Food, theme);
    }

    for (index, segment) in state.snake().segments().enumerate().rev() {
        let Some(rect) = layout.cell_rect(*segment) else {
            continue;
        };
        let role = if index == 0 {
            CellRole::Head
        } else {
            CellRole::Body
        };
        painter.paint(buffer, rect, role, theme);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::game::GameState;
    use crate::input::Direction;
    use crate::platform::Platform;
    use crate::snake::{Position, Snake};
    use crate::ui::layout::ScreenLayout;

    use super::{CellPainter, CellRole, RoundedCells, SquareCells, painter_for, render_board};

    fn symbol(buffer: &Buffer, x: u16, y: u16) -> &str {
        buffer[(x, y)].symbol()
    }

    #[test]
    fn rounded_bead_uses_half_blocks_on_a_single_row() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 1));

        RoundedCells.paint(&mut buffer, Rect::new(0, 0, 4, 1), CellRole::Body, &THEME_CLASSIC);

        assert_eq!(symbol(&buffer, 0, 0), "▐");
        assert_eq!(symbol(&buffer, 1, 0), "█");
        assert_eq!(symbol(&buffer, 3, 0), "▌");
    }

    #[test]
    fn rounded_bead_rounds_corners_when_tall() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 2));

        RoundedCells.paint(&mut buffer, Rect::new(0, 0, 4, 2), CellRole::Food, &THEME_CLASSIC);

        assert_eq!(symbol(&buffer, 0, 0), "▗");
        assert_eq!(symbol(&buffer, 3, 0), "▖");
        assert_eq!(symbol(&buffer, 0, 1), "▝");
        assert_eq!(symbol(&buffer, 1, 1), "▀");
    }

    #[test]
    fn square_cells_mark_roles_in_ascii() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 2, 1));

        SquareCells.paint(&mut buffer, Rect::new(0, 0, 2, 1), CellRole::Head, &THEME_CLASSIC);
        assert_eq!(symbol(&buffer, 0, 0), "@");
        assert_eq!(symbol(&buffer, 1, 0), "@");

        SquareCells.paint(&mut buffer, Rect::new(0, 0, 2, 1), CellRole::Food, &THEME_CLASSIC);
        assert_eq!(symbol(&buffer, 0, 0), "(");
        assert_eq!(symbol(&buffer, 1, 0), ")");

        let mut wide = Buffer::empty(Rect::new(0, 0, 4, 1));
        SquareCells.paint(&mut wide, Rect::new(0, 0, 4, 1), CellRole::Body, &THEME_CLASSIC);
        assert_eq!(symbol(&wide, 0, 0), "[");
        assert_eq!(symbol(&wide, 1, 0), "#");
    }

    #[test]
    fn painter_follows_platform_capabilities() {
        assert!(!painter_for(Platform::ascii()).unicode());
    }

    #[test]
    fn board_paints_head_food_and_body() {
        let area = Rect::new(0, 0, 80, 40);
        let grid = GridSize::default();
        let layout = ScreenLayout::compute(area, grid);
        let mut state = GameState::new_with_seed(grid, 0, 1);
        state.arrange(
            Snake::from_segments(vec![Position { x: 3, y: 2 }, Position { x: 2, y: 2 }])
                .expect("non-empty"),
            Direction::Right,
            Some(Position { x: 7, y: 2 }),
            0,
        );
        let mut buffer = Buffer::empty(area);

        render_board(&mut buffer, &state, &layout, &SquareCells, &THEME_CLASSIC);

        let head = layout.cell_rect(Position { x: 3, y: 2 }).expect("visible");
        let body = layout.cell_rect(Position { x: 2, y: 2 }).expect("visible");
        let food = layout.cell_rect(Position { x: 7, y: 2 }).expect("visible");
        assert_eq!(symbol(&buffer, head.x, head.y), "@");
        assert_eq!(symbol(&buffer, body.x, body.y), "#");
        assert_eq!(buffer[(head.x, head.y)].fg, THEME_CLASSIC.snake_head);
        assert_eq!(buffer[(body.x, body.y)].fg, THEME_CLASSIC.snake_body);
        assert_eq!(buffer[(food.x, food.y)].fg, THEME_CLASSIC.food);
    }
}
