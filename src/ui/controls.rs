use ratatui::Frame;
use ratatui::style::{Modifier, Style};

use crate::config::Theme;
use crate::game::GameState;
use crate::ui::layout::{ControlButton, ScreenLayout};

/// Draws the clickable d-pad and the Start/Pause/Restart buttons.
///
/// Buttons that do nothing in the current state are dimmed.
pub fn render_controls(
    frame: &mut Frame<'_>,
    layout: &ScreenLayout,
    state: &GameState,
    theme: &Theme,
    unicode: bool,
) {
    let base = Style::default().fg(theme.button_fg).bg(theme.button_bg);
    let buffer = frame.buffer_mut();

    for (button, rect) in &layout.buttons {
        let style = if button_is_active(*button, state) {
            base.add_modifier(Modifier::BOLD)
        } else {
            base.add_modifier(Modifier::DIM)
        };
        buffer.set_stringn(
            rect.x,
            rect.y,
            button.label(unicode),
            usize::from(rect.width),
            style,
        );
    }
}

fn button_is_active(button: ControlButton, state: &GameState) -> bool {
    match button {
        ControlButton::Pad(_) | ControlButton::Restart => true,
        ControlButton::Start | ControlButton::Pause => !state.is_over(),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::game::GameState;
    use crate::input::Direction;
    use crate::ui::layout::{ControlButton, ScreenLayout};

    use super::render_controls;

    #[test]
    fn buttons_are_drawn_at_their_hit_areas() {
        let grid = GridSize::default();
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 40), grid);
        let state = GameState::new_with_seed(grid, 0, 1);
        let mut terminal =
            Terminal::new(TestBackend::new(80, 40)).expect("test backend should build");

        terminal
            .draw(|frame| render_controls(frame, &layout, &state, &THEME_CLASSIC, false))
            .expect("draw should succeed");

        let buffer = terminal.backend().buffer();
        let up = layout
            .button_rect(ControlButton::Pad(Direction::Up))
            .expect("pad fits");
        let start = layout.button_rect(ControlButton::Start).expect("start fits");

        assert_eq!(buffer[(up.x + 2, up.y)].symbol(), "^");
        assert_eq!(buffer[(start.x + 1, start.y)].symbol(), "S");
    }
}
