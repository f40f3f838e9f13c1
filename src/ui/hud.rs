use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::{GameState, GameStatus};

/// Renders the one-line score row.
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    theme: &Theme,
    unicode: bool,
) {
    let line = info_line(
        state.score(),
        state.best(),
        state.status(),
        usize::from(area.width),
        unicode,
        theme,
    );

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Idle => "READY",
        GameStatus::Running => "RUNNING",
        GameStatus::Paused => "PAUSED",
        GameStatus::Over => "GAME OVER",
        GameStatus::Won => "BOARD CLEARED",
    }
}

fn separator(unicode: bool) -> &'static str {
    if unicode { " │ " } else { " | " }
}

/// Score │ Best │ status, with one-letter labels when the row is too narrow.
fn info_line(
    score: u32,
    best: u32,
    status: GameStatus,
    available_width: usize,
    unicode: bool,
    theme: &Theme,
) -> Line<'static> {
    let compact = info_width(score, best, status, false) > available_width;
    let score_label = if compact { "S" } else { "Score" };
    let best_label = if compact { "B" } else { "Best" };
    let sep = separator(unicode);

    let label = Style::default().fg(theme.hud_label);
    let value = Style::default()
        .fg(theme.hud_value)
        .add_modifier(Modifier::BOLD);
    let best_value = if score > 0 && score == best {
        value.fg(theme.food)
    } else {
        value
    };

    Line::from(vec![
        Span::styled(format!("{score_label}: "), label),
        Span::styled(score.to_string(), value),
        Span::styled(sep, label),
        Span::styled(format!("{best_label}: "), label),
        Span::styled(best.to_string(), best_value),
        Span::styled(sep, label),
        Span::styled(status_label(status), label),
    ])
}

fn info_width(score: u32, best: u32, status: GameStatus, compact: bool) -> usize {
    let score_label = if compact { "S" } else { "Score" };
    let best_label = if compact { "B" } else { "Best" };

    format!("{score_label}: {score}").len()
        + 3
        + format!("{best_label}: {best}").len()
        + 3
        + status_label(status).len()
}
