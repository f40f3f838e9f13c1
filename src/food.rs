use rand::Rng;
use tracing::debug;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Picks a uniformly random cell that the snake does not occupy.
///
/// Returns `None` when the snake covers every cell of the grid.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    if snake.len() >= bounds.total_cells() {
        return None;
    }

    let mut candidates = Vec::with_capacity(bounds.total_cells() - snake.len());
    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let food = candidates[rng.gen_range(0..candidates.len())];
    debug!(x = food.x, y = food.y, free = candidates.len(), "placed food");
    Some(food)
}
