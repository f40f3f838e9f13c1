use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position wrapped into bounds on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(bounds.width)),
            y: wrap_axis(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the neighbouring position one unit step along `direction`, unwrapped.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    value.rem_euclid(upper_bound)
}

/// Ordered snake body, head first and tail last.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Creates a one-cell snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self { body }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }

        Some(Self {
            body: VecDeque::from(segments),
        })
    }

    /// Prepends `new_head`; the tail is dropped unless `grow` is set.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn position_wrapping_keeps_coordinates_inside_bounds() {
        let bounds = GridSize {
            width: 10,
            height: 8,
        };

        let wrapped_left = Position { x: -1, y: 3 }.wrapped(bounds);
        let wrapped_bottom = Position { x: 4, y: 8 }.wrapped(bounds);
        let wrapped_right = Position { x: 10, y: 0 }.wrapped(bounds);

        assert_eq!(wrapped_left, Position { x: 9, y: 3 });
        assert_eq!(wrapped_bottom, Position { x: 4, y: 0 });
        assert_eq!(wrapped_right, Position { x: 0, y: 0 });
        assert!(wrapped_left.is_within_bounds(bounds));
    }

    #[test]
    fn offset_follows_unit_vector() {
        let origin = Position { x: 3, y: 3 };

        assert_eq!(origin.offset(Direction::Up), Position { x: 3, y: 2 });
        assert_eq!(origin.offset(Direction::Down), Position { x: 3, y: 4 });
        assert_eq!(origin.offset(Direction::Left), Position { x: 2, y: 3 });
        assert_eq!(origin.offset(Direction::Right), Position { x: 4, y: 3 });
    }

    #[test]
    fn advance_without_growth_translates_body() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        snake.advance(Position { x: 6, y: 5 }, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_with_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 });

        snake.advance(Position { x: 6, y: 5 }, true);

        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Position { x: 5, y: 5 });
    }

    #[test]
    fn empty_segment_list_is_rejected() {
        assert!(Snake::from_segments(Vec::new()).is_none());
    }

    #[test]
    fn tail_counts_as_occupied() {
        let snake = Snake::from_segments(vec![
            Position { x: 1, y: 1 },
            Position { x: 2, y: 1 },
            Position { x: 2, y: 2 },
        ])
        .expect("segments are non-empty");

        assert!(snake.occupies(Position { x: 2, y: 2 }));
        assert!(!snake.occupies(Position { x: 3, y: 2 }));
    }

    #[test]
    fn segments_can_be_walked_from_the_tail() {
        let snake = Snake::from_segments(vec![Position { x: 1, y: 1 }, Position { x: 2, y: 1 }])
            .expect("segments are non-empty");

        let tail_first: Vec<_> = snake.segments().enumerate().rev().collect();
        assert_eq!(
            tail_first,
            vec![(1, &Position { x: 2, y: 1 }), (0, &Position { x: 1, y: 1 })]
        );
    }
}
