use crate::config::GridSize;
use crate::input::Direction;

/// Grid cell in `(row, col)` coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.row < bounds.rows && self.col < bounds.cols
    }

    /// Returns the neighbouring cell in `direction`, wrapping around the edges.
    #[must_use]
    pub fn stepped(self, direction: Direction, bounds: GridSize) -> Self {
        let row = i32::from(self.row);
        let col = i32::from(self.col);

        match direction {
            Direction::Up => Self::new(wrap(row - 1, bounds.rows), self.col),
            Direction::Down => Self::new(wrap(row + 1, bounds.rows), self.col),
            Direction::Left => Self::new(self.row, wrap(col - 1, bounds.cols)),
            Direction::Right => Self::new(self.row, wrap(col + 1, bounds.cols)),
        }
    }
}

/// Maps a coordinate at most one step outside `[0, dimension)` back inside.
///
/// `-1` becomes `dimension - 1` and `dimension` becomes `0`; in-range values
/// pass through unchanged.
#[must_use]
pub fn wrap(value: i32, dimension: u16) -> u16 {
    debug_assert!(dimension > 0);
    let upper = i32::from(dimension);

    let wrapped = if value < 0 {
        upper - 1
    } else if value >= upper {
        0
    } else {
        value
    };

    u16::try_from(wrapped).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{wrap, Position};

    const BOUNDS: GridSize = GridSize { rows: 10, cols: 8 };

    #[test]
    fn wrap_moves_one_step_back_inside() {
        assert_eq!(wrap(-1, 16), 15);
        assert_eq!(wrap(16, 16), 0);
        assert_eq!(wrap(7, 16), 7);
        assert_eq!(wrap(0, 1), 0);
    }

    #[test]
    fn stepping_off_each_edge_wraps_to_the_opposite_edge() {
        assert_eq!(
            Position::new(0, 3).stepped(Direction::Up, BOUNDS),
            Position::new(9, 3)
        );
        assert_eq!(
            Position::new(9, 3).stepped(Direction::Down, BOUNDS),
            Position::new(0, 3)
        );
        assert_eq!(
            Position::new(4, 0).stepped(Direction::Left, BOUNDS),
            Position::new(4, 7)
        );
        assert_eq!(
            Position::new(4, 7).stepped(Direction::Right, BOUNDS),
            Position::new(4, 0)
        );
    }

    #[test]
    fn stepping_inside_the_grid_moves_one_cell() {
        let start = Position::new(5, 5);

        assert_eq!(start.stepped(Direction::Up, BOUNDS), Position::new(4, 5));
        assert_eq!(start.stepped(Direction::Right, BOUNDS), Position::new(5, 6));
        assert!(start.stepped(Direction::Down, BOUNDS).is_within_bounds(BOUNDS));
    }
}
