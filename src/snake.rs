use crate::config::GridSize;
use crate::grid::Position;
use crate::input::{direction_change_is_valid, Direction};

/// One body cell plus the direction it was moving when last updated.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub position: Position,
    pub direction: Direction,
}

impl Segment {
    #[must_use]
    pub const fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// Ordered snake body; index 0 is the head.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    segments: Vec<Segment>,
}

impl Snake {
    /// Creates the starting snake: head at the grid centre, body trailing
    /// behind it, every segment moving in `direction`.
    #[must_use]
    pub fn initial(bounds: GridSize, length: usize, direction: Direction) -> Self {
        let head = Position::new(bounds.rows / 2, bounds.cols / 2);
        let behind = direction.opposite();

        let mut segments = Vec::with_capacity(length);
        let mut position = head;
        for _ in 0..length.max(1) {
            segments.push(Segment::new(position, direction));
            position = position.stepped(behind, bounds);
        }

        Self { segments }
    }

    /// Creates a snake from explicit segments (first is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    /// Returns the head segment.
    #[must_use]
    pub fn head(&self) -> Segment {
        *self
            .segments
            .first()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the tail segment.
    #[must_use]
    pub fn tail(&self) -> Segment {
        *self
            .segments
            .last()
            .expect("snake body must always contain at least one segment")
    }

    /// Points the head in `direction` unless that would reverse it.
    ///
    /// Returns whether the direction was applied.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let Some(head) = self.segments.first_mut() else {
            return false;
        };

        if !direction_change_is_valid(head.direction, direction) {
            return false;
        }

        head.direction = direction;
        true
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.segments
            .iter()
            .any(|segment| segment.position == position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Collects segment positions from head to tail.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.segments.iter().map(|segment| segment.position).collect()
    }

    pub(crate) fn push_tail(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.segments.truncate(len.max(1));
    }

    pub(crate) fn segments_mut(&mut self) -> &mut [Segment] {
        &mut self.segments
    }
}
