use crate::boundary::RenderSink;
use crate::config::GridSize;
use crate::grid::Position;

/// Visual state of one board cell.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Cell {
    pub occupied: bool,
    pub goal: bool,
}

/// In-memory picture of the playing field, fed by the engine.
#[derive(Debug, Clone)]
pub struct Board {
    bounds: GridSize,
    cells: Vec<Cell>,
    score: u32,
}

impl Board {
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self {
            bounds,
            cells: vec![Cell::default(); bounds.total_cells()],
            score: 0,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the cell at `position`; out-of-range cells read as empty.
    #[must_use]
    pub fn cell(&self, position: Position) -> Cell {
        self.index(position)
            .map(|index| self.cells[index])
            .unwrap_or_default()
    }

    /// Score most recently pushed by the engine.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Iterates over goal-marked cells.
    pub fn goal_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|position| self.cell(*position).goal)
    }

    /// Iterates over snake-painted cells.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|position| self.cell(*position).occupied)
    }

    fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.bounds.cols;
        (0..self.bounds.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    fn index(&self, position: Position) -> Option<usize> {
        position.is_within_bounds(self.bounds).then(|| {
            usize::from(position.row) * usize::from(self.bounds.cols) + usize::from(position.col)
        })
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        let index = self.index(position)?;
        self.cells.get_mut(index)
    }
}

impl RenderSink for Board {
    fn paint_occupied(&mut self, positions: &[Position]) {
        for position in positions {
            if let Some(cell) = self.cell_mut(*position) {
                cell.occupied = true;
            }
        }
    }

    fn clear_all_non_goal(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| !cell.goal) {
            cell.occupied = false;
        }
    }

    fn mark_goal(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            cell.goal = true;
        }
    }

    fn unmark_goal(&mut self, position: Position) {
        if let Some(cell) = self.cell_mut(position) {
            *cell = Cell::default();
        }
    }

    fn set_score_display(&mut self, score: u32) {
        self.score = score;
    }
}
