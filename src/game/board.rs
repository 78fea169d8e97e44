use super::cell::Cell;

/// Grid geometry and apple placement rules, in cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub columns: i32,
    pub rows: i32,
    /// Minimum Euclidean distance between a fresh apple and any snake cell.
    pub min_apple_distance: f64,
    /// Random samples tried before falling back to a scan.
    pub apple_retry_limit: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            columns: 60,
            rows: 60,
            min_apple_distance: 2.0,
            apple_retry_limit: 1000,
        }
    }
}

impl Board {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    /// Small board for tests
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.columns && cell.y >= 0 && cell.y < self.rows
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.columns / 2, self.rows / 2)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| Cell::new(x, y)))
    }
}
