//! Fixed-size column-major grids and per-cell generation flags

use core::ops::{Index, IndexMut};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// A `width x height` grid indexed as `grid[(x, y)]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Vec<T>>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every cell set to `value`
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![value; height]; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Overwrite every cell
    pub fn fill(&mut self, value: T) {
        for col in &mut self.cells {
            col.fill(value);
        }
    }

    /// Check that a signed coordinate falls inside the grid
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Value at a signed coordinate, `None` outside the grid
    pub fn get(&self, p: Point) -> Option<T> {
        if self.in_bounds(p) {
            Some(self.cells[p.x as usize][p.y as usize])
        } else {
            None
        }
    }

    /// Set a signed coordinate; writes outside the grid are dropped
    pub fn set(&mut self, p: Point, value: T) {
        if self.in_bounds(p) {
            self.cells[p.x as usize][p.y as usize] = value;
        }
    }

    /// All coordinates in row-major order (y outer, x inner)
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<T> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Iterate over all cell values (column-major)
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.cells.iter().flat_map(|col| col.iter())
    }
}

impl Grid<bool> {
    /// Number of set cells
    pub fn count(&self) -> usize {
        self.values().filter(|&&b| b).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.cells[x][y]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        &mut self.cells[x][y]
    }
}

bitflags! {
    /// Per-cell generation flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        /// Tile may not be overwritten for the rest of the attempt
        const PROTECTED = 0x01;
        /// Part of the seed chamber; walls are never extended here
        const CHAMBER = 0x02;
    }
}

impl Grid<CellFlags> {
    /// Check a flag, treating out-of-bounds as unset
    pub fn has(&self, p: Point, flag: CellFlags) -> bool {
        self.get(p).is_some_and(|f| f.contains(flag))
    }

    /// Set a flag on one cell
    pub fn insert(&mut self, p: Point, flag: CellFlags) {
        if self.in_bounds(p) {
            self.cells[p.x as usize][p.y as usize].insert(flag);
        }
    }

    /// Clear a flag from every cell
    pub fn clear(&mut self, flag: CellFlags) {
        for col in &mut self.cells {
            for cell in col.iter_mut() {
                cell.remove(flag);
            }
        }
    }

    /// Boolean mask of the cells carrying `flag`
    pub fn mask(&self, flag: CellFlags) -> Grid<bool> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self
                .cells
                .iter()
                .map(|col| col.iter().map(|f| f.contains(flag)).collect())
                .collect(),
        }
    }
}
