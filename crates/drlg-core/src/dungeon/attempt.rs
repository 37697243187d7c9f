//! State owned by one generation attempt

use crate::consts::{DMAXX, DMAXY, MAXDUNX, MAXDUNY};
use crate::geometry::{Point, Rectangle};
use crate::grid::{CellFlags, Grid};
use crate::tile::Tile;

/// Every grid a generation attempt mutates.
///
/// The orchestrator owns exactly one of these and resets it before each
/// attempt; components receive it by mutable reference.
#[derive(Debug, Clone)]
pub struct GenerationAttempt {
    /// Cells inside a generated room
    pub occupancy: Grid<bool>,
    /// Protected / chamber flags per mega tile
    pub flags: Grid<CellFlags>,
    /// Tile classification
    pub tiles: Grid<Tile>,
    /// Lighting region per world cell
    pub transparency: Grid<u8>,
    /// Next lighting region id to hand out
    pub next_region: u8,
    /// World-space area where stairs may not be placed
    pub exclusion: Rectangle,
}

impl Default for GenerationAttempt {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationAttempt {
    pub fn new() -> Self {
        Self {
            occupancy: Grid::new(DMAXX, DMAXY, false),
            flags: Grid::new(DMAXX, DMAXY, CellFlags::empty()),
            tiles: Grid::new(DMAXX, DMAXY, Tile::Dirt),
            transparency: Grid::new(MAXDUNX, MAXDUNY, 0),
            next_region: 1,
            exclusion: Rectangle::default(),
        }
    }

    /// Discard everything from a previous attempt
    pub fn reset(&mut self) {
        self.reset_partition();
        self.reset_tiles();
        self.reset_transparency();
        self.exclusion = Rectangle::default();
    }

    /// Clear the occupancy mask and the seed chamber
    pub fn reset_partition(&mut self) {
        self.occupancy.fill(false);
        self.flags.clear(CellFlags::CHAMBER);
    }

    /// Fill the tile grid with dirt and drop all protection
    pub fn reset_tiles(&mut self) {
        self.tiles.fill(Tile::Dirt);
        self.flags.clear(CellFlags::PROTECTED);
    }

    /// Clear lighting regions
    pub fn reset_transparency(&mut self) {
        self.transparency.fill(0);
        self.next_region = 1;
    }

    /// Number of occupied mega tiles
    pub fn area(&self) -> usize {
        self.occupancy.count()
    }

    pub fn is_protected(&self, p: Point) -> bool {
        self.flags.has(p, CellFlags::PROTECTED)
    }

    pub fn protect(&mut self, p: Point) {
        self.flags.insert(p, CellFlags::PROTECTED);
    }

    pub fn in_chamber(&self, p: Point) -> bool {
        self.flags.has(p, CellFlags::CHAMBER)
    }

    /// Tile at a signed coordinate, `None` off the map
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.tiles.get(p)
    }
}
