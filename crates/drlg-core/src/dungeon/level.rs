//! Read-only snapshot of a generated level

use serde::{Deserialize, Serialize};

use crate::error::TileSetError;
use crate::geometry::{Point, Rectangle};
use crate::grid::{CellFlags, Grid};
use crate::tile::Tile;

use super::pieces::{DungeonPieces, MegaTileTable};
use super::{Entry, GenerationAttempt};

/// Everything rendering and gameplay need from a finished level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizedLevel {
    /// Seed the level was generated from
    pub seed: u32,
    /// Arrival direction; `None` for templates
    pub entry: Option<Entry>,
    /// 40x40 mega tile layout
    pub tiles: Grid<Tile>,
    /// Cells no pass may overwrite (doors, fixed corners, template tiles)
    pub protected: Grid<bool>,
    /// Lighting region per world cell (112x112)
    pub transparency: Grid<u8>,
    /// Player's initial world position, if the entry selects one
    pub view_position: Option<Point>,
    /// Area reserved for quest set pieces; always empty for this level type
    pub set_piece: Rectangle,
    /// Mega tile position of the stairs up stencil
    pub stairs_up: Option<Point>,
    /// Mega tile position of the stairs down stencil
    pub stairs_down: Option<Point>,
    /// Attempts it took to reach a valid layout
    pub attempts: u32,
    /// Values drawn from the random stream, finalization included
    pub rng_calls: u64,
}

impl FinalizedLevel {
    pub(crate) fn snapshot(attempt: &GenerationAttempt, seed: u32, entry: Option<Entry>) -> Self {
        Self {
            seed,
            entry,
            tiles: attempt.tiles.clone(),
            protected: attempt.flags.mask(CellFlags::PROTECTED),
            transparency: attempt.transparency.clone(),
            view_position: None,
            set_piece: Rectangle::default(),
            stairs_up: None,
            stairs_down: None,
            attempts: 0,
            rng_calls: 0,
        }
    }

    /// Tile at a mega tile position
    pub fn tile(&self, p: Point) -> Option<Tile> {
        self.tiles.get(p)
    }

    /// One line per row, one character per tile
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.tiles.width() + 1) * self.tiles.height());
        for y in 0..self.tiles.height() {
            for x in 0..self.tiles.width() {
                out.push(self.tiles[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Expand the layout into render pieces using a mega tile table
    pub fn pieces(&self, table: &MegaTileTable) -> Result<DungeonPieces, TileSetError> {
        DungeonPieces::build(&self.tiles, table)
    }
}
