//! Mega tile to render piece expansion
//!
//! Each mega tile code selects an entry in a tile set's mega tile table;
//! an entry lists the four render pieces of its 2x2 world block.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::consts::{MAXDUNX, MAXDUNY, WORLD_OFFSET};
use crate::error::TileSetError;
use crate::grid::Grid;
use crate::tile::Tile;

/// Render piece that marks a special cell of kind 1
const SPECIAL_PIECE_1: u16 = 9;
/// Render piece that marks a special cell of kind 2
const SPECIAL_PIECE_2: u16 = 6;

/// Four pieces of one mega tile: top-left, top-right, bottom-left, bottom-right
pub type MegaTile = [u16; 4];

/// Parsed `.til` data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MegaTileTable {
    megas: Vec<MegaTile>,
}

impl MegaTileTable {
    /// Parse little-endian `u16` quadruples; stored piece numbers are
    /// one-based and kept zero-based here.
    pub fn parse(data: &[u8]) -> Result<Self, TileSetError> {
        if data.len() % 8 != 0 {
            return Err(TileSetError::Misaligned(data.len()));
        }
        if data.is_empty() {
            return Err(TileSetError::Empty);
        }

        let megas = data
            .chunks_exact(8)
            .map(|chunk| {
                let mut mega = [0u16; 4];
                for (piece, raw) in mega.iter_mut().zip(chunk.chunks_exact(2)) {
                    *piece = u16::from_le_bytes([raw[0], raw[1]]).saturating_sub(1);
                }
                mega
            })
            .collect();
        Ok(Self { megas })
    }

    pub fn from_megas(megas: Vec<MegaTile>) -> Self {
        Self { megas }
    }

    pub fn len(&self) -> usize {
        self.megas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.megas.is_empty()
    }

    /// Entry for a mega tile index
    pub fn get(&self, index: usize) -> Result<MegaTile, TileSetError> {
        self.megas
            .get(index)
            .copied()
            .ok_or(TileSetError::MissingMegaTile { index })
    }

    fn for_tile(&self, tile: Tile) -> Result<MegaTile, TileSetError> {
        self.get(tile.code() as usize - 1)
    }
}

/// World grid of render pieces plus the derived special marker grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonPieces {
    pub pieces: Grid<u16>,
    pub special: Grid<u8>,
}

impl DungeonPieces {
    /// Expand a 40x40 mega tile layout into the 112x112 world.
    ///
    /// The world is first paved with the dirt mega tile so the border around
    /// the layout reads as solid rock.
    pub fn build(tiles: &Grid<Tile>, table: &MegaTileTable) -> Result<Self, TileSetError> {
        let mut pieces = Grid::new(MAXDUNX, MAXDUNY, 0u16);

        let dirt = table.for_tile(Tile::Dirt)?;
        for j in (0..MAXDUNY).step_by(2) {
            for i in (0..MAXDUNX).step_by(2) {
                stamp(&mut pieces, i, j, dirt);
            }
        }

        let offset = WORLD_OFFSET as usize;
        for (i, j) in tiles.positions() {
            let mega = table.for_tile(tiles[(i, j)])?;
            stamp(&mut pieces, offset + 2 * i, offset + 2 * j, mega);
        }

        let mut special = Grid::new(MAXDUNX, MAXDUNY, 0u8);
        for (x, y) in pieces.positions() {
            special[(x, y)] = match pieces[(x, y)] {
                SPECIAL_PIECE_1 => 1,
                SPECIAL_PIECE_2 => 2,
                _ => 0,
            };
        }
        debug!("expanded {}x{} layout into pieces", tiles.width(), tiles.height());

        Ok(Self { pieces, special })
    }
}

fn stamp(pieces: &mut Grid<u16>, x: usize, y: usize, mega: MegaTile) {
    pieces[(x, y)] = mega[0];
    pieces[(x + 1, y)] = mega[1];
    pieces[(x, y + 1)] = mega[2];
    pieces[(x + 1, y + 1)] = mega[3];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DMAXX, DMAXY};

    /// Table where mega `n` has pieces `[4n, 4n+1, 4n+2, 4n+3]`
    fn table(len: u16) -> MegaTileTable {
        MegaTileTable::from_megas((0..len).map(|n| [4 * n, 4 * n + 1, 4 * n + 2, 4 * n + 3]).collect())
    }

    #[test]
    fn test_parse_makes_pieces_zero_based() {
        let bytes = [1, 0, 2, 0, 0x00, 0x01, 0, 0];
        let table = MegaTileTable::parse(&bytes).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(0), Ok([0, 1, 255, 0]));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(MegaTileTable::parse(&[1, 2, 3]), Err(TileSetError::Misaligned(3)));
        assert_eq!(MegaTileTable::parse(&[]), Err(TileSetError::Empty));
    }

    #[test]
    fn test_build_paves_border_with_dirt() {
        let tiles = Grid::new(DMAXX, DMAXY, Tile::Dirt);
        let pieces = DungeonPieces::build(&tiles, &table(30)).unwrap();
        // Dirt is code 19, index 18
        assert_eq!(pieces.pieces[(0, 0)], 72);
        assert_eq!(pieces.pieces[(1, 1)], 75);
        assert_eq!(pieces.pieces[(111, 110)], 73);
    }

    #[test]
    fn test_build_places_layout_at_offset() {
        let mut tiles = Grid::new(DMAXX, DMAXY, Tile::Dirt);
        tiles[(0, 0)] = Tile::Floor;
        let pieces = DungeonPieces::build(&tiles, &table(30)).unwrap();
        // Floor is code 7, index 6
        assert_eq!(pieces.pieces[(16, 16)], 24);
        assert_eq!(pieces.pieces[(17, 17)], 27);
    }

    #[test]
    fn test_filled_floor_expands_to_floor_mega() {
        use crate::dungeon::GenerationAttempt;
        use crate::dungeon::finalize::fill_floor;
        use drlg_rng::DiabloRng;

        let mut attempt = GenerationAttempt::new();
        for x in 0..DMAXX {
            attempt.tiles[(x, 0)] = Tile::Floor;
        }
        fill_floor(&mut attempt, &mut DiabloRng::new(5));

        let pieces = DungeonPieces::build(&attempt.tiles, &table(30)).unwrap();
        for x in 0..DMAXX {
            let wx = 16 + 2 * x;
            assert_eq!(pieces.pieces[(wx, 16)], 24, "column {x}");
            assert_eq!(pieces.pieces[(wx + 1, 17)], 27, "column {x}");
        }
    }

    #[test]
    fn test_special_markers() {
        let mut tiles = Grid::new(DMAXX, DMAXY, Tile::Dirt);
        // HWall is index 1, pieces 4..=7
        tiles[(3, 3)] = Tile::HWall;
        let pieces = DungeonPieces::build(&tiles, &table(30)).unwrap();
        // piece 6 sits bottom-left of the HWall block
        assert_eq!(pieces.special[(22, 23)], 2);
        assert_eq!(pieces.special[(0, 0)], 0);
    }

    #[test]
    fn test_missing_mega_tile() {
        let tiles = Grid::new(DMAXX, DMAXY, Tile::Dirt);
        assert_eq!(
            DungeonPieces::build(&tiles, &table(5)),
            Err(TileSetError::MissingMegaTile { index: 18 })
        );
    }
}
