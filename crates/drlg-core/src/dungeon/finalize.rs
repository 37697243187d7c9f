//! Raster fixups run once a layout is accepted

use drlg_rng::DiabloRng;

use crate::geometry::Point;
use crate::tile::Tile;

use super::GenerationAttempt;

/// HCorner with floor to the west and a vertical wall to the north is
/// really a VCorner; fixed corners are protected.
pub fn fix_corner_tiles(attempt: &mut GenerationAttempt) {
    let width = attempt.tiles.width() as i32;
    let height = attempt.tiles.height() as i32;
    for j in 1..height - 1 {
        for i in 1..width - 1 {
            let here = Point::new(i, j);
            if !attempt.is_protected(here)
                && attempt.tile(here) == Some(Tile::HCorner)
                && attempt.tile(Point::new(i - 1, j)) == Some(Tile::Floor)
                && attempt.tile(Point::new(i, j - 1)) == Some(Tile::VWall)
            {
                attempt.tiles.set(here, Tile::VCorner);
                attempt.protect(here);
            }
        }
    }
}

/// Roll a floor variant for every unprotected floor tile.
///
/// All variants carry the floor code, so the layout is unchanged; the draws
/// still advance the stream once per tile.
pub fn fill_floor(attempt: &mut GenerationAttempt, rng: &mut DiabloRng) {
    for (i, j) in attempt.tiles.positions() {
        let here = Point::new(i as i32, j as i32);
        if attempt.tiles[(i, j)] != Tile::Floor || attempt.is_protected(here) {
            continue;
        }
        match rng.gen_rnd(3) {
            1 => attempt.tiles[(i, j)] = Tile::FLOOR2,
            2 => attempt.tiles[(i, j)] = Tile::FLOOR3,
            _ => {}
        }
    }
}
