//! Pattern fixup engine
//!
//! Ordered neighbour rewrite rules that turn the raw classification into
//! composite wall/dirt tiles. Rules are applied in three full-grid passes,
//! row-major; within a cell the rules run in table order and each one sees
//! the rewrites of the rules before it. The order is load-bearing: changing
//! it changes which tile wins at T-junctions.

use crate::geometry::{Displacement, Point};
use crate::grid::Grid;
use crate::tile::Tile;
use crate::tile::Tile::*;

/// "If this cell is `at` and the neighbour at `offset` is `neighbour`,
/// the neighbour becomes `becomes`."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixupRule {
    pub offset: Displacement,
    pub at: Tile,
    pub neighbour: Tile,
    pub becomes: Tile,
}

const RIGHT: Displacement = Displacement::new(1, 0);
const LEFT: Displacement = Displacement::new(-1, 0);
const DOWN: Displacement = Displacement::new(0, 1);
const UP: Displacement = Displacement::new(0, -1);

const fn rule(offset: Displacement, at: Tile, neighbour: Tile, becomes: Tile) -> FixupRule {
    FixupRule { offset, at, neighbour, becomes }
}

/// First pass: wall ends and dirt edges next to floor
pub const PASS_1: [FixupRule; 7] = [
    rule(RIGHT, HWall, Dirt, DirtHWallEnd),
    rule(RIGHT, Floor, Dirt, DirtHWall),
    rule(RIGHT, Floor, HWall, HWallEnd),
    rule(RIGHT, VWallEnd, Dirt, DirtVWallEnd),
    rule(DOWN, VWall, Dirt, DirtVWallEnd),
    rule(DOWN, Floor, VWall, VWallEnd),
    rule(DOWN, Floor, Dirt, DirtVWall),
];

/// Second pass: corners where the first-pass composites meet
pub const PASS_2: [FixupRule; 32] = [
    rule(RIGHT, Floor, DirtVWall, HDirtCorner),
    rule(RIGHT, HWallEnd, Dirt, DirtHWallEnd),
    rule(RIGHT, Floor, DirtVWallEnd, HDirtCorner),
    rule(RIGHT, HWall, DirtVWall, HDirtCorner),
    rule(RIGHT, DirtVWall, VWall, VWallEnd),
    rule(RIGHT, HWallEnd, DirtVWall, HDirtCorner),
    rule(RIGHT, HWall, VWall, VWallEnd),
    rule(RIGHT, Corner, Dirt, DirtVWallEnd),
    rule(RIGHT, HDirtCorner, VWall, VWallEnd),
    rule(RIGHT, HWallEnd, VWall, VWallEnd),
    rule(RIGHT, HWallEnd, DirtVWallEnd, HDirtCorner),
    rule(RIGHT, DWall, VCorner, HCorner),
    rule(RIGHT, HWallEnd, Floor, HCorner),
    rule(RIGHT, HWall, DirtVWallEnd, HDirtCorner),
    rule(RIGHT, HWall, Floor, HCorner),
    rule(LEFT, DirtHWallEnd, Dirt, DirtVWall),
    rule(LEFT, DirtVWall, DirtHWallEnd, HDirtCorner),
    rule(LEFT, VWallEnd, Dirt, DirtVWallEnd),
    rule(LEFT, VWallEnd, DirtHWallEnd, HDirtCorner),
    rule(DOWN, VWall, HWall, HWallEnd),
    rule(DOWN, VWallEnd, DirtHWall, HDirtCorner),
    rule(DOWN, DirtHWall, HWall, HWallEnd),
    rule(DOWN, VWallEnd, HWall, HWallEnd),
    rule(DOWN, HDirtCorner, HWall, HWallEnd),
    rule(DOWN, VWallEnd, Dirt, DirtVWallEnd),
    rule(DOWN, VWallEnd, Floor, VCorner),
    rule(DOWN, VWall, Floor, VCorner),
    rule(DOWN, Floor, VCorner, HCorner),
    rule(UP, VWallEnd, Dirt, HWallEnd),
    rule(UP, VWallEnd, Dirt, DirtVWallEnd),
    rule(UP, HWallEnd, DirtVWallEnd, HDirtCorner),
    rule(UP, DirtHWall, DirtVWallEnd, HDirtCorner),
];

/// Third pass: two collisions the first two passes leave behind
pub const PASS_3: [FixupRule; 2] = [
    rule(DOWN, DWall, HWall, HWallEnd),
    rule(RIGHT, HWall, DirtVWall, HDirtCorner),
];

/// The three passes, in order
pub const FIXUP_PASSES: [&[FixupRule]; 3] = [&PASS_1, &PASS_2, &PASS_3];

/// Run one full-grid pass of `rules`
pub fn apply_pass(tiles: &mut Grid<Tile>, rules: &[FixupRule]) {
    for (i, j) in tiles.positions() {
        let here = Point::new(i as i32, j as i32);
        for rule in rules {
            if tiles[(i, j)] != rule.at {
                continue;
            }
            let target = here + rule.offset;
            if tiles.get(target) == Some(rule.neighbour) {
                tiles.set(target, rule.becomes);
            }
        }
    }
}

/// Run all fixup passes in order
pub fn fix_tile_patterns(tiles: &mut Grid<Tile>) {
    for rules in FIXUP_PASSES {
        apply_pass(tiles, rules);
    }
}
