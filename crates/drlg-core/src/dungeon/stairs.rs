//! Stairs placement
//!
//! Stairs are stamped from minisets: a stencil of tiles that must already be
//! present and a stencil of tiles written over them.

use drlg_rng::DiabloRng;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::consts::{DMAXX, DMAXY};
use crate::error::{AttemptFailure, Stairs};
use crate::geometry::{Displacement, Point, Rectangle};
use crate::tile::Tile::{self, *};

use super::{Entry, GenerationAttempt};

/// Fixed-size search/replace stencil; `None` matches anything and writes
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Miniset<const W: usize, const H: usize> {
    pub search: [[Option<Tile>; W]; H],
    pub replace: [[Option<Tile>; W]; H],
}

/// Stairs up: an arch and entrance cut into a vertical wall with floor to the east
pub const STAIRS_UP: Miniset<5, 3> = Miniset {
    search: [[Some(Dirt), Some(VWall), Some(Floor), Some(Floor), Some(Floor)]; 3],
    replace: [
        [None, Some(StairsArch), None, None, None],
        [None, Some(EntranceStairs), None, None, None],
        [None, Some(VWallEnd), None, None, None],
    ],
};

/// Stairs down: a 2x2 hole in open floor
pub const STAIRS_DOWN: Miniset<3, 4> = Miniset {
    search: [[Some(Floor); 3]; 4],
    replace: [
        [None, None, None],
        [Some(StairsDownUpperLeft), Some(StairsDownUpperRight), None],
        [Some(StairsDownLowerLeft), Some(StairsDownLowerRight), None],
        [None, None, None],
    ],
};

impl<const W: usize, const H: usize> Miniset<W, H> {
    pub const WIDTH: i32 = W as i32;
    pub const HEIGHT: i32 = H as i32;

    /// Every search tile matches and no covered cell is protected
    pub fn matches(&self, attempt: &GenerationAttempt, at: Point) -> bool {
        for (dy, row) in self.search.iter().enumerate() {
            for (dx, want) in row.iter().enumerate() {
                let p = at + Displacement::new(dx as i32, dy as i32);
                if let Some(want) = want
                    && attempt.tile(p) != Some(*want)
                {
                    return false;
                }
                if attempt.is_protected(p) {
                    return false;
                }
            }
        }
        true
    }

    /// Write the replacement stencil at `at`
    pub fn place(&self, attempt: &mut GenerationAttempt, at: Point) {
        for (dy, row) in self.replace.iter().enumerate() {
            for (dx, tile) in row.iter().enumerate() {
                if let Some(tile) = tile {
                    attempt.tiles.set(at + Displacement::new(dx as i32, dy as i32), *tile);
                }
            }
        }
    }
}

/// Scan for a spot matching `miniset` and stamp it there.
///
/// The scan starts at a random position and walks row-major, wrapping at the
/// last position the stencil fits, for at most `tries` positions.
/// The exclusion rectangle is in world coordinates: each candidate is
/// converted with [`Point::mega_to_world`] before the containment test.
pub fn place_miniset<const W: usize, const H: usize>(
    attempt: &mut GenerationAttempt,
    rng: &mut DiabloRng,
    miniset: &Miniset<W, H>,
    tries: usize,
) -> Option<Point> {
    let sw = DMAXX as i32 - Miniset::<W, H>::WIDTH;
    let sh = DMAXY as i32 - Miniset::<W, H>::HEIGHT;
    let mut pos = Point::new(rng.gen_rnd(sw), rng.gen_rnd(sh));

    for _ in 0..tries {
        if pos.x == sw {
            pos.x = 0;
            pos.y += 1;
            if pos.y == sh {
                pos.y = 0;
            }
        }
        if !attempt.exclusion.contains(pos.mega_to_world()) && miniset.matches(attempt, pos) {
            miniset.place(attempt, pos);
            return Some(pos);
        }
        pos.x += 1;
    }
    None
}

/// Where both stairs landed and where the player starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StairsPlacement {
    pub up: Point,
    pub down: Point,
    pub view: Option<Point>,
}

/// Place stairs up, then stairs down at least `radius` world cells away.
///
/// The exclusion rectangle only lives for the duration of the call.
pub fn place_stairs(
    attempt: &mut GenerationAttempt,
    rng: &mut DiabloRng,
    entry: Entry,
    radius: i32,
) -> Result<StairsPlacement, AttemptFailure> {
    let result = place_both(attempt, rng, entry, radius);
    attempt.exclusion = Rectangle::default();
    result
}

fn place_both(
    attempt: &mut GenerationAttempt,
    rng: &mut DiabloRng,
    entry: Entry,
    radius: i32,
) -> Result<StairsPlacement, AttemptFailure> {
    let tries = DMAXX * DMAXY;

    let up = place_miniset(attempt, rng, &STAIRS_UP, tries)
        .ok_or(AttemptFailure::StairsPlacementFailed { stairs: Stairs::Up })?;
    let mut view = None;
    if entry.views_stairs_up() {
        view = Some(up.mega_to_world() + Displacement::new(3, 3));
    }

    attempt.exclusion = Rectangle::centered(up.mega_to_world() + Displacement::new(2, 3), radius);

    let down = place_miniset(attempt, rng, &STAIRS_DOWN, tries)
        .ok_or(AttemptFailure::StairsPlacementFailed { stairs: Stairs::Down })?;
    if entry.views_stairs_down() {
        view = Some(down.mega_to_world() + Displacement::new(2, 2));
    }

    trace!("stairs up at {up:?}, down at {down:?}");
    Ok(StairsPlacement { up, down, view })
}
