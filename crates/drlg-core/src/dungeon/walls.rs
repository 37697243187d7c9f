//! Wall and door decorator
//!
//! Pulls wall runs across open floor from existing corners and wall ends,
//! splitting large areas into rooms joined by one door per run.

use drlg_rng::DiabloRng;

use crate::geometry::{Displacement, Point};
use crate::tile::Tile;

use super::GenerationAttempt;

/// Direction a wall run extends in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along +x
    Horizontal,
    /// Along +y
    Vertical,
}

impl Axis {
    const fn step(self) -> Displacement {
        match self {
            Axis::Horizontal => Displacement::new(1, 0),
            Axis::Vertical => Displacement::new(0, 1),
        }
    }

    const fn across(self) -> Displacement {
        match self {
            Axis::Horizontal => Displacement::new(0, 1),
            Axis::Vertical => Displacement::new(1, 0),
        }
    }
}

/// Tiles that seed a wall run, in the order they are tried on each cell:
/// (tile under the cursor, run direction, tile written at the run start)
const WALL_SEEDS: [(Tile, Axis, Tile); 6] = [
    (Tile::Corner, Axis::Horizontal, Tile::HWall),
    (Tile::Corner, Axis::Vertical, Tile::VWall),
    (Tile::VWallEnd, Axis::Horizontal, Tile::DWall),
    (Tile::HWallEnd, Axis::Vertical, Tile::DWall),
    (Tile::HWall, Axis::Horizontal, Tile::HWall),
    (Tile::VWall, Axis::Vertical, Tile::VWall),
];

/// Length of the wall run starting at `start`, if one fits.
///
/// The run covers floor cells whose neighbours on both sides across the run
/// are floor and which are neither protected nor part of the chamber. It
/// must be at least one cell long and end on a corner, wall end or dirt edge.
pub fn wall_run_length(attempt: &GenerationAttempt, start: Point, axis: Axis) -> Option<i32> {
    let step = axis.step();
    let across = axis.across();

    let mut length = 1;
    let mut cell = start + step;
    while attempt.tile(cell) == Some(Tile::Floor) {
        if attempt.tile(cell - across) != Some(Tile::Floor)
            || attempt.tile(cell + across) != Some(Tile::Floor)
            || attempt.is_protected(cell)
            || attempt.in_chamber(cell)
        {
            break;
        }
        length += 1;
        cell = cell + step;
    }

    if length == 1 {
        return None;
    }

    match attempt.tile(cell) {
        Some(end) if end.terminates_wall() => Some(length),
        _ => None,
    }
}

/// Write a wall run of `length` cells with one protected door.
///
/// One run in three becomes a fence; the start tile is swapped for its
/// fence counterpart where one exists.
pub fn place_wall(
    attempt: &mut GenerationAttempt,
    rng: &mut DiabloRng,
    start: Point,
    axis: Axis,
    mut start_tile: Tile,
    length: i32,
) {
    let (mut wall, door) = match axis {
        Axis::Horizontal => (Tile::HWall, Tile::HDoor),
        Axis::Vertical => (Tile::VWall, Tile::VDoor),
    };

    if rng.flip_coin(3) {
        start_tile = match (axis, start_tile) {
            (Axis::Horizontal, Tile::HWall) => Tile::HFence,
            (Axis::Horizontal, Tile::DWall) => Tile::HFenceVWall,
            (Axis::Vertical, Tile::VWall) => Tile::VFence,
            (Axis::Vertical, Tile::DWall) => Tile::HWallVFence,
            (_, other) => other,
        };
        wall = match axis {
            Axis::Horizontal => Tile::HFence,
            Axis::Vertical => Tile::VFence,
        };
    }

    let step = axis.step();
    attempt.tiles.set(start, start_tile);
    for n in 1..length {
        attempt.tiles.set(start + Displacement::new(step.dx * n, step.dy * n), wall);
    }

    let n = rng.gen_rnd(length - 1) + 1;
    let door_at = start + Displacement::new(step.dx * n, step.dy * n);
    attempt.tiles.set(door_at, door);
    attempt.protect(door_at);
}

/// Scan the map row-major and extend every eligible wall seed.
///
/// One value is drawn from the stream for every seed examined, whether or
/// not a run fits, and writes are visible to cells visited later.
pub fn add_walls(attempt: &mut GenerationAttempt, rng: &mut DiabloRng) {
    for (i, j) in attempt.tiles.positions() {
        let here = Point::new(i as i32, j as i32);
        if attempt.is_protected(here) || attempt.in_chamber(here) {
            continue;
        }

        for (seed, axis, start_tile) in WALL_SEEDS {
            if attempt.tile(here) != Some(seed) {
                continue;
            }
            rng.advance();
            if let Some(length) = wall_run_length(attempt, here, axis) {
                place_wall(attempt, rng, here, axis, start_tile, length);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellFlags;

    /// Open floor block with a corner seed on its top-left edge and a dirt
    /// edge at the far end of row 10.
    fn open_block() -> GenerationAttempt {
        let mut attempt = GenerationAttempt::new();
        for y in 8..=12 {
            for x in 5..=14 {
                attempt.tiles[(x, y)] = Tile::Floor;
            }
        }
        attempt.tiles[(5, 10)] = Tile::HWall;
        attempt.tiles[(15, 10)] = Tile::DirtHWall;
        attempt
    }

    #[test]
    fn test_run_length_to_dirt_edge() {
        let attempt = open_block();
        assert_eq!(wall_run_length(&attempt, Point::new(5, 10), Axis::Horizontal), Some(10));
    }

    #[test]
    fn test_run_stops_at_floor_end() {
        let mut attempt = open_block();
        attempt.tiles[(15, 10)] = Tile::Floor;
        attempt.tiles[(15, 9)] = Tile::Dirt;
        assert_eq!(wall_run_length(&attempt, Point::new(5, 10), Axis::Horizontal), None);
    }

    #[test]
    fn test_run_rejects_length_one() {
        let mut attempt = open_block();
        attempt.tiles[(6, 10)] = Tile::VCorner;
        assert_eq!(wall_run_length(&attempt, Point::new(5, 10), Axis::Horizontal), None);
    }

    #[test]
    fn test_run_blocked_by_chamber() {
        let mut attempt = open_block();
        attempt.flags.insert(Point::new(9, 10), CellFlags::CHAMBER);
        assert_eq!(wall_run_length(&attempt, Point::new(5, 10), Axis::Horizontal), None);
    }

    #[test]
    fn test_place_wall_has_one_protected_door() {
        let mut attempt = open_block();
        let mut rng = DiabloRng::new(99);
        place_wall(&mut attempt, &mut rng, Point::new(5, 10), Axis::Horizontal, Tile::HWall, 10);

        let row: Vec<Tile> = (5..15).map(|x| attempt.tiles[(x, 10)]).collect();
        let doors: Vec<usize> = (5..15).filter(|&x| attempt.tiles[(x, 10)] == Tile::HDoor).collect();
        assert_eq!(doors.len(), 1, "row: {row:?}");
        let door = doors[0];
        assert!(door > 5 && door < 15);
        assert!(attempt.is_protected(Point::new(door as i32, 10)));
        assert_eq!(attempt.tiles[(15, 10)], Tile::DirtHWall);
        assert!(
            row.iter()
                .all(|t| matches!(t, Tile::HWall | Tile::HFence | Tile::HDoor)),
            "row: {row:?}"
        );
    }

    #[test]
    fn test_add_walls_consumes_one_value_per_seed() {
        let mut attempt = GenerationAttempt::new();
        attempt.tiles[(3, 3)] = Tile::HWall;
        attempt.tiles[(7, 7)] = Tile::VWall;
        let mut rng = DiabloRng::new(5);
        add_walls(&mut attempt, &mut rng);
        assert_eq!(rng.call_count(), 2);
    }

    #[test]
    fn test_add_walls_skips_protected_seed() {
        let mut attempt = GenerationAttempt::new();
        attempt.tiles[(3, 3)] = Tile::HWall;
        attempt.protect(Point::new(3, 3));
        let mut rng = DiabloRng::new(5);
        add_walls(&mut attempt, &mut rng);
        assert_eq!(rng.call_count(), 0);
    }

    #[test]
    fn test_add_walls_splits_open_block() {
        let mut attempt = open_block();
        let mut rng = DiabloRng::new(17);
        add_walls(&mut attempt, &mut rng);
        assert_ne!(attempt.tiles[(6, 10)], Tile::Floor);
        assert_eq!(attempt.flags.mask(CellFlags::PROTECTED).count(), 1);
    }
}
