//! Lighting regions on the world grid
//!
//! Every connected floor area gets its own region id, painted over the 2x2
//! world block of each of its mega tiles and the facing halves of the walls
//! around it. After the layout is final, region ids are pushed from the
//! top-left world cell of dirt tiles into the rest of their block so the
//! renderer's fog matches the wall it belongs to.

use crate::geometry::{Displacement, Point};
use crate::grid::Grid;
use crate::tile::Tile;

use super::GenerationAttempt;

const NEIGHBOURS: [Displacement; 8] = [
    Displacement::new(1, 0),
    Displacement::new(-1, 0),
    Displacement::new(0, 1),
    Displacement::new(0, -1),
    Displacement::new(1, 1),
    Displacement::new(-1, 1),
    Displacement::new(1, -1),
    Displacement::new(-1, -1),
];

fn world_cell(p: Point) -> (usize, usize) {
    (p.x as usize, p.y as usize)
}

/// World cells of `neighbour`'s block that face a tile at `-dir` from it
fn facing_cells(neighbour: Point, dir: Displacement) -> impl Iterator<Item = Point> {
    let w = neighbour.mega_to_world();
    let xs: &'static [i32] = match dir.dx {
        1 => &[0],
        -1 => &[1],
        _ => &[0, 1],
    };
    let ys: &'static [i32] = match dir.dy {
        1 => &[0],
        -1 => &[1],
        _ => &[0, 1],
    };
    ys.iter()
        .flat_map(move |&y| xs.iter().map(move |&x| Point::new(w.x + x, w.y + y)))
}

/// Assign a region id to every connected area of `floor` tiles.
///
/// Regions are discovered in row-major order; each is filled through all
/// eight neighbours, so floors touching only at a corner share an id.
/// Non-floor tiles around a region take its id on the side facing the floor,
/// overwriting whatever an earlier region left there.
pub fn flood_transparency(attempt: &mut GenerationAttempt, floor: Tile) {
    for (i, j) in attempt.tiles.positions() {
        let start = Point::new(i as i32, j as i32);
        if attempt.tiles[(i, j)] != floor || attempt.transparency[world_cell(start.mega_to_world())] != 0 {
            continue;
        }
        fill_region(attempt, start, floor);
        attempt.next_region = attempt.next_region.wrapping_add(1).max(1);
    }
}

fn fill_region(attempt: &mut GenerationAttempt, start: Point, floor: Tile) {
    let region = attempt.next_region;
    let mut frontier = vec![start];

    while let Some(p) = frontier.pop() {
        let world = p.mega_to_world();
        if attempt.transparency[world_cell(world)] != 0 {
            continue;
        }
        for dy in 0..2 {
            for dx in 0..2 {
                attempt.transparency[world_cell(world + Displacement::new(dx, dy))] = region;
            }
        }

        for dir in NEIGHBOURS {
            let n = p + dir;
            match attempt.tiles.get(n) {
                None => {}
                Some(t) if t == floor => frontier.push(n),
                Some(_) => {
                    for cell in facing_cells(n, dir) {
                        attempt.transparency[world_cell(cell)] = region;
                    }
                }
            }
        }
    }
}

/// Entrance stairs take the region of the world row below them
pub fn copy_entrance_transparency(tiles: &Grid<Tile>, transparency: &mut Grid<u8>) {
    for (i, j) in tiles.positions() {
        if tiles[(i, j)] != Tile::EntranceStairs {
            continue;
        }
        let (xx, yy) = world_cell(Point::new(i as i32, j as i32).mega_to_world());
        transparency[(xx, yy)] = transparency[(xx, yy + 1)];
        transparency[(xx + 1, yy)] = transparency[(xx + 1, yy + 1)];
    }
}

/// Copy each dirt tile's top-left region id into the rest of its block.
///
/// Only the top-left world cell is ever read, and it is never written, so
/// running this more than once changes nothing.
pub fn propagate_transparency(tiles: &Grid<Tile>, transparency: &mut Grid<u8>) {
    let width = tiles.width() as i32;
    for (i, j) in tiles.positions() {
        let here = Point::new(i as i32, j as i32);
        let (xx, yy) = world_cell(here.mega_to_world());
        let value = transparency[(xx, yy)];

        let tile = tiles[(i, j)];
        let above = tiles.get(here + Displacement::new(0, -1));
        let right = if here.x + 1 < width {
            tiles.get(here + Displacement::new(1, 0))
        } else {
            None
        };

        if tile == Tile::DirtHWallEnd && above == Some(Tile::DirtHWall) {
            transparency[(xx + 1, yy)] = value;
            transparency[(xx + 1, yy + 1)] = value;
        }
        if tile == Tile::DirtVWallEnd && right == Some(Tile::DirtVWall) {
            transparency[(xx, yy + 1)] = value;
            transparency[(xx + 1, yy + 1)] = value;
        }
        if tile == Tile::DirtHWall {
            transparency[(xx + 1, yy)] = value;
            transparency[(xx + 1, yy + 1)] = value;
        }
        if tile == Tile::DirtVWall {
            transparency[(xx, yy + 1)] = value;
            transparency[(xx + 1, yy + 1)] = value;
        }
        if tile == Tile::Dirt {
            transparency[(xx + 1, yy)] = value;
            transparency[(xx, yy + 1)] = value;
            transparency[(xx + 1, yy + 1)] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> GenerationAttempt {
        let mut attempt = GenerationAttempt::new();
        for y in 5..8 {
            for x in 5..8 {
                attempt.tiles[(x, y)] = Tile::Floor;
            }
            for x in 9..12 {
                attempt.tiles[(x, y)] = Tile::Floor;
            }
            attempt.tiles[(8, y)] = Tile::VWall;
        }
        attempt
    }

    #[test]
    fn test_separate_regions() {
        let mut attempt = two_rooms();
        flood_transparency(&mut attempt, Tile::Floor);
        let left = attempt.transparency[(16 + 10, 16 + 10)];
        let right = attempt.transparency[(16 + 20, 16 + 10)];
        assert_eq!(left, 1);
        assert_eq!(right, 2);
        assert_eq!(attempt.next_region, 3);
        // all four world cells of a floor tile share the id
        assert_eq!(attempt.transparency[(16 + 11, 16 + 11)], 1);
    }

    #[test]
    fn test_wall_faces_take_region() {
        let mut attempt = two_rooms();
        flood_transparency(&mut attempt, Tile::Floor);
        // wall column at x = 8 -> world x 32..=33
        assert_eq!(attempt.transparency[(32, 16 + 12)], 1);
        assert_eq!(attempt.transparency[(33, 16 + 12)], 2);
    }

    #[test]
    fn test_diagonal_floors_share_region() {
        let mut attempt = GenerationAttempt::new();
        attempt.tiles[(5, 5)] = Tile::Floor;
        attempt.tiles[(6, 6)] = Tile::Floor;
        flood_transparency(&mut attempt, Tile::Floor);
        assert_eq!(attempt.transparency[(26, 26)], 1);
        assert_eq!(attempt.transparency[(29, 29)], 1);
        assert_eq!(attempt.next_region, 2);
        // dirt at (6, 5) is faced from both floors
        assert_eq!(attempt.transparency[(28, 27)], 1);
    }

    #[test]
    fn test_wall_faces_are_overwritten() {
        let mut attempt = GenerationAttempt::new();
        attempt.tiles[(5, 4)] = Tile::Floor;
        attempt.tiles[(5, 5)] = Tile::HWall;
        // stale ids on the wall block
        attempt.transparency[(26, 26)] = 9;
        attempt.transparency[(26, 27)] = 9;
        flood_transparency(&mut attempt, Tile::Floor);
        assert_eq!(attempt.transparency[(26, 26)], 1);
        assert_eq!(attempt.transparency[(27, 26)], 1);
        // lower half faces away from the floor
        assert_eq!(attempt.transparency[(26, 27)], 9);
    }

    #[test]
    fn test_propagate_fills_dirt_block() {
        let mut tiles = Grid::new(4, 4, Tile::Floor);
        tiles[(1, 1)] = Tile::Dirt;
        let mut transparency = Grid::new(40, 40, 0u8);
        transparency[(18, 18)] = 4;
        propagate_transparency(&tiles, &mut transparency);
        assert_eq!(transparency[(19, 18)], 4);
        assert_eq!(transparency[(18, 19)], 4);
        assert_eq!(transparency[(19, 19)], 4);
    }

    #[test]
    fn test_propagate_dirt_walls() {
        let mut tiles = Grid::new(4, 4, Tile::Floor);
        tiles[(0, 0)] = Tile::DirtHWall;
        tiles[(2, 0)] = Tile::DirtVWall;
        let mut transparency = Grid::new(40, 40, 0u8);
        transparency[(16, 16)] = 3;
        transparency[(20, 16)] = 6;
        propagate_transparency(&tiles, &mut transparency);
        // DirtHWall: right column
        assert_eq!(transparency[(17, 16)], 3);
        assert_eq!(transparency[(17, 17)], 3);
        assert_eq!(transparency[(16, 17)], 0);
        // DirtVWall: bottom row
        assert_eq!(transparency[(20, 17)], 6);
        assert_eq!(transparency[(21, 17)], 6);
        assert_eq!(transparency[(21, 16)], 0);
    }

    #[test]
    fn test_entrance_copies_from_below() {
        let mut tiles = Grid::new(4, 4, Tile::Floor);
        tiles[(1, 0)] = Tile::EntranceStairs;
        let mut transparency = Grid::new(40, 40, 0u8);
        transparency[(18, 17)] = 2;
        transparency[(19, 17)] = 5;
        copy_entrance_transparency(&tiles, &mut transparency);
        assert_eq!(transparency[(18, 16)], 2);
        assert_eq!(transparency[(19, 16)], 5);
    }
}
