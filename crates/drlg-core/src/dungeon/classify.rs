//! Tile classifier: occupancy mask to floor / wall / dirt tiles

use crate::grid::Grid;
use crate::tile::Tile;

/// Classify every mega tile from the occupancy of itself and its right,
/// lower and lower-right neighbours.
///
/// The last row and column are never classified and keep whatever the grid
/// held (dirt after a reset).
pub fn classify_tiles(occupancy: &Grid<bool>, tiles: &mut Grid<Tile>) {
    let width = occupancy.width().min(tiles.width());
    let height = occupancy.height().min(tiles.height());

    for j in 0..height.saturating_sub(1) {
        for i in 0..width.saturating_sub(1) {
            let here = occupancy[(i, j)];
            let right = occupancy[(i + 1, j)];
            let down = occupancy[(i, j + 1)];
            let diagonal = occupancy[(i + 1, j + 1)];

            tiles[(i, j)] = if here {
                Tile::Floor
            } else if !diagonal && down && right {
                // fill single-cell diagonal notches
                Tile::Floor
            } else if diagonal && down && right {
                Tile::VCorner
            } else if down {
                Tile::HWall
            } else if right {
                Tile::VWall
            } else if diagonal {
                Tile::DWall
            } else {
                Tile::Dirt
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DMAXX, DMAXY};
    use crate::dungeon::partition::map_room;
    use crate::geometry::{Point, Rectangle, Size};

    fn classify(rooms: &[Rectangle]) -> Grid<Tile> {
        let mut occupancy = Grid::new(DMAXX, DMAXY, false);
        for &room in rooms {
            map_room(&mut occupancy, room);
        }
        let mut tiles = Grid::new(DMAXX, DMAXY, Tile::Dirt);
        classify_tiles(&occupancy, &mut tiles);
        tiles
    }

    #[test]
    fn test_single_room_outline() {
        let tiles = classify(&[Rectangle::new(Point::new(5, 5), Size::new(3, 3))]);
        assert_eq!(tiles[(5, 5)], Tile::Floor);
        assert_eq!(tiles[(7, 7)], Tile::Floor);
        assert_eq!(tiles[(4, 4)], Tile::DWall);
        assert_eq!(tiles[(5, 4)], Tile::HWall);
        assert_eq!(tiles[(4, 5)], Tile::VWall);
        assert_eq!(tiles[(8, 8)], Tile::Dirt);
        assert_eq!(tiles[(8, 5)], Tile::Dirt);
        assert_eq!(tiles[(20, 20)], Tile::Dirt);
    }

    #[test]
    fn test_inner_corner() {
        // L shape: the empty cell at (5, 5) sees right, down and diagonal occupied
        let tiles = classify(&[
            Rectangle::new(Point::new(6, 5), Size::new(2, 1)),
            Rectangle::new(Point::new(5, 6), Size::new(3, 2)),
        ]);
        assert_eq!(tiles[(5, 5)], Tile::VCorner);
    }

    #[test]
    fn test_diagonal_notch_filled() {
        // Right and down occupied, diagonal empty
        let tiles = classify(&[
            Rectangle::new(Point::new(11, 10), Size::new(1, 1)),
            Rectangle::new(Point::new(10, 11), Size::new(1, 1)),
        ]);
        assert_eq!(tiles[(10, 10)], Tile::Floor);
    }

    #[test]
    fn test_last_row_and_column_untouched() {
        let mut occupancy = Grid::new(DMAXX, DMAXY, true);
        occupancy[(0, 0)] = false;
        let mut tiles = Grid::new(DMAXX, DMAXY, Tile::Dirt);
        classify_tiles(&occupancy, &mut tiles);
        assert_eq!(tiles[(DMAXX - 1, 3)], Tile::Dirt);
        assert_eq!(tiles[(3, DMAXY - 1)], Tile::Dirt);
        assert_eq!(tiles[(0, 0)], Tile::VCorner);
        assert_eq!(tiles[(1, 1)], Tile::Floor);
    }
}
