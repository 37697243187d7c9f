//! Points and rectangles on the mega tile and world grids

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::WORLD_OFFSET;

/// A signed grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Top-left world cell of the 2x2 block covered by this mega tile
    pub const fn mega_to_world(self) -> Point {
        Point::new(WORLD_OFFSET + self.x * 2, WORLD_OFFSET + self.y * 2)
    }

    /// Chebyshev distance to another point
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// An offset between two points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

impl Add<Displacement> for Point {
    type Output = Point;

    fn add(self, d: Displacement) -> Point {
        Point::new(self.x + d.dx, self.y + d.dy)
    }
}

impl Sub<Displacement> for Point {
    type Output = Point;

    fn sub(self, d: Displacement) -> Point {
        Point::new(self.x - d.dx, self.y - d.dy)
    }
}

/// Width and height in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle: top-left position plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub position: Point,
    pub size: Size,
}

impl Rectangle {
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// Square of side `2 * radius + 1` centred on `center`
    pub const fn centered(center: Point, radius: i32) -> Self {
        Self {
            position: Point::new(center.x - radius, center.y - radius),
            size: Size::new(2 * radius + 1, 2 * radius + 1),
        }
    }

    /// True when the rectangle covers no cells
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0 || self.size.height <= 0
    }

    /// Check if a point lies inside the rectangle
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.position.x
            && p.x < self.position.x + self.size.width
            && p.y >= self.position.y
            && p.y < self.position.y + self.size.height
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.size.width * self.size.height) as usize
        }
    }

    /// All covered points, row-major
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        let Rectangle { position, size } = *self;
        (0..size.height.max(0))
            .flat_map(move |y| (0..size.width.max(0)).map(move |x| Point::new(position.x + x, position.y + y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mega_to_world() {
        assert_eq!(Point::new(0, 0).mega_to_world(), Point::new(16, 16));
        assert_eq!(Point::new(39, 2).mega_to_world(), Point::new(94, 20));
    }

    #[test]
    fn test_centered_rectangle() {
        let r = Rectangle::centered(Point::new(50, 50), 30);
        assert_eq!(r.position, Point::new(20, 20));
        assert_eq!(r.size, Size::new(61, 61));
        assert!(r.contains(Point::new(20, 80)));
        assert!(!r.contains(Point::new(81, 50)));
        assert!(!r.contains(Point::new(19, 50)));
    }

    #[test]
    fn test_empty_rectangle_contains_nothing() {
        let r = Rectangle::default();
        assert!(r.is_empty());
        assert!(!r.contains(Point::new(0, 0)));
        assert_eq!(r.area(), 0);
        assert_eq!(r.points().count(), 0);
    }

    #[test]
    fn test_points_row_major() {
        let r = Rectangle::new(Point::new(2, 3), Size::new(2, 2));
        let pts: Vec<_> = r.points().collect();
        assert_eq!(
            pts,
            vec![Point::new(2, 3), Point::new(3, 3), Point::new(2, 4), Point::new(3, 4)]
        );
    }

    #[test]
    fn test_chebyshev() {
        assert_eq!(Point::new(0, 0).chebyshev(Point::new(3, -7)), 7);
    }
}
