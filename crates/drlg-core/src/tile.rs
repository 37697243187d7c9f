//! Mega tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

/// Tile code of one mega tile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, FromRepr,
)]
#[repr(u8)]
pub enum Tile {
    VWall = 1,
    HWall = 2,
    Corner = 3,
    DWall = 4,
    VWallEnd = 5,
    HWallEnd = 6,
    Floor = 7,
    Pillar = 8,
    VDoor = 9,
    HDoor = 10,
    VFence = 11,
    HFence = 12,
    HWallVFence = 13,
    HFenceVWall = 14,
    EntranceStairs = 15,
    StairsArch = 16,
    DirtHWall = 17,
    DirtVWall = 18,
    #[default]
    Dirt = 19,
    HDirtCorner = 20,
    DirtHWallEnd = 21,
    DirtVWallEnd = 22,
    StairsDownLowerRight = 25,
    StairsDownLowerLeft = 26,
    StairsDownUpperLeft = 27,
    StairsDownUpperRight = 28,
    HCorner = 29,
    VCorner = 30,
}

impl Tile {
    /// Floor variants share the plain floor code; only the draw differs
    pub const FLOOR2: Tile = Tile::Floor;
    pub const FLOOR3: Tile = Tile::Floor;

    /// Numeric tile code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a tile by code
    pub fn from_code(code: u8) -> Option<Tile> {
        Tile::from_repr(code)
    }

    /// Open floor
    pub const fn is_floor(self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// Dirt or one of its wall composites
    pub const fn is_dirt(self) -> bool {
        matches!(
            self,
            Tile::Dirt
                | Tile::DirtHWall
                | Tile::DirtVWall
                | Tile::HDirtCorner
                | Tile::DirtHWallEnd
                | Tile::DirtVWallEnd
        )
    }

    /// Doors (always protected once placed)
    pub const fn is_door(self) -> bool {
        matches!(self, Tile::VDoor | Tile::HDoor)
    }

    /// Part of a stairs stencil
    pub const fn is_stairs(self) -> bool {
        matches!(
            self,
            Tile::EntranceStairs
                | Tile::StairsArch
                | Tile::StairsDownLowerRight
                | Tile::StairsDownLowerLeft
                | Tile::StairsDownUpperLeft
                | Tile::StairsDownUpperRight
        )
    }

    /// Tiles a wall run may end on
    pub const fn terminates_wall(self) -> bool {
        matches!(
            self,
            Tile::Corner
                | Tile::DWall
                | Tile::VWallEnd
                | Tile::HWallEnd
                | Tile::VCorner
                | Tile::HCorner
                | Tile::DirtHWall
                | Tile::DirtVWall
                | Tile::HDirtCorner
                | Tile::DirtHWallEnd
                | Tile::DirtVWallEnd
        )
    }

    /// Get the display character for this tile
    pub const fn symbol(self) -> char {
        match self {
            Tile::VWall | Tile::VWallEnd => '|',
            Tile::HWall | Tile::HWallEnd => '-',
            Tile::Corner | Tile::DWall | Tile::HCorner | Tile::VCorner => '+',
            Tile::Floor => '.',
            Tile::Pillar => 'o',
            Tile::VDoor | Tile::HDoor => '\'',
            Tile::VFence => ':',
            Tile::HFence => '=',
            Tile::HWallVFence | Tile::HFenceVWall => '+',
            Tile::EntranceStairs | Tile::StairsArch => '<',
            Tile::StairsDownLowerRight
            | Tile::StairsDownLowerLeft
            | Tile::StairsDownUpperLeft
            | Tile::StairsDownUpperRight => '>',
            Tile::Dirt => ' ',
            Tile::DirtHWall
            | Tile::DirtVWall
            | Tile::HDirtCorner
            | Tile::DirtHWallEnd
            | Tile::DirtVWallEnd => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_round_trip() {
        for tile in Tile::iter() {
            assert_eq!(Tile::from_code(tile.code()), Some(tile));
        }
    }

    #[test]
    fn test_unused_codes() {
        assert_eq!(Tile::from_code(0), None);
        assert_eq!(Tile::from_code(23), None);
        assert_eq!(Tile::from_code(24), None);
        assert_eq!(Tile::from_code(31), None);
        assert_eq!(Tile::from_code(255), None);
    }

    #[test]
    fn test_default_is_dirt() {
        assert_eq!(Tile::default(), Tile::Dirt);
        assert!(Tile::default().is_dirt());
    }

    #[test]
    fn test_floor_variants() {
        let floors: Vec<_> = Tile::iter().filter(|t| t.is_floor()).collect();
        assert_eq!(floors, vec![Tile::Floor]);
        assert_eq!(Tile::FLOOR2.code(), 7);
        assert_eq!(Tile::FLOOR3.code(), 7);
    }
}
