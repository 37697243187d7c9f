//! How the player arrives on a level

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Arrival direction, used only to pick the initial view position
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    /// Walked down the stairs from the level above
    #[default]
    Main,
    /// Walked up the stairs from the level below
    Previous,
    SetLevel,
    ReturnLevel,
    Load,
    WarpLevel,
    /// Town portal into the level from above
    TownWarpDown,
    TownWarpUp,
}

impl Entry {
    /// Arrival puts the player next to the stairs up
    pub const fn views_stairs_up(self) -> bool {
        matches!(self, Entry::Main | Entry::TownWarpDown)
    }

    /// Arrival puts the player next to the stairs down
    pub const fn views_stairs_down(self) -> bool {
        matches!(self, Entry::Previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_entry_names_round_trip() {
        for entry in Entry::iter() {
            assert_eq!(Entry::from_str(&entry.to_string()), Ok(entry));
        }
        assert_eq!(Entry::from_str("town_warp_down"), Ok(Entry::TownWarpDown));
    }

    #[test]
    fn test_view_selection() {
        let up: Vec<Entry> = Entry::iter().filter(|e| e.views_stairs_up()).collect();
        assert_eq!(up, vec![Entry::Main, Entry::TownWarpDown]);
        assert!(Entry::Previous.views_stairs_down());
        assert!(!Entry::Load.views_stairs_up() && !Entry::Load.views_stairs_down());
    }
}
