//! Level dimensions and generation constants

/// Mega tile map dimensions
pub const DMAXX: usize = 40;
pub const DMAXY: usize = 40;

/// Border of world cells around the mega tile area
pub const WORLD_OFFSET: i32 = 16;

/// World (render) grid dimensions: each mega tile covers a 2x2 block
pub const MAXDUNX: usize = WORLD_OFFSET as usize * 2 + DMAXX * 2;
pub const MAXDUNY: usize = WORLD_OFFSET as usize * 2 + DMAXY * 2;

/// Minimum number of occupied mega tiles for an accepted layout
pub const MIN_AREA: usize = 650;

/// Default cap on partition attempts before giving up
pub const MAX_ATTEMPTS: u32 = 10_000;

/// Radius (world cells) around stairs up in which stairs down may not spawn
pub const STAIRS_EXCLUSION_RADIUS: i32 = 30;

/// Number of size candidates tried per partition step
pub const ROOM_SIZE_TRIES: usize = 20;
