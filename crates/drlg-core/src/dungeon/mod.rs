//! Level generation pipeline
//!
//! Each stage works on a shared [`GenerationAttempt`]:
//! - `partition`: room tree into the occupancy mask
//! - `classify`: occupancy to floor / wall / dirt tiles
//! - `fixup`: ordered neighbour rewrites for composite wall tiles
//! - `walls`: wall runs and doors across open floor
//! - `transparency`: lighting regions on the world grid
//! - `stairs`: stairs stencils and the initial view
//! - `finalize`: corner correction and floor variants
//!
//! `generation` ties them together; `template` and `pieces` cover static
//! levels and render piece expansion.

mod attempt;
mod entry;
mod level;

pub mod classify;
pub mod finalize;
pub mod fixup;
pub mod generation;
pub mod partition;
pub mod pieces;
pub mod stairs;
pub mod template;
pub mod transparency;
pub mod walls;

pub use attempt::GenerationAttempt;
pub use entry::Entry;
pub use generation::{LevelGenerator, create_dungeon};
pub use level::FinalizedLevel;
pub use pieces::{DungeonPieces, MegaTileTable};
pub use stairs::{STAIRS_DOWN, STAIRS_UP, StairsPlacement};
pub use template::DunTemplate;
