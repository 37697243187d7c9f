//! drlg-core: procedural wilderness dungeon generator
//!
//! Turns a seed and an arrival direction into a classified 40x40 mega tile
//! layout with doors, stairs and lighting regions. Generation is a pure
//! function of the seed; nothing here performs I/O except template and
//! configuration loading helpers.

pub mod dungeon;
pub mod error;

mod config;
mod consts;
mod geometry;
mod grid;
mod tile;

pub use config::GeneratorConfig;
pub use consts::*;
pub use drlg_rng::DiabloRng;
pub use dungeon::{
    DunTemplate, DungeonPieces, Entry, FinalizedLevel, GenerationAttempt, LevelGenerator, MegaTileTable,
    create_dungeon,
};
pub use error::{AttemptFailure, ConfigError, GenerationError, Stairs, TemplateError, TileSetError};
pub use geometry::{Displacement, Point, Rectangle, Size};
pub use grid::{CellFlags, Grid};
pub use tile::Tile;
