//! Generation orchestrator
//!
//! Drives one RNG stream through partition, classification, decoration and
//! stairs placement, throwing whole attempts away until one is accepted.

use drlg_rng::DiabloRng;
use log::{debug, info, trace};

use crate::config::GeneratorConfig;
use crate::error::{AttemptFailure, GenerationError};
use crate::geometry::Point;
use crate::tile::Tile;

use super::classify::classify_tiles;
use super::finalize::{fill_floor, fix_corner_tiles};
use super::fixup::fix_tile_patterns;
use super::partition::first_room;
use super::stairs::{StairsPlacement, place_stairs};
use super::template::DunTemplate;
use super::transparency::{copy_entrance_transparency, flood_transparency, propagate_transparency};
use super::walls::add_walls;
use super::{Entry, FinalizedLevel, GenerationAttempt};

/// Where the orchestrator is in the current attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Grow a fresh room tree
    Partitioning,
    /// Accept or reject the room tree by area
    AreaCheck,
    /// Tiles, walls and lighting regions are built
    Classified,
    /// Try to place both stairs
    StairsCheck,
    /// Layout accepted
    Finalized(StairsPlacement),
}

/// Level generator with tunable limits
#[derive(Debug, Clone, Default)]
pub struct LevelGenerator {
    config: GeneratorConfig,
}

impl LevelGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a level from `seed`.
    ///
    /// The result depends only on `seed`, `entry` and the configuration.
    /// Fails only when no layout is accepted within `max_attempts`.
    pub fn generate(&self, seed: u32, entry: Entry) -> Result<FinalizedLevel, GenerationError> {
        let mut rng = DiabloRng::new(seed);
        let mut attempt = GenerationAttempt::new();

        let (placement, attempts) = self.build_layout(&mut attempt, &mut rng, entry)?;

        copy_entrance_transparency(&attempt.tiles, &mut attempt.transparency);
        propagate_transparency(&attempt.tiles, &mut attempt.transparency);
        fix_corner_tiles(&mut attempt);
        fill_floor(&mut attempt, &mut rng);

        let mut level = FinalizedLevel::snapshot(&attempt, seed, Some(entry));
        level.view_position = placement.view;
        level.stairs_up = Some(placement.up);
        level.stairs_down = Some(placement.down);
        level.attempts = attempts;
        level.rng_calls = rng.call_count();

        info!(
            "seed {seed}: level accepted after {attempts} attempts, {} rng calls",
            rng.call_count()
        );
        Ok(level)
    }

    /// Run attempts until one passes both the area and the stairs check.
    ///
    /// Returns the stairs placement and the number of partition attempts.
    pub fn build_layout(
        &self,
        attempt: &mut GenerationAttempt,
        rng: &mut DiabloRng,
        entry: Entry,
    ) -> Result<(StairsPlacement, u32), GenerationError> {
        attempt.reset();
        let mut attempts = 0u32;
        let mut phase = Phase::Partitioning;

        loop {
            trace!("attempt {attempts}: {phase:?}");
            phase = match phase {
                Phase::Partitioning => {
                    if attempts >= self.config.max_attempts {
                        return Err(GenerationError::Exhausted { attempts });
                    }
                    attempts += 1;
                    first_room(attempt, rng);
                    Phase::AreaCheck
                }
                Phase::AreaCheck => match self.check_area(attempt) {
                    Ok(()) => Phase::Classified,
                    Err(failure) => {
                        debug!("attempt {attempts} rejected: {failure}");
                        Phase::Partitioning
                    }
                },
                Phase::Classified => {
                    attempt.reset_tiles();
                    classify_tiles(&attempt.occupancy, &mut attempt.tiles);
                    fix_tile_patterns(&mut attempt.tiles);
                    add_walls(attempt, rng);
                    flood_transparency(attempt, Tile::Floor);
                    Phase::StairsCheck
                }
                Phase::StairsCheck => {
                    match place_stairs(attempt, rng, entry, self.config.stairs_exclusion_radius) {
                        Ok(placement) => Phase::Finalized(placement),
                        Err(failure) => {
                            debug!("attempt {attempts} rejected: {failure}");
                            attempt.reset_transparency();
                            Phase::Partitioning
                        }
                    }
                }
                Phase::Finalized(placement) => return Ok((placement, attempts)),
            };
        }
    }

    fn check_area(&self, attempt: &GenerationAttempt) -> Result<(), AttemptFailure> {
        let area = attempt.area();
        if area < self.config.min_area {
            return Err(AttemptFailure::AreaTooSmall { area, min_area: self.config.min_area });
        }
        Ok(())
    }

    /// Build a level from a template without procedural generation
    pub fn load_pre_template(&self, seed: u32, template: &DunTemplate) -> FinalizedLevel {
        let mut rng = DiabloRng::new(seed);
        let mut attempt = GenerationAttempt::new();
        template.place_tiles(&mut attempt, Point::default());
        fill_floor(&mut attempt, &mut rng);
        let mut level = FinalizedLevel::snapshot(&attempt, seed, None);
        level.rng_calls = rng.call_count();
        level
    }

    /// Build a playable level from a template, starting the player at `spawn`
    pub fn load_template(&self, seed: u32, template: &DunTemplate, spawn: Point) -> FinalizedLevel {
        let mut rng = DiabloRng::new(seed);
        let mut attempt = GenerationAttempt::new();
        template.place_tiles(&mut attempt, Point::default());
        template.apply_transparency(&mut attempt);
        fill_floor(&mut attempt, &mut rng);

        let mut level = FinalizedLevel::snapshot(&attempt, seed, None);
        level.view_position = Some(spawn);
        level.rng_calls = rng.call_count();
        info!("seed {seed}: loaded {}x{} template", template.width(), template.height());
        level
    }
}

/// Generate a level with the default configuration
pub fn create_dungeon(seed: u32, entry: Entry) -> Result<FinalizedLevel, GenerationError> {
    LevelGenerator::default().generate(seed, entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = create_dungeon(42, Entry::Main).unwrap();
        let b = create_dungeon(42, Entry::Main).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_attempts_exhausts() {
        let config = GeneratorConfig { max_attempts: 0, ..GeneratorConfig::default() };
        let err = LevelGenerator::new(config).generate(1, Entry::Main).unwrap_err();
        assert_eq!(err, GenerationError::Exhausted { attempts: 0 });
    }

    #[test]
    fn test_unreachable_area_exhausts() {
        let config = GeneratorConfig { min_area: 1601, max_attempts: 5, ..GeneratorConfig::default() };
        let err = LevelGenerator::new(config).generate(9, Entry::Main).unwrap_err();
        assert_eq!(err, GenerationError::Exhausted { attempts: 5 });
    }

    #[test]
    fn test_level_records_stairs() {
        let level = create_dungeon(5, Entry::Main).unwrap();
        let up = level.stairs_up.unwrap();
        let down = level.stairs_down.unwrap();
        assert_eq!(level.tile(Point::new(up.x + 1, up.y + 1)), Some(Tile::EntranceStairs));
        assert_eq!(level.tile(Point::new(down.x, down.y + 1)), Some(Tile::StairsDownUpperLeft));
        assert!(level.attempts >= 1);
        assert!(level.set_piece.is_empty());
    }

    #[test]
    fn test_template_skips_generation() {
        let template = DunTemplate::new(1, 1, vec![Some(Tile::Pillar)]).unwrap();
        let level = LevelGenerator::default().load_template(0, &template, Point::new(20, 20));
        assert_eq!(level.tiles[(0, 0)], Tile::Pillar);
        assert_eq!(level.tiles[(1, 0)], Tile::Dirt);
        assert_eq!(level.view_position, Some(Point::new(20, 20)));
        assert_eq!(level.stairs_up, None);
        assert_eq!(level.attempts, 0);
        // no floor, nothing drawn
        assert_eq!(level.rng_calls, 0);
    }
}
