//! Hand-built level templates (`.dun` data)
//!
//! A template is a little-endian `u16` stream: width, height, `width *
//! height` mega tile codes (0 leaves the cell open), then optional item,
//! monster, object and transparency layers, each covering the template's
//! `2 * width` by `2 * height` world cells. Only tiles and transparency are
//! used here.

use serde::{Deserialize, Serialize};

use crate::consts::{DMAXX, DMAXY, WORLD_OFFSET};
use crate::error::TemplateError;
use crate::geometry::{Displacement, Point};
use crate::tile::Tile;

use super::GenerationAttempt;

/// Layers stored after the tiles, in file order
const LAYERS_BEFORE_TRANSPARENCY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DunTemplate {
    width: usize,
    height: usize,
    /// Row-major, `None` for cells the template leaves open
    tiles: Vec<Option<Tile>>,
    /// Row-major over `2 * width` by `2 * height` world cells
    transparency: Option<Vec<u8>>,
}

impl DunTemplate {
    /// Build a template from row-major tiles
    pub fn new(width: usize, height: usize, tiles: Vec<Option<Tile>>) -> Result<Self, TemplateError> {
        Self::check_size(width, height)?;
        if tiles.len() != width * height {
            return Err(TemplateError::Truncated { needed: width * height, found: tiles.len() });
        }
        Ok(Self { width, height, tiles, transparency: None })
    }

    fn check_size(width: usize, height: usize) -> Result<(), TemplateError> {
        if width == 0 || height == 0 {
            return Err(TemplateError::Empty);
        }
        if width > DMAXX || height > DMAXY {
            return Err(TemplateError::TooLarge { width, height, max_width: DMAXX, max_height: DMAXY });
        }
        Ok(())
    }

    /// Parse raw `.dun` bytes
    pub fn parse(data: &[u8]) -> Result<Self, TemplateError> {
        let values: Vec<u16> = data
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        if values.len() < 2 {
            return Err(TemplateError::Truncated { needed: 2, found: values.len() });
        }
        let width = values[0] as usize;
        let height = values[1] as usize;
        Self::check_size(width, height)?;

        let tile_end = 2 + width * height;
        if values.len() < tile_end {
            return Err(TemplateError::Truncated { needed: tile_end, found: values.len() });
        }

        let mut tiles = Vec::with_capacity(width * height);
        for (n, &code) in values[2..tile_end].iter().enumerate() {
            if code == 0 {
                tiles.push(None);
                continue;
            }
            let tile = u8::try_from(code)
                .ok()
                .and_then(Tile::from_code)
                .ok_or(TemplateError::UnknownTile { code, x: n % width, y: n / width })?;
            tiles.push(Some(tile));
        }

        let layer = 4 * width * height;
        let start = tile_end + LAYERS_BEFORE_TRANSPARENCY * layer;
        let transparency = values
            .get(start..start + layer)
            .map(|layer| layer.iter().map(|&v| v as u8).collect());

        Ok(Self { width, height, tiles, transparency })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at template coordinates
    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.tiles.get(y * self.width + x).copied().flatten()
    }

    pub fn has_transparency(&self) -> bool {
        self.transparency.is_some()
    }

    /// Stamp the template at `origin`: set cells are written and protected,
    /// open cells become unprotected floor.
    pub fn place_tiles(&self, attempt: &mut GenerationAttempt, origin: Point) {
        for y in 0..self.height {
            for x in 0..self.width {
                let p = origin + Displacement::new(x as i32, y as i32);
                match self.tile(x, y) {
                    Some(tile) => {
                        attempt.tiles.set(p, tile);
                        attempt.protect(p);
                    }
                    None => attempt.tiles.set(p, Tile::Floor),
                }
            }
        }
    }

    /// Copy the transparency layer into the world grid at the map origin
    pub fn apply_transparency(&self, attempt: &mut GenerationAttempt) {
        let Some(layer) = &self.transparency else {
            return;
        };
        let world_width = 2 * self.width;
        for (n, &value) in layer.iter().enumerate() {
            let p = Point::new(WORLD_OFFSET + (n % world_width) as i32, WORLD_OFFSET + (n / world_width) as i32);
            attempt.transparency.set(p, value);
        }
    }
}
