//! Error types for generation, template and tile set loading

use thiserror::Error;

/// Which stairs stencil could not be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Stairs {
    #[strum(serialize = "stairs up")]
    Up,
    #[strum(serialize = "stairs down")]
    Down,
}

/// Why a single generation attempt was thrown away.
///
/// Attempt failures are recovered by the orchestrator and never reach the
/// caller; they exist so rejections can be logged and tested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    #[error("layout covers {area} tiles, need at least {min_area}")]
    AreaTooSmall { area: usize, min_area: usize },

    #[error("no valid position for {stairs}")]
    StairsPlacementFailed { stairs: Stairs },
}

/// Errors surfaced by the level generator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no valid layout after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// Errors while parsing a static level template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template data truncated: need {needed} values, found {found}")]
    Truncated { needed: usize, found: usize },

    #[error("template has zero width or height")]
    Empty,

    #[error("template is {width}x{height}, larger than the {max_width}x{max_height} map")]
    TooLarge {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },

    #[error("unknown tile code {code} at ({x}, {y})")]
    UnknownTile { code: u16, x: usize, y: usize },
}

/// Errors while loading or applying a mega tile table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileSetError {
    #[error("mega tile data length {0} is not a multiple of 8 bytes")]
    Misaligned(usize),

    #[error("mega tile table is empty")]
    Empty,

    #[error("no mega tile definition for tile index {index}")]
    MissingMegaTile { index: usize },
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_failure_display() {
        let err = AttemptFailure::AreaTooSmall { area: 120, min_area: 650 };
        assert_eq!(err.to_string(), "layout covers 120 tiles, need at least 650");

        let err = AttemptFailure::StairsPlacementFailed { stairs: Stairs::Down };
        assert_eq!(err.to_string(), "no valid position for stairs down");
    }

    #[test]
    fn test_template_error_display() {
        let err = TemplateError::UnknownTile { code: 99, x: 1, y: 2 };
        assert!(err.to_string().contains("99"));
        assert!(err.to_string().contains("(1, 2)"));
    }
}
