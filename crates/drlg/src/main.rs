//! drlg: generate a wilderness dungeon level and print it
//!
//! Prints an ASCII map by default, or the full level as JSON with `--json`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

use drlg_core::{
    ConfigError, DunTemplate, DungeonPieces, Entry, FinalizedLevel, GenerationError, GeneratorConfig, LevelGenerator,
    MegaTileTable, Point, TemplateError, TileSetError,
};

/// Procedural dungeon level generator
#[derive(Parser, Debug)]
#[command(name = "drlg")]
#[command(author, version, about = "Generate a dungeon level from a seed", long_about = None)]
struct Args {
    /// Level seed
    #[arg(short = 's', long = "seed", default_value_t = 1)]
    seed: u32,

    /// How the player arrives (main, previous, set_level, return_level,
    /// load, warp_level, town_warp_down, town_warp_up)
    #[arg(short = 'e', long = "entry", default_value = "main")]
    entry: String,

    /// Generator configuration (JSON)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Load a hand-built `.dun` template instead of generating
    #[arg(short = 't', long = "template")]
    template: Option<PathBuf>,

    /// Player start for templates, as `x,y` world coordinates
    #[arg(long = "spawn", value_parser = parse_point)]
    spawn: Option<Point>,

    /// Mega tile table (`.til`) used to expand the level into render pieces
    #[arg(long = "tileset")]
    tileset: Option<PathBuf>,

    /// Print the level as JSON
    #[arg(short = 'j', long = "json")]
    json: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("unknown entry '{0}'")]
    UnknownEntry(String),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("template: {0}")]
    Template(#[from] TemplateError),

    #[error("tile set: {0}")]
    TileSet(#[from] TileSetError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Output<'a> {
    level: &'a FinalizedLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pieces: Option<&'a DungeonPieces>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

fn read(path: &Path) -> Result<Vec<u8>, CliError> {
    std::fs::read(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load_from_file(path)?,
        None => GeneratorConfig::default(),
    };
    let generator = LevelGenerator::new(config);

    let level = match &args.template {
        Some(path) => {
            let template = DunTemplate::parse(&read(path)?)?;
            match args.spawn {
                Some(spawn) => generator.load_template(args.seed, &template, spawn),
                None => generator.load_pre_template(args.seed, &template),
            }
        }
        None => {
            let entry: Entry = args
                .entry
                .parse()
                .map_err(|_| CliError::UnknownEntry(args.entry.clone()))?;
            generator.generate(args.seed, entry)?
        }
    };

    let pieces = match &args.tileset {
        Some(path) => {
            let table = MegaTileTable::parse(&read(path)?)?;
            let pieces = level.pieces(&table)?;
            let special = pieces.special.values().filter(|&&v| v != 0).count();
            info!("{} mega tiles loaded, {special} special cells", table.len());
            Some(pieces)
        }
        None => None,
    };

    if args.json {
        let out = Output { level: &level, pieces: pieces.as_ref() };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", level.render_ascii());
        if let Some(view) = level.view_position {
            println!("view: {},{}", view.x, view.y);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("18, 20"), Ok(Point::new(18, 20)));
        assert!(parse_point("18").is_err());
        assert!(parse_point("a,2").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["drlg"]);
        assert_eq!(args.seed, 1);
        assert_eq!(args.entry, "main");
        assert!(!args.json);
    }

    #[test]
    fn test_unknown_entry_is_reported() {
        let args = Args::parse_from(["drlg", "--entry", "sideways"]);
        assert!(matches!(run(&args), Err(CliError::UnknownEntry(e)) if e == "sideways"));
    }
}
