//! Route a walker across a text map and print the result.
//!
//! ```text
//! tilewalk-demo [MAP] [START] [STOP] [--config FILE] [--no-shortcut]
//! ```
//!
//! `START` and `STOP` are `row,col` pairs. Without arguments the bundled town
//! map is used, routing from the north-west corner to the eastern building.
//! Set `RUST_LOG=debug` to watch the engine decide between the straight line
//! and the search.

mod config;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tilewalk_core::{Coord, MapError, Route, TileMap};
use tilewalk_paths::{PathEngine, PathError};

use crate::config::DemoConfig;

const TOWN: &str = include_str!("../maps/town.txt");

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("bad map: {0}")]
    Map(#[from] MapError),

    #[error("no route: {0}")]
    Path(#[from] PathError),

    #[error("usage: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, DemoError>;

struct Args {
    map: Option<PathBuf>,
    start: Coord,
    stop: Coord,
    config: Option<PathBuf>,
    no_shortcut: bool,
}

fn parse_coord(s: &str) -> Result<Coord> {
    let bad = || DemoError::Usage(format!("expected row,col but got {s:?}"));
    let (row, col) = s.split_once(',').ok_or_else(bad)?;
    let row = row.trim().parse().map_err(|_| bad())?;
    let col = col.trim().parse().map_err(|_| bad())?;
    Ok(Coord::new(row, col))
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        map: None,
        start: Coord::new(0, 0),
        stop: Coord::new(9, 10),
        config: None,
        no_shortcut: false,
    };
    let mut positional = Vec::new();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                let path = it
                    .next()
                    .ok_or_else(|| DemoError::Usage("--config needs a file".into()))?;
                args.config = Some(path.into());
            }
            "--no-shortcut" => args.no_shortcut = true,
            _ => positional.push(arg),
        }
    }
    match positional.as_slice() {
        [] => {}
        [map] => args.map = Some(map.into()),
        [map, start, stop] => {
            args.map = Some(map.into());
            args.start = parse_coord(start)?;
            args.stop = parse_coord(stop)?;
        }
        _ => return Err(DemoError::Usage("tilewalk-demo [MAP [START STOP]]".into())),
    }
    Ok(args)
}

fn run() -> Result<()> {
    let args = parse_args()?;

    let text = match &args.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => TOWN.to_owned(),
    };
    let map = TileMap::parse(&text)?;

    let mut cfg = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if args.no_shortcut {
        cfg.query.try_shortcut = false;
    }

    log::info!(
        "{0}x{0} map, routing {1} -> {2}",
        map.size(),
        args.start,
        args.stop
    );

    let mut engine = PathEngine::with_tiles(&map, cfg.path);
    let mut route = Route::new();
    let method = engine.find_path(&map, args.start, args.stop, &mut route, cfg.query)?;
    log::info!("{:?} route of {} tiles", method, route.len());

    render::print_route(&map, &route)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
