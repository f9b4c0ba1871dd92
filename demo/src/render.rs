//! Colored map printout with the route overlaid.

use std::io::Write;

use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, StyledContent, Stylize};
use tilewalk_core::{Coord, Route, Terrain, TileMap};

use crate::Result;

fn glyph(map: &TileMap, route: &Route, p: Coord) -> StyledContent<char> {
    if route.start() == Some(p) {
        return '@'.yellow().bold();
    }
    if route.destination() == Some(p) {
        return 'X'.red().bold();
    }
    if route.contains(p) {
        return '*'.cyan().bold();
    }
    let Some(terrain) = map.terrain(p) else {
        return ' '.reset();
    };
    let ch = terrain.glyph();
    match terrain {
        Terrain::Grass => ch.dark_green(),
        Terrain::Road => ch.grey(),
        Terrain::Rock => ch.dark_grey(),
        Terrain::Water => ch.blue(),
        Terrain::Tree => ch.green(),
        Terrain::Building => ch.magenta(),
    }
}

pub fn print_route(map: &TileMap, route: &Route) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for row in 0..map.size() {
        for col in 0..map.size() {
            queue!(out, PrintStyledContent(glyph(map, route, Coord::new(row, col))))?;
        }
        queue!(out, Print('\n'))?;
    }
    let steps: Vec<String> = route.steps().map(|d| d.to_string()).collect();
    queue!(out, Print(format!("{} tiles: {}\n", route.len(), steps.join(" "))))?;
    out.flush()?;
    Ok(())
}
