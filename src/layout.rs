//! Reactor Layout Files
//!
//! Layouts are JSON documents holding a nested `[x][y][z]` array, either of
//! tile names or of raw tile codes:
//!
//! ```json
//! { "tiles": [[["cell", "moderator", "cell"]]] }
//! { "codes": [[[31, 32, 31]]] }
//! ```

use ndarray::Array3;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{FissionError, Result};
use crate::grid::Grid;
use crate::tile::Tile;

type Nested<T> = Vec<Vec<Vec<T>>>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LayoutFile {
    Tiles(Nested<String>),
    Codes(Nested<u8>),
}

/// Flatten a nested `[x][y][z]` array, rejecting ragged or empty input
fn to_array3<T>(nested: Nested<T>) -> Result<Array3<T>> {
    let sx = nested.len();
    let sy = nested.first().map_or(0, Vec::len);
    let sz = nested
        .first()
        .and_then(|plane| plane.first())
        .map_or(0, Vec::len);
    if sx == 0 || sy == 0 || sz == 0 {
        return Err(FissionError::MalformedLayout(format!(
            "empty dimension in {}x{}x{} layout",
            sx, sy, sz
        )));
    }

    let mut flat = Vec::with_capacity(sx * sy * sz);
    for (x, plane) in nested.into_iter().enumerate() {
        if plane.len() != sy {
            return Err(FissionError::MalformedLayout(format!(
                "plane x={} has {} rows, expected {}",
                x,
                plane.len(),
                sy
            )));
        }
        for (y, row) in plane.into_iter().enumerate() {
            if row.len() != sz {
                return Err(FissionError::MalformedLayout(format!(
                    "row x={} y={} has {} tiles, expected {}",
                    x,
                    y,
                    row.len(),
                    sz
                )));
            }
            flat.extend(row);
        }
    }

    Array3::from_shape_vec((sx, sy, sz), flat)
        .map_err(|e| FissionError::MalformedLayout(e.to_string()))
}

/// Parse a layout from its JSON text
pub fn parse_layout(json: &str) -> Result<Grid> {
    match serde_json::from_str::<LayoutFile>(json)? {
        LayoutFile::Tiles(names) => {
            let names = to_array3(names)?;
            let mut tiles = Array3::from_elem(names.dim(), Tile::Air);
            for (pos, name) in names.indexed_iter() {
                tiles[pos] = name.parse()?;
            }
            Ok(Grid::from_tiles(tiles))
        }
        LayoutFile::Codes(codes) => Grid::from_codes(to_array3(codes)?.view()),
    }
}

/// Load a layout file from disk
pub fn load_layout(path: &Path) -> Result<Grid> {
    let content = fs::read_to_string(path)?;
    parse_layout(&content)
}
