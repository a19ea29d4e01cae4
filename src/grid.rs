//! Reactor Grid
//!
//! A fixed-size 3D arrangement of tiles backed by `ndarray`. The grid is never
//! mutated by an evaluation; every lookup outside the bounds reads as casing.

use ndarray::{Array3, ArrayView3};

use crate::error::{FissionError, Result};
use crate::tile::Tile;

/// Grid position as `[x, y, z]`
pub type Position = [usize; 3];

/// One of the six axis-aligned unit steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NegX,
    PosX,
    NegY,
    PosY,
    NegZ,
    PosZ,
}

impl Direction {
    /// Opposite directions are adjacent: `ALL[2k]` and `ALL[2k + 1]` share an axis
    pub const ALL: [Direction; 6] = [
        Direction::NegX,
        Direction::PosX,
        Direction::NegY,
        Direction::PosY,
        Direction::NegZ,
        Direction::PosZ,
    ];

    pub fn delta(self) -> [isize; 3] {
        match self {
            Direction::NegX => [-1, 0, 0],
            Direction::PosX => [1, 0, 0],
            Direction::NegY => [0, -1, 0],
            Direction::PosY => [0, 1, 0],
            Direction::NegZ => [0, 0, -1],
            Direction::PosZ => [0, 0, 1],
        }
    }
}

/// Move `distance` cells along `dir` inside a grid of size `dims`
pub fn offset(
    dims: (usize, usize, usize),
    pos: Position,
    dir: Direction,
    distance: usize,
) -> Option<Position> {
    let size = [dims.0, dims.1, dims.2];
    let delta = dir.delta();
    let mut next = [0usize; 3];
    for axis in 0..3 {
        let moved = pos[axis].checked_add_signed(delta[axis] * distance as isize)?;
        if moved >= size[axis] {
            return None;
        }
        next[axis] = moved;
    }
    Some(next)
}

/// Read-only reactor layout
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    tiles: Array3<Tile>,
}

impl Grid {
    /// Create a grid of the given `(x, y, z)` size filled with one tile
    pub fn filled(dims: (usize, usize, usize), tile: Tile) -> Self {
        Self {
            tiles: Array3::from_elem(dims, tile),
        }
    }

    pub fn from_tiles(tiles: Array3<Tile>) -> Self {
        Self { tiles }
    }

    /// Build a grid from raw tile codes, rejecting unknown codes
    pub fn from_codes(codes: ArrayView3<u8>) -> Result<Self> {
        let mut tiles = Array3::from_elem(codes.dim(), Tile::Air);
        for (pos, &code) in codes.indexed_iter() {
            tiles[pos] = Tile::from_code(code).ok_or(FissionError::UnknownTileCode(code))?;
        }
        Ok(Self { tiles })
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        self.tiles.dim()
    }

    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.tiles.get(pos).copied()
    }

    pub fn set(&mut self, pos: Position, tile: Tile) {
        self.tiles[pos] = tile;
    }

    /// Step `distance` cells from `pos` along `dir`, `None` once outside the grid
    pub fn step(&self, pos: Position, dir: Direction, distance: usize) -> Option<Position> {
        offset(self.dims(), pos, dir, distance)
    }

    /// Tile `distance` cells away along `dir`, casing when out of bounds
    pub fn tile_toward(&self, pos: Position, dir: Direction, distance: usize) -> Tile {
        self.step(pos, dir, distance)
            .and_then(|next| self.get(next))
            .unwrap_or(Tile::Casing)
    }

    /// The six face neighbours in `Direction::ALL` order, casing outside the grid
    pub fn neighbors(&self, pos: Position) -> [Tile; 6] {
        Direction::ALL.map(|dir| self.tile_toward(pos, dir, 1))
    }

    /// Whether `pos` lies on a boundary plane of every axis.
    ///
    /// Coordinate 0 always counts as a boundary, so a one-wide axis is trivially satisfied.
    pub fn is_corner(&self, pos: Position) -> bool {
        let (sx, sy, sz) = self.dims();
        [sx, sy, sz]
            .iter()
            .zip(pos)
            .all(|(&size, coord)| coord == 0 || coord + 1 == size)
    }

    /// Iterate every position with its tile in x-major, z-minor order
    pub fn indexed_tiles(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((x, y, z), &tile)| ([x, y, z], tile))
    }
}
