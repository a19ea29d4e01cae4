//! Neutron Paths and Fuel Efficiency
//!
//! A fuel cell gains one point of efficiency for every axis direction in which
//! a straight run of moderators leads to another cell. The efficiency field
//! built here also drives moderator scoring: a moderator is only useful next to
//! cells with non-zero efficiency.

use ndarray::Array3;

use crate::grid::{offset, Direction, Grid, Position};
use crate::tile::Tile;

/// Whether a neutron path runs from `pos` along `dir` to another fuel cell.
///
/// The walk passes through at most `reach` moderators. Any other tile,
/// including the casing beyond the grid, blocks the path.
pub fn has_connected_fuel(grid: &Grid, pos: Position, dir: Direction, reach: usize) -> bool {
    for distance in 1..=reach.saturating_add(1) {
        match grid.tile_toward(pos, dir, distance) {
            Tile::Cell => return true,
            Tile::Moderator => continue,
            _ => return false,
        }
    }
    false
}

/// Efficiency of the tile at `pos`: 0 for anything but a cell, otherwise
/// 1 plus the number of connected directions
pub fn cell_efficiency(grid: &Grid, pos: Position, reach: usize) -> u32 {
    if grid.get(pos) != Some(Tile::Cell) {
        return 0;
    }
    1 + Direction::ALL
        .iter()
        .filter(|&&dir| has_connected_fuel(grid, pos, dir, reach))
        .count() as u32
}

/// Per-cell efficiency with the fuel power and heat it produces
#[derive(Debug, Clone)]
pub struct EfficiencyField {
    values: Array3<u32>,
    pub power: f64,  // Sum of efficiencies, before the fuel multiplier
    pub heat: f64,   // Sum of triangular numbers of efficiencies
}

impl EfficiencyField {
    pub fn build(grid: &Grid, reach: usize) -> Self {
        let mut values = Array3::<u32>::zeros(grid.dims());
        let mut power = 0.0;
        let mut heat = 0.0;

        for (pos, tile) in grid.indexed_tiles() {
            if tile != Tile::Cell {
                continue;
            }
            let efficiency = cell_efficiency(grid, pos, reach);
            values[pos] = efficiency;
            power += efficiency as f64;
            heat += (efficiency * (efficiency + 1)) as f64 / 2.0;
        }

        Self { values, power, heat }
    }

    pub fn get(&self, pos: Position) -> u32 {
        self.values.get(pos).copied().unwrap_or(0)
    }

    /// Efficiency of the neighbour of `pos` along `dir`, 0 outside the grid
    pub fn toward(&self, pos: Position, dir: Direction) -> u32 {
        offset(self.values.dim(), pos, dir, 1)
            .map(|next| self.values[next])
            .unwrap_or(0)
    }

    /// Sum of the efficiencies of the six face neighbours of `pos`
    pub fn neighbor_sum(&self, pos: Position) -> u32 {
        Direction::ALL.iter().map(|&dir| self.toward(pos, dir)).sum()
    }
}

/// Power and heat added by one moderator, before fuel multipliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeratorScore {
    pub power: f64,
    pub heat: f64,
}

/// Score the moderator at `pos`; `None` when it touches no efficiency at all
pub fn score_moderator(
    field: &EfficiencyField,
    pos: Position,
    extra_power: f64,
    extra_heat: f64,
) -> Option<ModeratorScore> {
    let flux = field.neighbor_sum(pos);
    if flux == 0 {
        return None;
    }
    Some(ModeratorScore {
        power: flux as f64 * (extra_power / 6.0),
        heat: flux as f64 * (extra_heat / 6.0),
    })
}
