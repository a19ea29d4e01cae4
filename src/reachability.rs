//! Open-Air Reachability
//!
//! Active coolers need a route to the outside of the reactor. The route is a
//! face-connected run of air (or of the cooler's own tile) that steps off the
//! grid edge.

use ndarray::Array3;

use crate::grid::{Direction, Grid, Position};
use crate::tile::Tile;

/// Flood fill from `start` through air and `compatible` tiles.
///
/// Returns true as soon as the fill can step outside the grid. Each call
/// allocates its own visited set; a cell is expanded at most once, so a
/// second route into an already visited cell never reports success.
pub fn is_reachable(grid: &Grid, start: Position, compatible: Tile) -> bool {
    let mut visited = Array3::from_elem(grid.dims(), false);
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        let Some(tile) = grid.get(pos) else {
            continue;
        };
        if visited[pos] {
            continue;
        }
        visited[pos] = true;
        if tile != Tile::Air && tile != compatible {
            continue;
        }

        // Reverse push keeps the -x, +x, -y, +y, -z, +z exploration order
        for &dir in Direction::ALL.iter().rev() {
            match grid.step(pos, dir, 1) {
                None => return true,
                Some(next) if !visited[next] => stack.push(next),
                Some(_) => {}
            }
        }
    }

    false
}
