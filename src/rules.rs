//! Cooler Placement Rules
//!
//! Each cooler rule is a predicate over the six face neighbours of the cooler.
//! Neighbours are compared as exact tiles, so an active water cooler does not
//! satisfy a rule asking for water.

use crate::grid::{Grid, Position};
use crate::tile::{Rule, Tile};

const WATER: Tile = Tile::passive(Rule::Water);
const REDSTONE: Tile = Tile::passive(Rule::Redstone);
const QUARTZ: Tile = Tile::passive(Rule::Quartz);
const GOLD: Tile = Tile::passive(Rule::Gold);
const GLOWSTONE: Tile = Tile::passive(Rule::Glowstone);
const LAPIS: Tile = Tile::passive(Rule::Lapis);

/// Number of neighbours equal to `tile`
pub fn count(neighbors: &[Tile; 6], tile: Tile) -> usize {
    neighbors.iter().filter(|&&n| n == tile).count()
}

fn has(neighbors: &[Tile; 6], tile: Tile) -> bool {
    count(neighbors, tile) > 0
}

/// Whether both neighbours on any one axis equal `tile`
fn has_axis_pair(neighbors: &[Tile; 6], tile: Tile) -> bool {
    neighbors
        .chunks_exact(2)
        .any(|pair| pair[0] == tile && pair[1] == tile)
}

/// Check `rule` against neighbours in `Direction::ALL` order.
///
/// `corner` only matters for enderium, which must sit on a grid corner.
pub fn rule_satisfied(rule: Rule, neighbors: &[Tile; 6], corner: bool) -> bool {
    let n = neighbors;
    match rule {
        Rule::Water => has(n, Tile::Cell) || has(n, Tile::Moderator),
        Rule::Redstone => has(n, Tile::Cell),
        Rule::Quartz => has(n, Tile::Moderator),
        Rule::Gold => has(n, WATER) && has(n, REDSTONE),
        Rule::Glowstone => count(n, Tile::Moderator) >= 2,
        Rule::Lapis => has(n, Tile::Cell) && has(n, Tile::Casing),
        Rule::Diamond => has(n, WATER) && has(n, QUARTZ),
        Rule::Helium => count(n, REDSTONE) == 1 && has(n, Tile::Casing),
        Rule::Enderium => count(n, Tile::Casing) == 3 && corner,
        Rule::Cryotheum => count(n, Tile::Cell) >= 2,
        Rule::Iron => has(n, GOLD),
        Rule::Emerald => has(n, Tile::Moderator) && has(n, Tile::Cell),
        Rule::Copper => has(n, GLOWSTONE),
        Rule::Tin => has_axis_pair(n, LAPIS),
        Rule::Magnesium => has(n, Tile::Casing) && has(n, Tile::Moderator),
    }
}

/// Check `rule` for a cooler placed at `pos` in `grid`
pub fn placement_valid(grid: &Grid, pos: Position, rule: Rule) -> bool {
    let corner = rule == Rule::Enderium && grid.is_corner(pos);
    rule_satisfied(rule, &grid.neighbors(pos), corner)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Tile = Tile::Air;

    fn with(tiles: &[(usize, Tile)]) -> [Tile; 6] {
        let mut neighbors = [A; 6];
        for &(i, tile) in tiles {
            neighbors[i] = tile;
        }
        neighbors
    }

    #[test]
    fn test_water_needs_cell_or_moderator() {
        assert!(!rule_satisfied(Rule::Water, &with(&[]), false));
        assert!(rule_satisfied(Rule::Water, &with(&[(3, Tile::Cell)]), false));
        assert!(rule_satisfied(Rule::Water, &with(&[(5, Tile::Moderator)]), false));
    }

    #[test]
    fn test_gold_needs_water_and_redstone() {
        assert!(!rule_satisfied(Rule::Gold, &with(&[(0, WATER)]), false));
        assert!(rule_satisfied(Rule::Gold, &with(&[(0, WATER), (4, REDSTONE)]), false));
        // Active water is a different tile
        let active_water = Tile::active(Rule::Water);
        assert!(!rule_satisfied(Rule::Gold, &with(&[(0, active_water), (4, REDSTONE)]), false));
    }

    #[test]
    fn test_glowstone_and_cryotheum_need_two() {
        let one = with(&[(0, Tile::Moderator), (2, Tile::Cell)]);
        let two = with(&[(0, Tile::Moderator), (1, Tile::Moderator), (2, Tile::Cell), (3, Tile::Cell)]);
        assert!(!rule_satisfied(Rule::Glowstone, &one, false));
        assert!(rule_satisfied(Rule::Glowstone, &two, false));
        assert!(!rule_satisfied(Rule::Cryotheum, &one, false));
        assert!(rule_satisfied(Rule::Cryotheum, &two, false));
    }

    #[test]
    fn test_helium_needs_exactly_one_redstone() {
        let one = with(&[(0, REDSTONE), (1, Tile::Casing)]);
        let two = with(&[(0, REDSTONE), (2, REDSTONE), (1, Tile::Casing)]);
        assert!(rule_satisfied(Rule::Helium, &one, false));
        assert!(!rule_satisfied(Rule::Helium, &two, false));
        assert!(!rule_satisfied(Rule::Helium, &with(&[(0, REDSTONE)]), false));
    }

    #[test]
    fn test_enderium_needs_three_casing_on_corner() {
        let three = with(&[(0, Tile::Casing), (2, Tile::Casing), (4, Tile::Casing)]);
        let four = with(&[(0, Tile::Casing), (1, Tile::Casing), (2, Tile::Casing), (4, Tile::Casing)]);
        assert!(rule_satisfied(Rule::Enderium, &three, true));
        assert!(!rule_satisfied(Rule::Enderium, &three, false));
        assert!(!rule_satisfied(Rule::Enderium, &four, true));
    }

    #[test]
    fn test_tin_needs_lapis_on_one_axis() {
        assert!(rule_satisfied(Rule::Tin, &with(&[(2, LAPIS), (3, LAPIS)]), false));
        assert!(!rule_satisfied(Rule::Tin, &with(&[(0, LAPIS), (3, LAPIS)]), false));
        assert!(!rule_satisfied(Rule::Tin, &with(&[(1, LAPIS), (2, LAPIS)]), false));
    }

    #[test]
    fn test_quartz_needs_moderator() {
        assert!(rule_satisfied(Rule::Quartz, &with(&[(2, Tile::Moderator)]), false));
        assert!(!rule_satisfied(Rule::Quartz, &with(&[(2, Tile::Cell)]), false));
    }

    #[test]
    fn test_emerald_needs_moderator_and_cell() {
        assert!(!rule_satisfied(Rule::Emerald, &with(&[(0, Tile::Moderator)]), false));
        assert!(!rule_satisfied(Rule::Emerald, &with(&[(1, Tile::Cell)]), false));
        assert!(rule_satisfied(Rule::Emerald, &with(&[(0, Tile::Moderator), (1, Tile::Cell)]), false));
    }

    #[test]
    fn test_chained_rules() {
        assert!(rule_satisfied(Rule::Iron, &with(&[(5, GOLD)]), false));
        assert!(rule_satisfied(Rule::Copper, &with(&[(5, GLOWSTONE)]), false));
        assert!(rule_satisfied(Rule::Diamond, &with(&[(0, WATER), (1, QUARTZ)]), false));
        assert!(!rule_satisfied(Rule::Diamond, &with(&[(0, WATER)]), false));
    }

    #[test]
    fn test_casing_rules() {
        let lapis_ok = with(&[(0, Tile::Cell), (1, Tile::Casing)]);
        assert!(rule_satisfied(Rule::Lapis, &lapis_ok, false));
        assert!(!rule_satisfied(Rule::Lapis, &with(&[(0, Tile::Cell)]), false));

        let magnesium_ok = with(&[(0, Tile::Moderator), (1, Tile::Casing)]);
        assert!(rule_satisfied(Rule::Magnesium, &magnesium_ok, false));
        assert!(!rule_satisfied(Rule::Magnesium, &with(&[(1, Tile::Casing)]), false));
    }

    #[test]
    fn test_placement_valid_sees_grid_edge_as_casing() {
        // 1x1x2: the tile at z=0 touches the cell at z=1 and casing on every other side
        let mut grid = Grid::filled((1, 1, 2), Tile::Cell);
        grid.set([0, 0, 0], LAPIS);
        assert!(placement_valid(&grid, [0, 0, 0], Rule::Lapis));
        assert!(placement_valid(&grid, [0, 0, 0], Rule::Redstone));
        assert!(!placement_valid(&grid, [0, 0, 0], Rule::Quartz));
    }
}
