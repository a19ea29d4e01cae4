//! Property tests for the evaluation pass
//!
//! Random small grids over the full tile alphabet check that evaluation is a
//! pure function of its inputs and agrees with itself across entry points.

use fission_evaluator_lib::{check, evaluate, evaluate_many, Evaluation, Grid, Settings, Tile};
use ndarray::Array3;
use proptest::prelude::*;

/// Random grid up to 4x4x4 drawn from the given tile codes
fn grid_from(codes: &'static [u8]) -> impl Strategy<Value = Grid> {
    (1usize..=4, 1usize..=4, 1usize..=4).prop_flat_map(move |(sx, sy, sz)| {
        prop::collection::vec(prop::sample::select(codes), sx * sy * sz).prop_map(move |flat| {
            let codes = Array3::from_shape_vec((sx, sy, sz), flat).unwrap();
            Grid::from_codes(codes.view()).unwrap()
        })
    })
}

const ALL_CODES: &[u8] = &[
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 28, 29, 30, 31, 32, 33,
];

/// Air, cell, moderator and casing only
const FUEL_CODES: &[u8] = &[30, 31, 32, 33];

/// Air and casing only
const EMPTY_CODES: &[u8] = &[30, 33];

proptest! {
    #[test]
    fn prop_evaluation_is_idempotent(grid in grid_from(ALL_CODES)) {
        let settings = Settings::default();
        let first = evaluate(&settings, &grid);
        let second = evaluate(&settings, &grid);
        prop_assert_eq!(first.valid, second.valid);
        prop_assert_eq!(first.power.to_bits(), second.power.to_bits());
        prop_assert_eq!(first.heat.to_bits(), second.heat.to_bits());
        prop_assert_eq!(first.cooling.to_bits(), second.cooling.to_bits());
    }

    #[test]
    fn prop_check_agrees_with_evaluate(grid in grid_from(ALL_CODES)) {
        let settings = Settings::default();
        match check(&settings, &grid) {
            Ok(evaluation) => prop_assert_eq!(evaluation, evaluate(&settings, &grid)),
            Err(_) => prop_assert_eq!(evaluate(&settings, &grid), Evaluation::invalid()),
        }
    }

    #[test]
    fn prop_batch_matches_sequential(grids in prop::collection::vec(grid_from(ALL_CODES), 0..8)) {
        let settings = Settings::default();
        let sequential: Vec<Evaluation> = grids.iter().map(|g| evaluate(&settings, g)).collect();
        prop_assert_eq!(evaluate_many(&settings, &grids), sequential);
    }

    #[test]
    fn prop_empty_grid_outputs_nothing(grid in grid_from(EMPTY_CODES)) {
        let result = evaluate(&Settings::default(), &grid);
        prop_assert!(result.valid);
        prop_assert_eq!(result.power, 0.0);
        prop_assert_eq!(result.heat, 0.0);
        prop_assert_eq!(result.cooling, 0.0);
    }

    #[test]
    fn prop_fuel_only_grid_never_cools(grid in grid_from(FUEL_CODES)) {
        let result = evaluate(&Settings::default(), &grid);
        prop_assert_eq!(result.cooling, 0.0);

        let cells = grid.indexed_tiles().filter(|&(_, t)| t == Tile::Cell).count();
        if result.valid {
            // Every cell contributes at least efficiency 1
            prop_assert!(result.power >= cells as f64);
            prop_assert!(result.heat >= result.power);
        } else {
            prop_assert!(grid.indexed_tiles().any(|(_, t)| t == Tile::Moderator));
        }
    }
}
