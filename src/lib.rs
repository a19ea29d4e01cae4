//! Fission Reactor Evaluator Library
//!
//! Judges whether a 3D block layout is a legal NuclearCraft-style fission
//! reactor and computes its power, heat and cooling.

pub mod error;
pub mod tile;
pub mod grid;
pub mod neutron;
pub mod reachability;
pub mod rules;
pub mod settings;
pub mod evaluator;
pub mod layout;

pub use error::{FissionError, Result};
pub use evaluator::{check, evaluate, evaluate_many, Evaluation, Invalidity};
pub use grid::{Direction, Grid, Position};
pub use settings::{CoolingRates, Settings};
pub use tile::{Component, Rule, Tile};
