//! Reactor Evaluation
//!
//! One full pass over a grid: build the efficiency field, score every
//! moderator, validate every cooler, then apply the fuel multipliers.
//! The first invalid tile in x-major scan order ends the pass.

use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{Grid, Position};
use crate::neutron::{score_moderator, EfficiencyField};
use crate::reachability::is_reachable;
use crate::rules::placement_valid;
use crate::settings::Settings;
use crate::tile::{Component, Rule, Tile};

/// Result of evaluating one reactor layout.
///
/// When `valid` is false every other field is zero and carries no meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub valid: bool,
    pub power: f64,
    pub heat: f64,
    pub cooling: f64,
}

impl Evaluation {
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Heat left over after cooling; positive means the reactor overheats
    pub fn net_heat(&self) -> f64 {
        self.heat - self.cooling
    }

    /// Fraction of the time the reactor can run without overheating
    pub fn duty_cycle(&self) -> f64 {
        if self.heat <= 0.0 {
            1.0
        } else {
            (self.cooling / self.heat).min(1.0)
        }
    }

    /// Power averaged over the duty cycle
    pub fn effective_power(&self) -> f64 {
        self.power * self.duty_cycle()
    }
}

/// Why a layout is not a legal reactor
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalidity {
    #[error("moderator at {at:?} touches no fuel efficiency")]
    IsolatedModerator { at: Position },

    #[error("active {} cooler at {at:?} has no open path outside", .rule.name())]
    InaccessibleActive { at: Position, rule: Rule },

    #[error("{} cooler at {at:?} breaks its placement rule", .component.rule().name())]
    PlacementRule { at: Position, component: Component },
}

/// Evaluate `grid`, reporting the first reason it is invalid
pub fn check(settings: &Settings, grid: &Grid) -> Result<Evaluation, Invalidity> {
    let field = EfficiencyField::build(grid, settings.neutron_reach);
    let mut power = field.power;
    let mut heat = field.heat;
    let mut cooling = 0.0;

    for (pos, tile) in grid.indexed_tiles() {
        match tile {
            Tile::Moderator => {
                let score = score_moderator(
                    &field,
                    pos,
                    settings.moderator_extra_power,
                    settings.moderator_extra_heat,
                )
                .ok_or(Invalidity::IsolatedModerator { at: pos })?;
                power += score.power;
                heat += score.heat;
            }
            Tile::Component(component) => {
                cooling += cooler_rate(settings, grid, pos, component)?;
            }
            Tile::Air | Tile::Cell | Tile::Casing => {}
        }
    }

    Ok(Evaluation {
        valid: true,
        power: power * settings.fuel_base_power,
        heat: heat * settings.fuel_base_heat,
        cooling,
    })
}

/// Validate one cooler and return its cooling rate
fn cooler_rate(
    settings: &Settings,
    grid: &Grid,
    pos: Position,
    component: Component,
) -> Result<f64, Invalidity> {
    let rule = component.rule();
    if let Component::Active(_) = component {
        if settings.ensure_active_accessible
            && !is_reachable(grid, pos, Tile::Component(component))
        {
            return Err(Invalidity::InaccessibleActive { at: pos, rule });
        }
    }

    if !placement_valid(grid, pos, rule) {
        return Err(Invalidity::PlacementRule { at: pos, component });
    }

    Ok(settings.cooling_rates.rate(component))
}

/// Evaluate `grid`; an invalid layout yields `Evaluation::invalid()`
pub fn evaluate(settings: &Settings, grid: &Grid) -> Evaluation {
    match check(settings, grid) {
        Ok(evaluation) => {
            debug!(
                "Valid reactor {:?}: power {:.3}, heat {:.3}, cooling {:.3}",
                grid.dims(),
                evaluation.power,
                evaluation.heat,
                evaluation.cooling
            );
            evaluation
        }
        Err(reason) => {
            trace!("Invalid reactor {:?}: {}", grid.dims(), reason);
            Evaluation::invalid()
        }
    }
}

/// Evaluate independent grids in parallel, keeping input order
pub fn evaluate_many(settings: &Settings, grids: &[Grid]) -> Vec<Evaluation> {
    grids.par_iter().map(|grid| evaluate(settings, grid)).collect()
}
