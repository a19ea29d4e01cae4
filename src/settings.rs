//! Evaluation Settings
//!
//! Fuel multipliers, cooling rates and neutron tunables. Settings are plain
//! data: they can be built in code or loaded from a JSON file.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::tile::{Component, Rule};

/// NuclearCraft fission defaults
pub mod constants {
    pub const NEUTRON_REACH: usize = 4;            // Max moderators between two linked cells
    pub const MODERATOR_EXTRA_POWER: f64 = 1.0;
    pub const MODERATOR_EXTRA_HEAT: f64 = 2.0;
    pub const FUEL_BASE_POWER: f64 = 1.0;
    pub const FUEL_BASE_HEAT: f64 = 1.0;
}

/// Search order for the settings file when none is given explicitly
pub const SETTINGS_PATHS: [&str; 2] = [
    "config/fission_settings.json",
    "../config/fission_settings.json",
];

/// Cooling rate per component.
///
/// Active components use their own entry when present and fall back to the
/// passive rate of the same rule otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolingRates {
    pub passive: BTreeMap<Rule, f64>,
    pub active: BTreeMap<Rule, f64>,
}

impl Default for CoolingRates {
    fn default() -> Self {
        let passive = [
            (Rule::Water, 20.0),
            (Rule::Redstone, 80.0),
            (Rule::Quartz, 80.0),
            (Rule::Gold, 120.0),
            (Rule::Glowstone, 120.0),
            (Rule::Lapis, 100.0),
            (Rule::Diamond, 120.0),
            (Rule::Helium, 120.0),
            (Rule::Enderium, 140.0),
            (Rule::Cryotheum, 140.0),
            (Rule::Iron, 60.0),
            (Rule::Emerald, 140.0),
            (Rule::Copper, 60.0),
            (Rule::Tin, 80.0),
            (Rule::Magnesium, 100.0),
        ]
        .into_iter()
        .collect();

        Self {
            passive,
            active: BTreeMap::new(),
        }
    }
}

impl CoolingRates {
    /// Table with every rule cooling at zero
    pub fn zero() -> Self {
        Self {
            passive: Rule::ALL.iter().map(|&rule| (rule, 0.0)).collect(),
            active: BTreeMap::new(),
        }
    }

    pub fn rate(&self, component: Component) -> f64 {
        let rule = component.rule();
        let active = match component {
            Component::Active(_) => self.active.get(&rule),
            Component::Passive(_) => None,
        };
        active
            .or_else(|| self.passive.get(&rule))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Inputs to an evaluation besides the grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fuel_base_power: f64,
    pub fuel_base_heat: f64,
    pub cooling_rates: CoolingRates,
    pub neutron_reach: usize,
    pub moderator_extra_power: f64,
    pub moderator_extra_heat: f64,
    pub ensure_active_accessible: bool,  // Active coolers must reach outside through air
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fuel_base_power: constants::FUEL_BASE_POWER,
            fuel_base_heat: constants::FUEL_BASE_HEAT,
            cooling_rates: CoolingRates::default(),
            neutron_reach: constants::NEUTRON_REACH,
            moderator_extra_power: constants::MODERATOR_EXTRA_POWER,
            moderator_extra_heat: constants::MODERATOR_EXTRA_HEAT,
            ensure_active_accessible: true,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let settings = Self::from_json_str(&content)?;
        info!("Loaded fission settings from {}", path.display());
        Ok(settings)
    }

    /// Load the first settings file found in `SETTINGS_PATHS`, or defaults
    pub fn load_or_default() -> Self {
        for path in SETTINGS_PATHS {
            let path = Path::new(path);
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(settings) => return settings,
                Err(e) => warn!("Ignoring settings file {}: {}", path.display(), e),
            }
        }

        warn!("No fission settings file found, using defaults");
        Self::default()
    }
}
