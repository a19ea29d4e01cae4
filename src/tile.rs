//! Reactor Tile Classification
//!
//! Every grid cell holds one `Tile`. Component tiles come in a passive and an
//! active flavour of the same placement rule; the numeric codes used by layout
//! files keep the active code at `rule + ACTIVE_OFFSET`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FissionError;

/// Tile code constants shared with layout files
pub mod codes {
    pub const ACTIVE_OFFSET: u8 = 15;
    pub const AIR: u8 = 30;
    pub const CELL: u8 = 31;
    pub const MODERATOR: u8 = 32;
    pub const CASING: u8 = 33;
}

/// Number of distinct component rules
pub const RULE_COUNT: usize = 15;

/// Placement rule of a cooler component.
///
/// The discriminant is the passive tile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Rule {
    Water = 0,
    Redstone,
    Quartz,
    Gold,
    Glowstone,
    Lapis,
    Diamond,
    Helium,
    Enderium,
    Cryotheum,
    Iron,
    Emerald,
    Copper,
    Tin,
    Magnesium,
}

impl Rule {
    pub const ALL: [Rule; RULE_COUNT] = [
        Rule::Water,
        Rule::Redstone,
        Rule::Quartz,
        Rule::Gold,
        Rule::Glowstone,
        Rule::Lapis,
        Rule::Diamond,
        Rule::Helium,
        Rule::Enderium,
        Rule::Cryotheum,
        Rule::Iron,
        Rule::Emerald,
        Rule::Copper,
        Rule::Tin,
        Rule::Magnesium,
    ];

    pub fn from_index(index: usize) -> Option<Rule> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Water => "water",
            Rule::Redstone => "redstone",
            Rule::Quartz => "quartz",
            Rule::Gold => "gold",
            Rule::Glowstone => "glowstone",
            Rule::Lapis => "lapis",
            Rule::Diamond => "diamond",
            Rule::Helium => "helium",
            Rule::Enderium => "enderium",
            Rule::Cryotheum => "cryotheum",
            Rule::Iron => "iron",
            Rule::Emerald => "emerald",
            Rule::Copper => "copper",
            Rule::Tin => "tin",
            Rule::Magnesium => "magnesium",
        }
    }
}

/// A cooler component: the rule plus whether it needs open access to outside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Passive(Rule),
    Active(Rule),  // Same rule, but must reach the grid boundary through air
}

impl Component {
    pub fn rule(self) -> Rule {
        match self {
            Component::Passive(rule) | Component::Active(rule) => rule,
        }
    }
}

/// Contents of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Component(Component),
    Air,
    Cell,       // Fuel cell
    Moderator,
    Casing,     // Also the value of every out-of-bounds coordinate
}

impl Tile {
    pub const fn passive(rule: Rule) -> Tile {
        Tile::Component(Component::Passive(rule))
    }

    pub const fn active(rule: Rule) -> Tile {
        Tile::Component(Component::Active(rule))
    }

    /// Numeric tile code as stored in layout files
    pub fn code(self) -> u8 {
        match self {
            Tile::Component(Component::Passive(rule)) => rule as u8,
            Tile::Component(Component::Active(rule)) => rule as u8 + codes::ACTIVE_OFFSET,
            Tile::Air => codes::AIR,
            Tile::Cell => codes::CELL,
            Tile::Moderator => codes::MODERATOR,
            Tile::Casing => codes::CASING,
        }
    }

    pub fn from_code(code: u8) -> Option<Tile> {
        match code {
            codes::AIR => Some(Tile::Air),
            codes::CELL => Some(Tile::Cell),
            codes::MODERATOR => Some(Tile::Moderator),
            codes::CASING => Some(Tile::Casing),
            c if c < codes::ACTIVE_OFFSET => Rule::from_index(c as usize).map(Tile::passive),
            c => Rule::from_index((c - codes::ACTIVE_OFFSET) as usize).map(Tile::active),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Component(Component::Passive(rule)) => f.write_str(rule.name()),
            Tile::Component(Component::Active(rule)) => write!(f, "active_{}", rule.name()),
            Tile::Air => f.write_str("air"),
            Tile::Cell => f.write_str("cell"),
            Tile::Moderator => f.write_str("moderator"),
            Tile::Casing => f.write_str("casing"),
        }
    }
}

impl FromStr for Tile {
    type Err = FissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "air" => return Ok(Tile::Air),
            "cell" => return Ok(Tile::Cell),
            "moderator" => return Ok(Tile::Moderator),
            "casing" => return Ok(Tile::Casing),
            _ => {}
        }

        let (base, active) = match name.strip_prefix("active_") {
            Some(base) => (base, true),
            None => (name.as_str(), false),
        };
        let rule = Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.name() == base)
            .ok_or_else(|| FissionError::UnknownTileName(s.to_string()))?;

        Ok(if active { Tile::active(rule) } else { Tile::passive(rule) })
    }
}
