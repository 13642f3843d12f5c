//! Combat damage and dodge calculation.
//!
//! Damage is deliberately flat: a plain attack deals 1 (2 on a critical
//! hit), a special move always deals 2 and anything else deals 1. The
//! attacker and defender are passed through so stat-based formulas can be
//! added without changing call sites.

use std::str::FromStr;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::MechError;
use crate::random::chance;

/// Probability that a plain attack lands a critical hit.
pub const CRITICAL_CHANCE: f64 = 0.2;

/// Dodge probability granted per point of agility.
pub const DODGE_PER_AGILITY: f64 = 0.05;

/// An action a combatant can take on their turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    /// A plain attack that can land a critical hit.
    Attack,
    /// A special move with fixed damage.
    Special,
    /// Any other action (defend, flee, use item...).
    Other(String),
}

impl CombatAction {
    /// Parse an action name, mapping unrecognised names to [`CombatAction::Other`].
    pub fn from_name(name: &str) -> Self {
        name.parse()
            .unwrap_or_else(|_| Self::Other(name.trim().to_lowercase()))
    }
}

impl FromStr for CombatAction {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attack" => Ok(Self::Attack),
            "special" => Ok(Self::Special),
            _ => Err(MechError::UnknownAction(s.to_string())),
        }
    }
}

impl std::fmt::Display for CombatAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "attack"),
            Self::Special => write!(f, "special"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// A participant in a fight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name.
    pub name: String,
    /// Agility score, feeds [`calculate_dodge_chance`].
    pub agility: u32,
}

impl Combatant {
    /// Create a combatant with the given name and agility.
    pub fn new(name: impl Into<String>, agility: u32) -> Self {
        Self {
            name: name.into(),
            agility,
        }
    }
}

/// Damage dealt by `attacker` to `defender` with `action`.
pub fn calculate_damage(
    rng: &mut StdRng,
    _attacker: &Combatant,
    _defender: &Combatant,
    action: &CombatAction,
) -> u32 {
    match action {
        CombatAction::Attack => {
            if chance(rng, CRITICAL_CHANCE) {
                2
            } else {
                1
            }
        }
        CombatAction::Special => 2,
        CombatAction::Other(_) => 1,
    }
}

/// Probability of dodging an attack for the given agility.
///
/// Not clamped: agility above 20 yields a value above 1.
pub fn calculate_dodge_chance(agility: u32) -> f64 {
    f64::from(agility) * DODGE_PER_AGILITY
}
