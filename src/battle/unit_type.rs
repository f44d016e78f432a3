//! Unit types and their fixed properties
//!
//! Speed is derived from type and never changes; all types share the same
//! attack range and collision radius (see `constants`).

use serde::{Deserialize, Serialize};

use crate::battle::constants::{ARTILLERY_SPEED, CAVALRY_SPEED, INFANTRY_SPEED};

/// Type of battlefield unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Infantry,  // Standard foot soldiers, beats cavalry more often than not
    Cavalry,   // Fast, favored over nothing, crushed by artillery fire zones
    Artillery, // Stationary, fires projectiles, helpless against infantry
}

impl UnitType {
    /// Movement speed in distance units per tick
    pub fn speed(&self) -> f32 {
        match self {
            UnitType::Infantry => INFANTRY_SPEED,
            UnitType::Cavalry => CAVALRY_SPEED,
            UnitType::Artillery => ARTILLERY_SPEED,
        }
    }

    /// Is this a ranged unit?
    pub fn is_ranged(&self) -> bool {
        matches!(self, UnitType::Artillery)
    }
}
