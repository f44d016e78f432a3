//! Teams, units, and rosters
//!
//! A roster is the ordered collection of currently-alive units for one
//! team and the sole source of truth for "who is alive": removal from the
//! roster is the only death mechanism, there is no separate alive flag.
//! Iteration order is load-bearing (target tie-breaks, projectile
//! hit-testing, and combat pair generation all follow it).

use serde::{Deserialize, Serialize};

use crate::battle::projectile::Projectile;
use crate::battle::unit_type::UnitType;
use crate::core::types::{Tick, UnitId, Vec2};

/// The two sides of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

/// A single battlefield unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub team: Team,
    pub unit_type: UnitType,

    // Position
    pub position: Vec2,
    /// Direction of last travel, radians
    pub heading: f32,

    /// Weak reference to the current chase target; re-validated against the
    /// live enemy roster before every use, never followed blindly
    pub target: Option<UnitId>,

    /// Tick of the last artillery shot; None means never fired, so a fresh
    /// piece fires at its first opportunity
    pub last_fire_tick: Option<Tick>,
    /// Live projectiles owned by this unit (artillery only)
    pub projectiles: Vec<Projectile>,
}

impl Unit {
    pub fn new(team: Team, unit_type: UnitType, position: Vec2) -> Self {
        Self {
            id: UnitId::new(),
            team,
            unit_type,
            position,
            heading: 0.0,
            target: None,
            last_fire_tick: None,
            projectiles: Vec::new(),
        }
    }
}

/// Ordered collection of currently-alive units for one team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    units: Vec<Unit>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, unit: Unit) {
        self.units.push(unit);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Unit> {
        self.units.iter()
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.iter().any(|u| u.id == id)
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn position_of(&self, id: UnitId) -> Option<Vec2> {
        self.get(id).map(|u| u.position)
    }

    /// Remove a unit, preserving the order of the rest
    pub fn remove(&mut self, id: UnitId) -> Option<Unit> {
        let idx = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(idx))
    }

    pub fn unit_at(&self, idx: usize) -> &Unit {
        &self.units[idx]
    }

    pub fn unit_at_mut(&mut self, idx: usize) -> &mut Unit {
        &mut self.units[idx]
    }

    /// Positions of every unit except the one at `idx`
    pub fn positions_excluding(&self, idx: usize) -> Vec<Vec2> {
        self.units
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != idx)
            .map(|(_, u)| u.position)
            .collect()
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }
}
