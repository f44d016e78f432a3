//! Battle state and tick driver
//!
//! The state machine gates everything: units are created only during
//! Placement, the per-tick systems run only during Battle, and Resolved
//! is terminal until an explicit reset. Illegal transition triggers are
//! no-ops, never errors.
//!
//! Tick order is a hard barrier: every unit's agent update runs, then the
//! single global combat pass, then per-team re-separation, then the
//! victory check. Mutations earlier in a pass are visible to later steps
//! of the same pass by design.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::battle::collision::repack_team;
use crate::battle::combat::resolve_combat_pass;
use crate::battle::constants::MIN_PLACEMENT_SPACING;
use crate::battle::events::{BattleEvent, BattleEventKind, BattleEventLog};
use crate::battle::movement::update_team;
use crate::battle::unit_type::UnitType;
use crate::battle::units::{Roster, Team, Unit};
use crate::core::error::{Result, SimError};
use crate::core::types::{Tick, UnitId, Vec2};

/// Match-level phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Placement, // Unit creation permitted, no systems run
    Battle,   // Systems run, no creation
    Resolved, // Terminal, holds the winner
}

/// Outcome of a resolved battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Red,
    Blue,
    Draw,
}

/// Complete simulation state: the two rosters, the phase machine, and the
/// RNG behind every random draw.
///
/// Carried as an explicit value rather than ambient globals so tests can
/// run independent instances side by side; a fixed seed reproduces a run
/// tick for tick.
#[derive(Debug, Clone)]
pub struct BattleState {
    pub red: Roster,
    pub blue: Roster,

    pub phase: Phase,
    pub winner: Option<Winner>,
    pub tick: Tick,

    /// Full event history since the last reset
    pub battle_log: Vec<BattleEvent>,

    rng: ChaCha8Rng,
}

impl BattleState {
    pub fn new(seed: u64) -> Self {
        Self {
            red: Roster::new(),
            blue: Roster::new(),
            phase: Phase::default(),
            winner: None,
            tick: 0,
            battle_log: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn roster(&self, team: Team) -> &Roster {
        match team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, Phase::Resolved)
    }

    /// Create a unit during the placement phase.
    ///
    /// Rejects requests outside Placement and requests closer than the
    /// minimum spacing to an existing unit of the same team; a rejected
    /// request mutates nothing. Screening placements against UI exclusion
    /// zones is the caller's job.
    pub fn place_unit(&mut self, team: Team, unit_type: UnitType, position: Vec2) -> Result<UnitId> {
        if self.phase != Phase::Placement {
            return Err(SimError::NotInPlacementPhase);
        }

        let roster = match team {
            Team::Red => &mut self.red,
            Team::Blue => &mut self.blue,
        };
        if roster
            .iter()
            .any(|u| u.position.distance(&position) < MIN_PLACEMENT_SPACING)
        {
            return Err(SimError::PlacementTooClose {
                x: position.x,
                y: position.y,
                spacing: MIN_PLACEMENT_SPACING,
            });
        }

        let unit = Unit::new(team, unit_type, position);
        let id = unit.id;
        roster.push(unit);
        Ok(id)
    }

    /// Placement -> Battle. Legal only with both rosters non-empty;
    /// otherwise a no-op.
    pub fn start_battle(&mut self) {
        if self.phase == Phase::Placement && !self.red.is_empty() && !self.blue.is_empty() {
            self.phase = Phase::Battle;
            self.log_event(BattleEventKind::BattleStarted, "battle begins".to_string());
            tracing::info!(
                red = self.red.len(),
                blue = self.blue.len(),
                "battle started"
            );
        }
    }

    /// Resolved -> Placement. Clears rosters, winner, tick, and log;
    /// a no-op from any other phase.
    pub fn reset(&mut self) {
        if self.phase == Phase::Resolved {
            self.red.clear();
            self.blue.clear();
            self.winner = None;
            self.tick = 0;
            self.battle_log.clear();
            self.phase = Phase::Placement;
        }
    }

    /// Advance the battle by one tick. A no-op outside the Battle phase.
    ///
    /// Returns the events emitted this tick; they are also appended to
    /// the persistent battle log.
    pub fn run_tick(&mut self) -> BattleEventLog {
        let mut events = BattleEventLog::new();
        if self.phase != Phase::Battle {
            return events;
        }

        self.tick += 1;

        // Agent updates, red first: movement, collision vs allies,
        // artillery fire and projectile hit-testing
        update_team(&mut self.red, &mut self.blue, self.tick, &mut self.rng, &mut events);
        update_team(&mut self.blue, &mut self.red, self.tick, &mut self.rng, &mut events);

        // One global melee pass, then post-combat repacking per team
        let resolved =
            resolve_combat_pass(&mut self.red, &mut self.blue, self.tick, &mut self.rng, &mut events);
        repack_team(&mut self.red);
        repack_team(&mut self.blue);

        if resolved > 0 {
            tracing::debug!(tick = self.tick, resolved, "melee pairs resolved");
        }

        if let Some(winner) = check_victory(&self.red, &self.blue) {
            self.phase = Phase::Resolved;
            self.winner = Some(winner);
            events.push(
                BattleEventKind::BattleEnded { winner },
                format!("battle ended: {:?}", winner),
                self.tick,
            );
            tracing::info!(tick = self.tick, ?winner, "battle resolved");
        }

        self.battle_log.extend(events.events.iter().cloned());
        events
    }

    fn log_event(&mut self, kind: BattleEventKind, description: String) {
        self.battle_log.push(BattleEvent {
            tick: self.tick,
            kind,
            description,
        });
    }
}

/// Victory check, run after the combat and re-separation steps
pub fn check_victory(red: &Roster, blue: &Roster) -> Option<Winner> {
    match (red.is_empty(), blue.is_empty()) {
        (true, true) => Some(Winner::Draw),
        (true, false) => Some(Winner::Blue),
        (false, true) => Some(Winner::Red),
        (false, false) => None,
    }
}
