//! Discrete battle events
//!
//! Events are the audio/effects boundary: the core emits them each tick
//! and external collaborators may map them to sounds or ignore them
//! entirely. They also feed the persistent battle log.

use serde::{Deserialize, Serialize};

use crate::battle::state::Winner;
use crate::core::types::{Tick, UnitId};

/// What a melee resolution sounded like, for the effects layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeleeKind {
    /// Infantry or cavalry clashing with each other
    Swords,
    /// A gun crew caught in melee
    Overrun,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattleEventKind {
    BattleStarted,
    ShotFired { shooter: UnitId },
    ProjectileHit { victim: UnitId },
    MeleeResolved { winner: UnitId, loser: UnitId, kind: MeleeKind },
    BattleEnded { winner: Winner },
}

/// Log entry for battle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleEvent {
    pub tick: Tick,
    pub kind: BattleEventKind,
    pub description: String,
}

/// Events emitted during a single tick
#[derive(Debug, Clone, Default)]
pub struct BattleEventLog {
    pub events: Vec<BattleEvent>,
}

impl BattleEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: BattleEventKind, description: String, tick: Tick) {
        self.events.push(BattleEvent {
            tick,
            kind,
            description,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Count events matching a predicate on the kind
    pub fn count_where(&self, pred: impl Fn(&BattleEventKind) -> bool) -> usize {
        self.events.iter().filter(|e| pred(&e.kind)).count()
    }
}
