//! Battle simulation core - autonomous unit behavior and combat resolution
//!
//! Placement, then battle, then a winner: units are laid down by hand,
//! and from the start trigger onward the simulation is fully autonomous.
//! Per tick: every unit updates (collision vs allies, then movement or
//! artillery fire), one global melee pass resolves contact pairs, each
//! team repacks, and the victory check runs.

pub mod collision;
pub mod combat;
pub mod constants;
pub mod events;
pub mod movement;
pub mod projectile;
pub mod state;
pub mod unit_type;
pub mod units;
pub mod view;

// Re-exports for convenient access
pub use collision::{repack_team, separated_position};
pub use combat::{find_contact_pairs, resolve_combat_pass};
pub use constants::*;
pub use events::{BattleEvent, BattleEventKind, BattleEventLog, MeleeKind};
pub use movement::{find_target, update_team};
pub use projectile::{advance_projectiles, Projectile};
pub use state::{check_victory, BattleState, Phase, Winner};
pub use unit_type::UnitType;
pub use units::{Roster, Team, Unit};
pub use view::{BattleView, ProjectileView, UnitView};
