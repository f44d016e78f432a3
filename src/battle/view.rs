//! Read-only render snapshots
//!
//! The rendering collaborator gets a flat, serializable copy of what it
//! needs each tick and nothing else; it never touches live state.

use serde::{Deserialize, Serialize};

use crate::battle::state::{BattleState, Phase, Winner};
use crate::battle::unit_type::UnitType;
use crate::battle::units::Team;
use crate::core::types::Vec2;

/// One live unit as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    pub team: Team,
    pub unit_type: UnitType,
    pub position: Vec2,
    pub heading: f32,
}

/// One live projectile as the renderer sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Vec2,
}

/// Snapshot of everything drawable plus the match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleView {
    pub units: Vec<UnitView>,
    pub projectiles: Vec<ProjectileView>,
    pub phase: Phase,
    pub winner: Option<Winner>,
}

impl From<&BattleState> for BattleView {
    fn from(state: &BattleState) -> Self {
        let units = state
            .red
            .iter()
            .chain(state.blue.iter())
            .map(|u| UnitView {
                team: u.team,
                unit_type: u.unit_type,
                position: u.position,
                heading: u.heading,
            })
            .collect();

        let projectiles = state
            .red
            .iter()
            .chain(state.blue.iter())
            .flat_map(|u| u.projectiles.iter())
            .map(|p| ProjectileView { position: p.position })
            .collect();

        Self {
            units,
            projectiles,
            phase: state.phase,
            winner: state.winner,
        }
    }
}

impl BattleState {
    /// Capture a render snapshot of the current state
    pub fn view(&self) -> BattleView {
        BattleView::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_lists_all_units() {
        let mut state = BattleState::new(1);
        state
            .place_unit(Team::Red, UnitType::Infantry, Vec2::new(0.0, 0.0))
            .unwrap();
        state
            .place_unit(Team::Blue, UnitType::Artillery, Vec2::new(300.0, 0.0))
            .unwrap();

        let view = state.view();

        assert_eq!(view.units.len(), 2);
        assert_eq!(view.phase, Phase::Placement);
        assert!(view.winner.is_none());
        assert!(view.projectiles.is_empty());
    }

    #[test]
    fn test_view_includes_projectiles_in_flight() {
        let mut state = BattleState::new(1);
        state
            .place_unit(Team::Red, UnitType::Artillery, Vec2::new(0.0, 0.0))
            .unwrap();
        state
            .place_unit(Team::Blue, UnitType::Infantry, Vec2::new(600.0, 0.0))
            .unwrap();
        state.start_battle();
        state.run_tick();

        // The gun fires at its first opportunity; the shot is far from the
        // distant target and still in flight
        assert_eq!(state.view().projectiles.len(), 1);
    }

    #[test]
    fn test_view_serializes() {
        let state = BattleState::new(1);
        let json = serde_json::to_string(&state.view()).unwrap();
        assert!(json.contains("Placement"));
    }
}
