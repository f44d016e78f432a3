//! Per-unit behavior: target acquisition, movement, artillery fire
//!
//! Each unit separates from its allies first, then either closes on its
//! target (infantry, cavalry) or holds ground and works its gun
//! (artillery). Melee itself is resolved centrally by the combat pass,
//! never here.

use rand_chacha::ChaCha8Rng;

use crate::battle::collision::separated_position;
use crate::battle::constants::{ATTACK_RANGE, RELOAD_TICKS};
use crate::battle::events::{BattleEventKind, BattleEventLog};
use crate::battle::projectile::{advance_projectiles, Projectile};
use crate::battle::units::Roster;
use crate::core::types::{Tick, UnitId, Vec2};

/// Nearest enemy by Euclidean distance.
///
/// Strict less-than comparison: the first-encountered minimum in roster
/// iteration order wins ties.
pub fn find_target(position: Vec2, enemies: &Roster) -> Option<UnitId> {
    let mut closest = None;
    let mut min_dist = f32::INFINITY;
    for enemy in enemies.iter() {
        let dist = position.distance(&enemy.position);
        if dist < min_dist {
            min_dist = dist;
            closest = Some(enemy.id);
        }
    }
    closest
}

/// Run the per-tick agent update for every unit of one team, in roster
/// order.
///
/// Projectile hits remove enemies immediately, so later units in the same
/// pass already see the reduced enemy roster.
pub fn update_team(
    attackers: &mut Roster,
    defenders: &mut Roster,
    tick: Tick,
    rng: &mut ChaCha8Rng,
    events: &mut BattleEventLog,
) {
    for i in 0..attackers.len() {
        // Live ally positions: allies updated earlier this tick have moved
        let allies = attackers.positions_excluding(i);
        let unit = attackers.unit_at_mut(i);
        unit.position = separated_position(unit.position, &allies);

        if unit.unit_type.is_ranged() {
            let reloaded = unit
                .last_fire_tick
                .map_or(true, |last| tick - last > RELOAD_TICKS);
            if reloaded {
                if let Some(target_id) = find_target(unit.position, defenders) {
                    if let Some(target_pos) = defenders.position_of(target_id) {
                        unit.projectiles
                            .push(Projectile::fire(unit.position, target_pos, rng));
                        unit.last_fire_tick = Some(tick);
                        events.push(
                            BattleEventKind::ShotFired { shooter: unit.id },
                            "artillery fires".to_string(),
                            tick,
                        );
                    }
                }
            }

            // Advance shots in flight every tick, whether or not we fired
            for victim in advance_projectiles(&mut unit.projectiles, defenders) {
                events.push(
                    BattleEventKind::ProjectileHit { victim },
                    "projectile strikes home".to_string(),
                    tick,
                );
            }
            continue;
        }

        // Melee types: re-acquire if the target is unset or no longer alive
        if unit.target.map_or(true, |id| !defenders.contains(id)) {
            unit.target = find_target(unit.position, defenders);
        }

        if let Some(target_id) = unit.target {
            if let Some(target_pos) = defenders.position_of(target_id) {
                let offset = target_pos - unit.position;
                if offset.length() > ATTACK_RANGE {
                    let direction = offset.normalize();
                    unit.position += direction * unit.unit_type.speed();
                    unit.heading = direction.angle();
                }
                // Within range: hold position, the combat pass decides
            }
        }
    }
}
