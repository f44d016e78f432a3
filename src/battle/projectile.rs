//! Projectile ballistics for artillery fire
//!
//! A projectile flies in a straight line with a small random aim
//! deviation, overflies its aim point by a fixed factor, and kills at
//! most one enemy: the first roster member found inside the hit radius.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::battle::constants::{
    FIRE_DEVIATION_DEGREES, PROJECTILE_HIT_RADIUS, PROJECTILE_RANGE_FACTOR, PROJECTILE_STEP,
};
use crate::battle::units::Roster;
use crate::core::types::{UnitId, Vec2};

/// A single shot in flight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec2,
    /// Unit vector of travel, fixed at fire time
    pub direction: Vec2,
    pub distance_traveled: f32,
    pub max_distance: f32,
}

impl Projectile {
    /// Fire from `origin` toward `target_pos` with a uniform random aim
    /// deviation in [-5, +5] degrees
    pub fn fire(origin: Vec2, target_pos: Vec2, rng: &mut ChaCha8Rng) -> Self {
        let deviation: f32 = rng.gen_range(-FIRE_DEVIATION_DEGREES..=FIRE_DEVIATION_DEGREES);
        let direction = (target_pos - origin).normalize().rotated(deviation.to_radians());
        Self {
            position: origin,
            direction,
            distance_traveled: 0.0,
            max_distance: origin.distance(&target_pos) * PROJECTILE_RANGE_FACTOR,
        }
    }

    fn advance(&mut self) {
        self.position += self.direction * PROJECTILE_STEP;
        self.distance_traveled += PROJECTILE_STEP;
    }

    fn is_spent(&self) -> bool {
        self.distance_traveled > self.max_distance
    }
}

/// Advance every projectile one step and hit-test against the enemy
/// roster.
///
/// Spent projectiles are dropped without a hit-test that tick. A hit
/// removes the first matching enemy in roster order and the projectile
/// itself; one projectile never kills more than one unit. Returns the
/// units removed, in order.
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>, enemies: &mut Roster) -> Vec<UnitId> {
    let mut victims = Vec::new();
    let mut i = 0;
    while i < projectiles.len() {
        projectiles[i].advance();

        if projectiles[i].is_spent() {
            projectiles.remove(i);
            continue;
        }

        let hit = enemies
            .iter()
            .find(|e| e.position.distance(&projectiles[i].position) < PROJECTILE_HIT_RADIUS)
            .map(|e| e.id);

        if let Some(victim) = hit {
            enemies.remove(victim);
            victims.push(victim);
            projectiles.remove(i);
            continue;
        }

        i += 1;
    }
    victims
}
