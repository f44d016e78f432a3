//! Battle system constants - all tunable values in one place

use crate::core::types::Tick;

// Movement (distance units per tick)
pub const INFANTRY_SPEED: f32 = 1.0;
pub const CAVALRY_SPEED: f32 = 2.25;
pub const ARTILLERY_SPEED: f32 = 1.5;

// Melee
pub const ATTACK_RANGE: f32 = 15.0;

// Collision separation
pub const COLLISION_RADIUS: f32 = 20.0;

// Projectiles
pub const PROJECTILE_STEP: f32 = 16.0;
pub const PROJECTILE_HIT_RADIUS: f32 = 10.0;
/// Shots overfly their aim point by 20% before falling spent
pub const PROJECTILE_RANGE_FACTOR: f32 = 1.2;
pub const FIRE_DEVIATION_DEGREES: f32 = 5.0;
/// Artillery reload time; 5 seconds at the nominal 60 ticks/s frame rate
pub const RELOAD_TICKS: Tick = 300;

// Melee outcome rolls
pub const CAVALRY_WIN_CHANCE: f64 = 0.3;
pub const INFANTRY_WIN_CHANCE: f64 = 0.7;

// Placement
pub const MIN_PLACEMENT_SPACING: f32 = 20.0;
