//! One-sided overlap separation
//!
//! Only the unit on whose behalf separation runs is moved; the others are
//! untouched during that call. There is no iterative relaxation: every
//! unit runs its own separation against the same set every tick, and that
//! per-tick repetition is what untangles multi-unit clusters over time.
//! Do not replace this with a symmetric or iterative solver - it changes
//! how clumps of units feel.

use crate::battle::constants::COLLISION_RADIUS;
use crate::battle::units::Roster;
use crate::core::types::Vec2;

/// Push `pos` away from every overlapping neighbor by half the overlap.
///
/// Coincident points produce a zero push (normalize of the zero vector is
/// zero), leaving the position unchanged.
pub fn separated_position(pos: Vec2, others: &[Vec2]) -> Vec2 {
    let mut pos = pos;
    for other in others {
        let distance = pos.distance(other);
        if distance < COLLISION_RADIUS {
            let push = (pos - *other).normalize() * ((COLLISION_RADIUS - distance) * 0.5);
            pos += push;
        }
    }
    pos
}

/// Run separation for every unit of a team against its own teammates.
///
/// Each unit sees the live positions of the others, so teammates already
/// repacked this pass are seen at their new positions.
pub fn repack_team(roster: &mut Roster) {
    for i in 0..roster.len() {
        let others = roster.positions_excluding(i);
        let unit = roster.unit_at_mut(i);
        unit.position = separated_position(unit.position, &others);
    }
}
