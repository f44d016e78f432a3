//! Global melee resolution
//!
//! Once per tick, after every unit has updated: collect all cross-team
//! contact pairs, then resolve them in generation order against the
//! type-advantage table. Exactly one member of each resolved pair dies.
//!
//! The pair convention is canonical: `a` is always the red member, `b`
//! the blue member, and the outcome table below is applied literally.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::battle::constants::{ATTACK_RANGE, CAVALRY_WIN_CHANCE, INFANTRY_WIN_CHANCE};
use crate::battle::events::{BattleEventKind, BattleEventLog, MeleeKind};
use crate::battle::unit_type::UnitType;
use crate::battle::units::Roster;
use crate::core::types::{Tick, UnitId};

/// Every (red, blue) combination within attack range, in nested roster
/// iteration order (red outer, blue inner), from membership at the moment
/// the pass begins
pub fn find_contact_pairs(red: &Roster, blue: &Roster) -> Vec<(UnitId, UnitId)> {
    let mut pairs = Vec::new();
    for a in red.iter() {
        for b in blue.iter() {
            if a.position.distance(&b.position) < ATTACK_RANGE {
                pairs.push((a.id, b.id));
            }
        }
    }
    pairs
}

/// Does red win the pair (a = red member, b = blue member)?
///
/// Type-advantage cases are deterministic and checked before any dice:
/// infantry always beats artillery, artillery always beats cavalry. The
/// cavalry/infantry matchup and mirror matchups roll.
fn red_wins(a: UnitType, b: UnitType, rng: &mut ChaCha8Rng) -> bool {
    match (a, b) {
        (UnitType::Infantry, UnitType::Artillery) => true,
        (UnitType::Artillery, UnitType::Infantry) => false,
        (UnitType::Cavalry, UnitType::Artillery) => false,
        (UnitType::Artillery, UnitType::Cavalry) => true,
        (UnitType::Cavalry, UnitType::Infantry) => rng.gen_bool(CAVALRY_WIN_CHANCE),
        (UnitType::Infantry, UnitType::Cavalry) => rng.gen_bool(INFANTRY_WIN_CHANCE),
        // Same type vs same type
        _ => rng.gen_bool(0.5),
    }
}

/// Resolve one combat pass. Returns the number of resolved (non-skipped)
/// pairs, which equals the number of units removed.
pub fn resolve_combat_pass(
    red: &mut Roster,
    blue: &mut Roster,
    tick: Tick,
    rng: &mut ChaCha8Rng,
    events: &mut BattleEventLog,
) -> usize {
    let pairs = find_contact_pairs(red, blue);
    let mut resolved = 0;

    for (a_id, b_id) in pairs {
        // Skip pairs whose member already fell to an earlier pair this pass
        let (Some(a), Some(b)) = (red.get(a_id), blue.get(b_id)) else {
            continue;
        };
        let (a_type, b_type) = (a.unit_type, b.unit_type);

        let kind = if a_type == UnitType::Artillery || b_type == UnitType::Artillery {
            MeleeKind::Overrun
        } else {
            MeleeKind::Swords
        };

        let (winner, loser) = if red_wins(a_type, b_type, rng) {
            blue.remove(b_id);
            (a_id, b_id)
        } else {
            red.remove(a_id);
            (b_id, a_id)
        };
        resolved += 1;

        events.push(
            BattleEventKind::MeleeResolved { winner, loser, kind },
            format!("{:?} falls to {:?} in melee", loser, winner),
            tick,
        );
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::units::{Team, Unit};
    use crate::core::types::Vec2;
    use rand::SeedableRng;

    fn pair_rosters(a: UnitType, b: UnitType) -> (Roster, Roster, UnitId, UnitId) {
        let mut red = Roster::new();
        let mut blue = Roster::new();
        let ru = Unit::new(Team::Red, a, Vec2::new(0.0, 0.0));
        let bu = Unit::new(Team::Blue, b, Vec2::new(10.0, 0.0));
        let (r_id, b_id) = (ru.id, bu.id);
        red.push(ru);
        blue.push(bu);
        (red, blue, r_id, b_id)
    }

    #[test]
    fn test_out_of_range_units_form_no_pairs() {
        let mut red = Roster::new();
        let mut blue = Roster::new();
        red.push(Unit::new(Team::Red, UnitType::Infantry, Vec2::new(0.0, 0.0)));
        blue.push(Unit::new(Team::Blue, UnitType::Infantry, Vec2::new(15.0, 0.0)));

        // Exactly at range: strict less-than, no contact
        assert!(find_contact_pairs(&red, &blue).is_empty());

        blue.unit_at_mut(0).position = Vec2::new(14.9, 0.0);
        assert_eq!(find_contact_pairs(&red, &blue).len(), 1);
    }

    #[test]
    fn test_pair_generation_order_red_outer_blue_inner() {
        let mut red = Roster::new();
        let mut blue = Roster::new();
        for x in [0.0, 5.0] {
            red.push(Unit::new(Team::Red, UnitType::Infantry, Vec2::new(x, 0.0)));
            blue.push(Unit::new(Team::Blue, UnitType::Infantry, Vec2::new(x, 5.0)));
        }

        let pairs = find_contact_pairs(&red, &blue);
        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].0, red.unit_at(0).id);
        assert_eq!(pairs[1].0, red.unit_at(0).id);
        assert_eq!(pairs[2].0, red.unit_at(1).id);
        assert_eq!(pairs[0].1, blue.unit_at(0).id);
        assert_eq!(pairs[1].1, blue.unit_at(1).id);
    }

    #[test]
    fn test_infantry_always_beats_artillery() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (mut red, mut blue, r_id, _) = pair_rosters(UnitType::Infantry, UnitType::Artillery);
            let mut events = BattleEventLog::new();

            let resolved = resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);

            assert_eq!(resolved, 1);
            assert!(red.contains(r_id));
            assert!(blue.is_empty());
        }
    }

    #[test]
    fn test_artillery_always_loses_to_infantry_as_red() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (mut red, mut blue, _, b_id) = pair_rosters(UnitType::Artillery, UnitType::Infantry);
            let mut events = BattleEventLog::new();

            resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);

            assert!(red.is_empty());
            assert!(blue.contains(b_id));
        }
    }

    #[test]
    fn test_artillery_always_beats_cavalry_both_conventions() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);

            let (mut red, mut blue, _, _) = pair_rosters(UnitType::Cavalry, UnitType::Artillery);
            let mut events = BattleEventLog::new();
            resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);
            assert!(red.is_empty(), "red cavalry must fall to blue artillery");

            let (mut red, mut blue, _, _) = pair_rosters(UnitType::Artillery, UnitType::Cavalry);
            resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);
            assert!(blue.is_empty(), "blue cavalry must fall to red artillery");
        }
    }

    #[test]
    fn test_exactly_one_member_dies_per_resolved_pair() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (mut red, mut blue, _, _) = pair_rosters(UnitType::Cavalry, UnitType::Cavalry);
            let mut events = BattleEventLog::new();

            resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);

            assert_eq!(red.len() + blue.len(), 1);
        }
    }

    #[test]
    fn test_removed_count_equals_resolved_pairs() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut red = Roster::new();
        let mut blue = Roster::new();
        // A tight brawl: three on each side, everyone in range of everyone
        for i in 0..3 {
            red.push(Unit::new(Team::Red, UnitType::Infantry, Vec2::new(i as f32, 0.0)));
            blue.push(Unit::new(Team::Blue, UnitType::Infantry, Vec2::new(i as f32, 5.0)));
        }
        let before = red.len() + blue.len();
        let mut events = BattleEventLog::new();

        let resolved = resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);

        let after = red.len() + blue.len();
        assert_eq!(before - after, resolved);
        let melees = events.count_where(|k| matches!(k, BattleEventKind::MeleeResolved { .. }));
        assert_eq!(melees, resolved);
    }

    #[test]
    fn test_pairs_with_fallen_members_are_skipped() {
        // Two red infantry against one blue artillery: the first pair kills
        // the gun, the second pair must be skipped
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut red = Roster::new();
        let mut blue = Roster::new();
        red.push(Unit::new(Team::Red, UnitType::Infantry, Vec2::new(0.0, 0.0)));
        red.push(Unit::new(Team::Red, UnitType::Infantry, Vec2::new(5.0, 0.0)));
        blue.push(Unit::new(Team::Blue, UnitType::Artillery, Vec2::new(2.0, 5.0)));
        let mut events = BattleEventLog::new();

        let resolved = resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);

        assert_eq!(resolved, 1);
        assert_eq!(red.len(), 2);
        assert!(blue.is_empty());
    }

    #[test]
    fn test_overrun_kind_when_artillery_involved() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let (mut red, mut blue, _, _) = pair_rosters(UnitType::Infantry, UnitType::Artillery);
        let mut events = BattleEventLog::new();

        resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);

        assert!(matches!(
            events.events[0].kind,
            BattleEventKind::MeleeResolved { kind: MeleeKind::Overrun, .. }
        ));
    }

    #[test]
    fn test_cavalry_beats_infantry_near_thirty_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 10_000;
        let mut cavalry_wins = 0;
        for _ in 0..trials {
            let (mut red, mut blue, r_id, _) = pair_rosters(UnitType::Cavalry, UnitType::Infantry);
            let mut events = BattleEventLog::new();
            resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);
            if red.contains(r_id) {
                cavalry_wins += 1;
            }
        }
        let rate = cavalry_wins as f64 / trials as f64;
        assert!((0.25..=0.35).contains(&rate), "cavalry win rate {rate}");
    }

    #[test]
    fn test_infantry_beats_cavalry_near_seventy_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(43);
        let trials = 10_000;
        let mut infantry_wins = 0;
        for _ in 0..trials {
            let (mut red, mut blue, r_id, _) = pair_rosters(UnitType::Infantry, UnitType::Cavalry);
            let mut events = BattleEventLog::new();
            resolve_combat_pass(&mut red, &mut blue, 1, &mut rng, &mut events);
            if red.contains(r_id) {
                infantry_wins += 1;
            }
        }
        let rate = infantry_wins as f64 / trials as f64;
        assert!((0.65..=0.75).contains(&rate), "infantry win rate {rate}");
    }
}
