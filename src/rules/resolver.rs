//! Action resolution - applying validated actions to the board.
//!
//! The resolver assumes the action already passed validation and only
//! mutates the `Board`. Turn order and game status are handled by the
//! rules engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Action, Board, Coord, DamageReport, Unit, SELF_DESTRUCT_DAMAGE};

/// A single board change produced while resolving an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ResolutionEvent {
    /// A unit changed cells.
    Moved {
        /// Old cell.
        from: Coord,
        /// New cell.
        to: Coord,
    },
    /// A unit lost health.
    Damaged {
        /// Cell of the damaged unit.
        at: Coord,
        /// The unit before the hit.
        unit: Unit,
        /// Health lost after clamping.
        amount: u8,
    },
    /// A unit regained health.
    Repaired {
        /// Cell of the repaired unit.
        at: Coord,
        /// Health gained after clamping.
        amount: u8,
    },
    /// A unit's health reached 0 and it was removed.
    Destroyed {
        /// Cell the unit occupied.
        at: Coord,
        /// The unit before its final hit.
        unit: Unit,
    },
    /// A unit blew itself up.
    SelfDestructed {
        /// Cell the unit occupied.
        at: Coord,
        /// The exploding unit.
        unit: Unit,
    },
}

/// Events produced by one action. Self-destructs next to several units
/// spill onto the heap.
pub type Events = SmallVec<[ResolutionEvent; 4]>;

fn push_damage(events: &mut Events, at: Coord, report: DamageReport) {
    events.push(ResolutionEvent::Damaged {
        at,
        unit: report.before,
        amount: report.lost,
    });
    if report.destroyed {
        events.push(ResolutionEvent::Destroyed {
            at,
            unit: report.before,
        });
    }
}

/// Apply a validated action to the board.
pub fn resolve(board: &mut Board, action: &Action) -> Events {
    match *action {
        Action::Move { src, dst } => resolve_move(board, src, dst),
        Action::Attack { src, dst } => resolve_attack(board, src, dst),
        Action::Repair { src, dst } => resolve_repair(board, src, dst),
        Action::SelfDestruct { src } => resolve_self_destruct(board, src),
    }
}

/// Relocate the unit; `src` becomes empty.
pub fn resolve_move(board: &mut Board, src: Coord, dst: Coord) -> Events {
    board.relocate(src, dst);
    let mut events = Events::new();
    events.push(ResolutionEvent::Moved { from: src, to: dst });
    events
}

/// Both units damage each other simultaneously, each by its own table entry.
pub fn resolve_attack(board: &mut Board, src: Coord, dst: Coord) -> Events {
    let mut events = Events::new();
    let (Some(attacker), Some(defender)) = (board.unit_at(src).copied(), board.unit_at(dst).copied())
    else {
        return events;
    };

    // Both amounts are looked up before either unit is hit.
    let to_defender = attacker.kind.damage_to(defender.kind);
    let to_attacker = defender.kind.damage_to(attacker.kind);

    if let Some(report) = board.damage(dst, to_defender) {
        push_damage(&mut events, dst, report);
    }
    if let Some(report) = board.damage(src, to_attacker) {
        push_damage(&mut events, src, report);
    }
    events
}

/// Restore the table amount, clamped at full health. `src` is unaffected.
pub fn resolve_repair(board: &mut Board, src: Coord, dst: Coord) -> Events {
    let mut events = Events::new();
    let (Some(repairer), Some(target)) = (board.unit_at(src).copied(), board.unit_at(dst).copied())
    else {
        return events;
    };

    let restore = repairer.kind.repair_to(target.kind);
    if let Some(amount) = board.heal(dst, restore) {
        events.push(ResolutionEvent::Repaired { at: dst, amount });
    }
    events
}

/// Remove the unit, then hit every occupied surrounding cell for 2,
/// friendly units included.
pub fn resolve_self_destruct(board: &mut Board, src: Coord) -> Events {
    let mut events = Events::new();
    let Some(unit) = board.remove(src) else {
        return events;
    };
    events.push(ResolutionEvent::SelfDestructed { at: src, unit });

    for pos in board.neighbors_8(src) {
        if let Some(report) = board.damage(pos, SELF_DESTRUCT_DAMAGE) {
            push_damage(&mut events, pos, report);
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, UnitKind};

    fn unit(player: Player, kind: UnitKind, health: u8) -> Unit {
        Unit::new(player, kind).with_health(health)
    }

    #[test]
    fn test_move() {
        let mut board = Board::initial();
        let before = board.unit_at(Coord::new(4, 2)).copied();
        let events = resolve_move(&mut board, Coord::new(4, 2), Coord::new(3, 2));

        assert!(board.is_empty(Coord::new(4, 2)));
        assert_eq!(board.unit_at(Coord::new(3, 2)).copied(), before);
        assert_eq!(board.unit_count(), 12);
        assert_eq!(
            events.as_slice(),
            &[ResolutionEvent::Moved {
                from: Coord::new(4, 2),
                to: Coord::new(3, 2)
            }]
        );
    }

    #[test]
    fn test_attack_is_bidirectional_and_asymmetric() {
        let mut board = Board::empty();
        let (v, p) = (Coord::new(2, 2), Coord::new(2, 3));
        board.place(v, Unit::new(Player::Attacker, UnitKind::Virus));
        board.place(p, Unit::new(Player::Defender, UnitKind::Program));

        resolve_attack(&mut board, v, p);

        // Virus deals 6 to Program, Program deals 3 back
        assert_eq!(board.unit_at(p).unwrap().health, 3);
        assert_eq!(board.unit_at(v).unwrap().health, 6);
    }

    #[test]
    fn test_attack_virus_kills_ai() {
        let mut board = Board::empty();
        let (v, ai) = (Coord::new(1, 0), Coord::new(0, 0));
        board.place(v, Unit::new(Player::Attacker, UnitKind::Virus));
        board.place(ai, Unit::new(Player::Defender, UnitKind::AI));

        let events = resolve_attack(&mut board, v, ai);

        assert!(board.is_empty(ai));
        assert_eq!(board.unit_at(v).unwrap().health, 6);
        assert!(events.iter().any(|e| matches!(
            e,
            ResolutionEvent::Destroyed { at, unit } if *at == ai && unit.kind == UnitKind::AI
        )));
    }

    #[test]
    fn test_attack_can_destroy_both() {
        let mut board = Board::empty();
        let (a, b) = (Coord::new(2, 2), Coord::new(3, 2));
        board.place(a, unit(Player::Attacker, UnitKind::Program, 2));
        board.place(b, unit(Player::Defender, UnitKind::Program, 1));

        let events = resolve_attack(&mut board, a, b);

        assert!(board.is_empty(a));
        assert!(board.is_empty(b));
        let destroyed = events
            .iter()
            .filter(|e| matches!(e, ResolutionEvent::Destroyed { .. }))
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn test_attack_damage_clamped() {
        let mut board = Board::empty();
        let (a, b) = (Coord::new(0, 0), Coord::new(0, 1));
        board.place(a, unit(Player::Attacker, UnitKind::Virus, 9));
        board.place(b, unit(Player::Defender, UnitKind::Tech, 4));

        let events = resolve_attack(&mut board, a, b);
        assert!(events.contains(&ResolutionEvent::Damaged {
            at: b,
            unit: unit(Player::Defender, UnitKind::Tech, 4),
            amount: 4
        }));
        assert!(board.is_empty(b));
        assert_eq!(board.unit_at(a).unwrap().health, 3);
    }

    #[test]
    fn test_repair() {
        let mut board = Board::empty();
        let (t, f) = (Coord::new(1, 1), Coord::new(1, 2));
        board.place(t, unit(Player::Defender, UnitKind::Tech, 4));
        board.place(f, unit(Player::Defender, UnitKind::Firewall, 7));

        let events = resolve_repair(&mut board, t, f);

        assert_eq!(board.unit_at(f).unwrap().health, 9);
        assert_eq!(board.unit_at(t).unwrap().health, 4);
        assert_eq!(
            events.as_slice(),
            &[ResolutionEvent::Repaired { at: f, amount: 2 }]
        );
    }

    #[test]
    fn test_self_destruct_splash() {
        let mut board = Board::empty();
        let center = Coord::new(2, 2);
        board.place(center, Unit::new(Player::Attacker, UnitKind::Program));
        board.place(Coord::new(1, 1), unit(Player::Defender, UnitKind::AI, 9));
        board.place(Coord::new(2, 3), unit(Player::Attacker, UnitKind::Virus, 2));
        board.place(Coord::new(3, 2), unit(Player::Defender, UnitKind::Tech, 5));
        // Two cells away, untouched
        board.place(Coord::new(0, 2), unit(Player::Defender, UnitKind::Firewall, 9));

        let events = resolve_self_destruct(&mut board, center);

        assert!(board.is_empty(center));
        assert_eq!(board.unit_at(Coord::new(1, 1)).unwrap().health, 7);
        assert!(board.is_empty(Coord::new(2, 3)));
        assert_eq!(board.unit_at(Coord::new(3, 2)).unwrap().health, 3);
        assert_eq!(board.unit_at(Coord::new(0, 2)).unwrap().health, 9);
        assert_eq!(board.unit_count(), 3);
        assert!(matches!(events[0], ResolutionEvent::SelfDestructed { at, .. } if at == center));
    }

    #[test]
    fn test_self_destruct_corner() {
        let mut board = Board::initial();
        resolve_self_destruct(&mut board, Coord::new(0, 0));

        assert!(board.is_empty(Coord::new(0, 0)));
        assert_eq!(board.unit_at(Coord::new(0, 1)).unwrap().health, 7);
        assert_eq!(board.unit_at(Coord::new(1, 0)).unwrap().health, 7);
        assert_eq!(board.unit_at(Coord::new(1, 1)).unwrap().health, 7);
        assert_eq!(board.unit_at(Coord::new(0, 2)).unwrap().health, 9);
    }
}
