//! Action representation.
//!
//! An action is a verb plus the cells it touches:
//! - `Move`: relocate a unit to an adjacent empty cell
//! - `Attack`: trade damage with an adjacent adversary
//! - `Repair`: restore health to an adjacent friendly unit
//! - `SelfDestruct`: remove a unit and splash its surroundings
//!
//! Players type actions as a pair of cells (`"E3 D3"`). `Action::from_pair`
//! resolves such a pair into a verb by looking at the board.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::coord::{Coord, CoordPair};
use super::player::Player;

/// A proposed game action.
///
/// ```
/// use ai_wargame::core::{Action, Board, Coord, CoordPair};
///
/// let board = Board::initial();
/// let pair: CoordPair = "E3 D3".parse().unwrap();
/// // D3 holds a friendly Firewall that a Virus cannot repair
/// assert_eq!(
///     Action::from_pair(&board, pair),
///     Action::Repair { src: Coord::new(4, 3), dst: Coord::new(3, 3) },
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Move the unit at `src` to the empty cell `dst`.
    Move {
        /// Moving unit.
        src: Coord,
        /// Empty destination.
        dst: Coord,
    },
    /// Unit at `src` fights the adversary at `dst`.
    Attack {
        /// Attacking unit.
        src: Coord,
        /// Adversarial target.
        dst: Coord,
    },
    /// Unit at `src` repairs the friendly unit at `dst`.
    Repair {
        /// Repairing unit.
        src: Coord,
        /// Friendly target.
        dst: Coord,
    },
    /// Unit at `src` destroys itself, damaging all surrounding units.
    SelfDestruct {
        /// Exploding unit.
        src: Coord,
    },
}

impl Action {
    /// The acting unit's cell.
    #[must_use]
    pub const fn src(&self) -> Coord {
        match *self {
            Action::Move { src, .. }
            | Action::Attack { src, .. }
            | Action::Repair { src, .. }
            | Action::SelfDestruct { src } => src,
        }
    }

    /// The target cell. Self-destruct targets its own cell.
    #[must_use]
    pub const fn dst(&self) -> Coord {
        match *self {
            Action::Move { dst, .. } | Action::Attack { dst, .. } | Action::Repair { dst, .. } => dst,
            Action::SelfDestruct { src } => src,
        }
    }

    /// Interpret a typed cell pair against the current board.
    ///
    /// - `src == dst`: self-destruct
    /// - empty (or off-board) `dst`: move
    /// - `dst` holds an adversary of the unit at `src`: attack
    /// - otherwise: repair
    ///
    /// The result still has to pass validation.
    #[must_use]
    pub fn from_pair(board: &Board, pair: CoordPair) -> Self {
        let CoordPair { src, dst } = pair;
        if src == dst {
            return Action::SelfDestruct { src };
        }
        let source = src.is_in_bounds().then(|| board.unit_at(src)).flatten();
        let target = dst.is_in_bounds().then(|| board.unit_at(dst)).flatten();
        match (source, target) {
            (_, None) => Action::Move { src, dst },
            (Some(s), Some(t)) if s.is_adversary(t) => Action::Attack { src, dst },
            (None, Some(_)) => Action::Attack { src, dst },
            (Some(_), Some(_)) => Action::Repair { src, dst },
        }
    }

    /// The pair a player would type for this action.
    #[must_use]
    pub const fn to_pair(&self) -> CoordPair {
        CoordPair::new(self.src(), self.dst())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { src, dst } => write!(f, "move {src} to {dst}"),
            Action::Attack { src, dst } => write!(f, "attack from {src} to {dst}"),
            Action::Repair { src, dst } => write!(f, "repair from {src} to {dst}"),
            Action::SelfDestruct { src } => write!(f, "self-destruct at {src}"),
        }
    }
}

/// An accepted action with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// 1-based turn number of the action.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(player: Player, action: Action, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Unit, UnitKind};

    fn pair(s: &str) -> CoordPair {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_pair_self_destruct() {
        let board = Board::initial();
        assert_eq!(
            Action::from_pair(&board, pair("E4 E4")),
            Action::SelfDestruct { src: Coord::new(4, 4) }
        );
    }

    #[test]
    fn test_from_pair_move() {
        let board = Board::initial();
        assert_eq!(
            Action::from_pair(&board, pair("C4 B4")),
            Action::Move {
                src: Coord::new(2, 4),
                dst: Coord::new(1, 4)
            }
        );
    }

    #[test]
    fn test_from_pair_attack_and_repair() {
        let mut board = Board::empty();
        board.place(Coord::new(2, 2), Unit::new(Player::Attacker, UnitKind::Virus));
        board.place(Coord::new(1, 2), Unit::new(Player::Defender, UnitKind::AI));
        board.place(Coord::new(2, 3), Unit::new(Player::Attacker, UnitKind::AI));

        assert!(matches!(
            Action::from_pair(&board, pair("C2 B2")),
            Action::Attack { .. }
        ));
        assert!(matches!(
            Action::from_pair(&board, pair("C3 C2")),
            Action::Repair { .. }
        ));
    }

    #[test]
    fn test_src_dst_accessors() {
        let action = Action::Attack {
            src: Coord::new(1, 1),
            dst: Coord::new(1, 2),
        };
        assert_eq!(action.src(), Coord::new(1, 1));
        assert_eq!(action.dst(), Coord::new(1, 2));
        assert_eq!(action.to_pair().to_string(), "B1 B2");

        let sd = Action::SelfDestruct { src: Coord::new(3, 3) };
        assert_eq!(sd.dst(), sd.src());
    }

    #[test]
    fn test_action_display() {
        let action = Action::Move {
            src: Coord::new(4, 2),
            dst: Coord::new(3, 2),
        };
        assert_eq!(action.to_string(), "move E2 to D2");
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Repair {
            src: Coord::new(0, 1),
            dst: Coord::new(0, 2),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"kind\":\"repair\""));
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }

    #[test]
    fn test_action_record() {
        let action = Action::SelfDestruct { src: Coord::new(0, 0) };
        let record = ActionRecord::new(Player::Defender, action, 4);
        assert_eq!(record.player, Player::Defender);
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 4);

        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
