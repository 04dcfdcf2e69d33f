//! State invariants - sanity checks that detect engine bugs.
//!
//! These never trigger for states reached through `RulesEngine::apply_action`.
//! They are checked in debug builds after every resolution and by the
//! property tests.

use thiserror::Error;

use crate::core::{GameState, GameStatus, Player, PlayerMap, UnitKind, MAX_HEALTH};

/// Invariant violation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check all state invariants.
///
/// Returns the violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let board = state.board();

    let mut ai_count: PlayerMap<u32> = PlayerMap::default();
    for (pos, unit) in board.units() {
        if unit.health == 0 || unit.health > MAX_HEALTH {
            violations.push(InvariantViolation::new(format!(
                "unit {unit} at {pos} has health outside 1..={MAX_HEALTH}"
            )));
        }
        if unit.kind == UnitKind::AI {
            ai_count[unit.player] += 1;
        }
    }

    for (player, &count) in ai_count.iter() {
        if count > 1 {
            violations.push(InvariantViolation::new(format!(
                "{player} has {count} AIs on the board"
            )));
        }
    }

    let both_alive = Player::ALL.iter().all(|&p| board.ai_alive(p));
    if state.status() == GameStatus::InProgress && !both_alive {
        violations.push(InvariantViolation::new(
            "game in progress after an AI was destroyed",
        ));
    }

    if state.history().len() != state.turns_played() as usize {
        violations.push(InvariantViolation::new(format!(
            "turn counter {} disagrees with {} recorded actions",
            state.turns_played(),
            state.history().len()
        )));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Coord, Unit};

    #[test]
    fn test_initial_state_is_clean() {
        assert!(check_invariants(&GameState::new()).is_empty());
    }

    #[test]
    fn test_detects_duplicate_ai() {
        let mut board = Board::initial();
        board.place(Coord::new(2, 2), Unit::new(Player::Defender, UnitKind::AI));
        let violations = check_invariants(&GameState::from_board(board, Player::Attacker));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("Defender has 2 AIs"));
    }

    #[test]
    fn test_detects_zero_health_unit() {
        let mut board = Board::initial();
        let mut dead = Unit::new(Player::Attacker, UnitKind::Program);
        dead.health = 0;
        board.place(Coord::new(2, 2), dead);
        let violations = check_invariants(&GameState::from_board(board, Player::Attacker));
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn test_detects_missing_ai_while_in_progress() {
        let mut board = Board::initial();
        board.remove(Coord::new(4, 4));
        let violations = check_invariants(&GameState::from_board(board, Player::Attacker));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().starts_with("invariant violation"));
    }
}
