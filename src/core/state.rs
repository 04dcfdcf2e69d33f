//! Game state.
//!
//! `GameState` is the authoritative snapshot handed to renderers and
//! external move selectors:
//! - Board (unit per cell)
//! - Player to move
//! - Number of actions played
//! - Terminal status
//! - Action history
//!
//! The history uses an `im` persistent vector so that cloning a state for
//! look-ahead stays O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::board::Board;
use super::player::Player;

/// Outcome status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Actions are still accepted.
    #[default]
    InProgress,
    /// The Defender's AI was destroyed.
    AttackerWins,
    /// The Attacker's AI was destroyed, both were, or the move limit ran out.
    DefenderWins,
}

impl GameStatus {
    /// Check if the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning player, if the game has ended.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::AttackerWins => Some(Player::Attacker),
            GameStatus::DefenderWins => Some(Player::Defender),
        }
    }

    /// The status in which `player` has won.
    #[must_use]
    pub const fn won_by(player: Player) -> Self {
        match player {
            Player::Attacker => GameStatus::AttackerWins,
            Player::Defender => GameStatus::DefenderWins,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            None => write!(f, "in progress"),
            Some(p) => write!(f, "{p} wins"),
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) next_player: Player,
    pub(crate) turns_played: u32,
    pub(crate) status: GameStatus,
    pub(crate) history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: starting layout, Attacker to move, no turns played.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Player::Attacker)
    }

    /// Start from an arbitrary position (puzzles, tests, replays).
    #[must_use]
    pub fn from_board(board: Board, next_player: Player) -> Self {
        Self {
            board,
            next_player,
            turns_played: 0,
            status: GameStatus::InProgress,
            history: Vector::new(),
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Accepted actions so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Record an accepted action and pass the turn.
    pub(crate) fn advance(&mut self, record: ActionRecord) {
        self.history.push_back(record);
        self.turns_played += 1;
        self.next_player = self.next_player.next();
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Next player: {}", self.next_player)?;
        writeln!(f, "Turns played: {}", self.turns_played)?;
        if self.is_finished() {
            writeln!(f, "Result: {}", self.status)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.board)
    }
}
