//! Error types.
//!
//! `ActionError` is the rejection taxonomy for proposed actions. Every
//! variant is recoverable: the state is untouched when one is returned.

use thiserror::Error;

use super::coord::Coord;
use super::player::Player;
use super::unit::UnitKind;

/// Why a proposed action was rejected.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// A coordinate in the request is off the board.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coord),

    /// No unit on the source cell.
    #[error("no unit at {0}")]
    SourceEmpty(Coord),

    /// The source unit belongs to the player who is not on turn.
    #[error("unit at {at} belongs to {owner}, not the current player")]
    SourceNotOwnedByCurrentPlayer {
        /// Source cell.
        at: Coord,
        /// Actual owner of the unit.
        owner: Player,
    },

    /// Move destination already holds a unit.
    #[error("destination {0} is occupied")]
    DestinationOccupied(Coord),

    /// Source and destination are not orthogonal neighbours.
    #[error("{src} and {dst} are not adjacent")]
    NotAdjacent {
        /// Source cell.
        src: Coord,
        /// Destination cell.
        dst: Coord,
    },

    /// The unit's kind may not move that way for its owner.
    #[error("{player} {kind} cannot move from {src} to {dst}")]
    DirectionNotAllowedForUnit {
        /// Moving kind.
        kind: UnitKind,
        /// Owner.
        player: Player,
        /// Source cell.
        src: Coord,
        /// Destination cell.
        dst: Coord,
    },

    /// The unit is next to an adversary and its kind cannot disengage.
    #[error("{kind} at {at} is engaged in combat and cannot move")]
    UnitImmobilizedWhileEngaged {
        /// Unit cell.
        at: Coord,
        /// Unit kind.
        kind: UnitKind,
    },

    /// Attack target is empty or friendly.
    #[error("no adversary to attack at {0}")]
    TargetNotAdversarial(Coord),

    /// Repair target is empty or adversarial.
    #[error("no friendly unit to repair at {0}")]
    TargetNotFriendly(Coord),

    /// Repair would restore no health.
    #[error("{repairer} cannot repair {target} at {at}")]
    RepairIneffective {
        /// Repairing kind.
        repairer: UnitKind,
        /// Target kind.
        target: UnitKind,
        /// Target cell.
        at: Coord,
    },

    /// The game already has a result.
    #[error("game is over")]
    ActionAfterGameOver,
}

/// Invalid engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The move limit must allow at least one action.
    #[error("max_turns must be at least 1, got {0}")]
    InvalidMaxTurns(u32),

    /// The configuration document is not valid TOML for `RulesConfig`.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Malformed coordinate text.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseCoordError {
    /// Wrong number of significant characters.
    #[error("expected a row letter and column digit per coordinate, got {0} characters")]
    BadLength(usize),

    /// Unknown row label.
    #[error("invalid row label {0:?}")]
    BadRow(char),

    /// Unknown column label.
    #[error("invalid column label {0:?}")]
    BadColumn(char),
}
