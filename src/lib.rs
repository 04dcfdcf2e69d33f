//! # ai-wargame
//!
//! Rules engine for a deterministic, perfect-information, two-player
//! wargame on a 5×5 board.
//!
//! ## Design Principles
//!
//! 1. **Rules as Data**: Damage, repair and movement rules are constant
//!    tables keyed by unit kind, not per-kind branches.
//!
//! 2. **Validate, Then Resolve**: Every action is checked in full before the
//!    board is touched. A rejected action leaves the state unchanged.
//!
//! 3. **External Actors**: The engine never picks moves. Humans, scripts and
//!    search algorithms propose actions and read snapshots.
//!
//! ## Modules
//!
//! - `core`: Players, coordinates, units, board, actions, state, configuration
//! - `rules`: RulesEngine trait, validator, resolver, invariants
//! - `games`: The wargame itself

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    Coord, CoordPair, Direction,
    Unit, UnitKind, Board,
    Action, ActionRecord,
    RulesConfig, GameState, GameStatus,
    ActionError, ConfigError, ParseCoordError,
};

pub use crate::rules::{
    RulesEngine, ActionOutcome, ResolutionEvent,
    check_invariants, InvariantViolation,
};

pub use crate::games::wargame::Wargame;
