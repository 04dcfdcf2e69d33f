//! Core game types: players, coordinates, units, board, actions, state,
//! configuration and errors.
//!
//! Nothing in here enforces the rules of play; that lives in `rules` and
//! `games::wargame`.

pub mod player;
pub mod coord;
pub mod unit;
pub mod board;
pub mod action;
pub mod config;
pub mod state;
pub mod error;

pub use player::{Player, PlayerMap};
pub use coord::{Coord, CoordPair, Direction, BOARD_DIM};
pub use unit::{Unit, UnitKind, MAX_HEALTH, SELF_DESTRUCT_DAMAGE};
pub use board::{Board, DamageReport};
pub use action::{Action, ActionRecord};
pub use config::{RulesConfig, DEFAULT_MAX_TURNS};
pub use state::{GameState, GameStatus};
pub use error::{ActionError, ConfigError, ParseCoordError};
