//! Rules engine trait.
//!
//! A rules engine decides:
//! - Whether a proposed action is legal
//! - How a legal action changes the state
//! - When the game is over and who won

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionError, GameState, GameStatus, Player, RulesConfig};

use super::resolver::Events;

/// What happened when an action was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Player who acted.
    pub player: Player,
    /// The applied action.
    pub action: Action,
    /// Board changes, in resolution order.
    pub events: Events,
    /// Status after the action.
    pub status: GameStatus,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate` must be pure: it never touches the state
/// - `apply_action` must validate first and leave the state untouched on `Err`
/// - `candidate_actions` may over-approximate; `legal_actions` filters it
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Check a proposed action for the player to move.
    fn validate(&self, state: &GameState, action: &Action) -> Result<(), ActionError>;

    /// Validate and apply an action, then advance the turn.
    fn apply_action(
        &self,
        state: &mut GameState,
        action: &Action,
    ) -> Result<ActionOutcome, ActionError>;

    /// Status implied by the current board and turn count.
    fn evaluate_status(&self, state: &GameState) -> GameStatus;

    /// Actions worth validating for the player to move.
    fn candidate_actions(&self, state: &GameState) -> Vec<Action>;

    // === Convenience Methods ===

    /// Enumerate all legal actions for the player to move.
    ///
    /// Empty once the game is over.
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        self.candidate_actions(state)
            .into_iter()
            .filter(|action| self.validate(state, action).is_ok())
            .collect()
    }

    /// Check if an action would be accepted.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.validate(state, action).is_ok()
    }
}
