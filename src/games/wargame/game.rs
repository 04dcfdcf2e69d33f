//! Wargame rules engine implementation.

use tracing::{debug, info, trace};

use crate::core::{
    Action, ActionError, ActionRecord, ConfigError, CoordPair, GameState, GameStatus, Player,
    RulesConfig,
};
use crate::rules::{check_invariants, resolver, validator, ActionOutcome, RulesEngine};

/// The wargame rules.
///
/// Holds only configuration; all mutable data lives in `GameState`, so one
/// engine can drive any number of games.
///
/// ```
/// use ai_wargame::core::{Action, Coord, GameStatus};
/// use ai_wargame::games::wargame::Wargame;
/// use ai_wargame::rules::RulesEngine;
///
/// let game = Wargame::default();
/// let mut state = game.new_game();
///
/// let outcome = game
///     .apply_action(&mut state, &Action::Move { src: Coord::new(4, 2), dst: Coord::new(3, 2) })
///     .unwrap();
/// assert_eq!(outcome.status, GameStatus::InProgress);
/// assert_eq!(state.turns_played(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Wargame {
    config: RulesConfig,
}

impl Wargame {
    /// Create an engine with a validated configuration.
    pub fn new(config: RulesConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// A fresh game in the starting position.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new()
    }

    /// Interpret a typed cell pair (`"E3 D3"`) and apply it.
    pub fn play_pair(
        &self,
        state: &mut GameState,
        pair: CoordPair,
    ) -> Result<ActionOutcome, ActionError> {
        let action = Action::from_pair(state.board(), pair);
        self.apply_action(state, &action)
    }
}

impl RulesEngine for Wargame {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn validate(&self, state: &GameState, action: &Action) -> Result<(), ActionError> {
        validator::validate(state, action)
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        action: &Action,
    ) -> Result<ActionOutcome, ActionError> {
        let player = state.next_player();
        if let Err(err) = self.validate(state, action) {
            trace!(%player, %action, %err, "action rejected");
            return Err(err);
        }

        let events = resolver::resolve(&mut state.board, action);
        let turn = state.turns_played() + 1;
        state.advance(ActionRecord::new(player, *action, turn));
        state.status = self.evaluate_status(state);

        debug_assert!(
            check_invariants(state).is_empty(),
            "invariants broken after {action}: {:?}",
            check_invariants(state)
        );
        debug!(%player, %action, turn, events = events.len(), "action applied");
        if state.is_finished() {
            info!(status = %state.status(), turns = state.turns_played(), "game over");
        }

        Ok(ActionOutcome {
            player,
            action: *action,
            events,
            status: state.status(),
        })
    }

    fn evaluate_status(&self, state: &GameState) -> GameStatus {
        let board = state.board();
        match (board.ai_alive(Player::Attacker), board.ai_alive(Player::Defender)) {
            (true, true) if state.turns_played() >= self.config.max_turns => {
                GameStatus::DefenderWins
            }
            (true, true) => GameStatus::InProgress,
            (true, false) => GameStatus::AttackerWins,
            // Attacker lost its AI, alone or together with the Defender's.
            (false, _) => GameStatus::DefenderWins,
        }
    }

    fn candidate_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_finished() {
            return Vec::new();
        }
        let board = state.board();
        let mut actions = Vec::new();
        for (src, _) in board.units_of(state.next_player()) {
            for dst in src.iter_adjacent() {
                actions.push(Action::from_pair(board, CoordPair::new(src, dst)));
            }
            actions.push(Action::SelfDestruct { src });
        }
        actions
    }
}
