//! Action validation.
//!
//! Pure predicates over a `GameState`. Each check returns the first rule the
//! action breaks, in the order a player would notice it: whose unit, where
//! to, then unit-specific restrictions.

use crate::core::{Action, ActionError, Coord, GameState, Unit, MAX_HEALTH};

/// Validate any action for the player to move.
pub fn validate(state: &GameState, action: &Action) -> Result<(), ActionError> {
    if state.is_finished() {
        return Err(ActionError::ActionAfterGameOver);
    }
    match *action {
        Action::Move { src, dst } => validate_move(state, src, dst),
        Action::Attack { src, dst } => validate_attack(state, src, dst),
        Action::Repair { src, dst } => validate_repair(state, src, dst),
        Action::SelfDestruct { src } => validate_self_destruct(state, src),
    }
}

/// The unit at `src`, provided it belongs to the player to move.
fn owned_source(state: &GameState, src: Coord) -> Result<&Unit, ActionError> {
    let board = state.board();
    if !board.is_in_bounds(src) {
        return Err(ActionError::OutOfBounds(src));
    }
    let unit = board.unit_at(src).ok_or(ActionError::SourceEmpty(src))?;
    if unit.player != state.next_player() {
        return Err(ActionError::SourceNotOwnedByCurrentPlayer {
            at: src,
            owner: unit.player,
        });
    }
    Ok(unit)
}

/// In-bounds, orthogonally adjacent destination.
fn adjacent_target(src: Coord, dst: Coord) -> Result<(), ActionError> {
    if !dst.is_in_bounds() {
        return Err(ActionError::OutOfBounds(dst));
    }
    if !src.is_adjacent(dst) {
        return Err(ActionError::NotAdjacent { src, dst });
    }
    Ok(())
}

/// Move to an empty orthogonal neighbour, subject to per-kind direction and
/// engagement rules.
pub fn validate_move(state: &GameState, src: Coord, dst: Coord) -> Result<(), ActionError> {
    let unit = owned_source(state, src)?;
    adjacent_target(src, dst)?;

    let board = state.board();
    if !board.is_empty(dst) {
        return Err(ActionError::DestinationOccupied(dst));
    }

    let dir = src
        .direction_to(dst)
        .ok_or(ActionError::NotAdjacent { src, dst })?;
    if !unit.kind.may_move(unit.player, dir) {
        return Err(ActionError::DirectionNotAllowedForUnit {
            kind: unit.kind,
            player: unit.player,
            src,
            dst,
        });
    }

    if unit.kind.immobilized_when_engaged() && board.is_engaged(src) {
        return Err(ActionError::UnitImmobilizedWhileEngaged {
            at: src,
            kind: unit.kind,
        });
    }

    Ok(())
}

/// Attack an adjacent adversary. Any kind may attack, engaged or not.
pub fn validate_attack(state: &GameState, src: Coord, dst: Coord) -> Result<(), ActionError> {
    let unit = owned_source(state, src)?;
    adjacent_target(src, dst)?;

    match state.board().unit_at(dst) {
        Some(target) if unit.is_adversary(target) => Ok(()),
        _ => Err(ActionError::TargetNotAdversarial(dst)),
    }
}

/// Repair an adjacent friendly unit that the table allows and that is
/// below full health.
pub fn validate_repair(state: &GameState, src: Coord, dst: Coord) -> Result<(), ActionError> {
    let unit = owned_source(state, src)?;
    adjacent_target(src, dst)?;

    let target = match state.board().unit_at(dst) {
        Some(target) if !unit.is_adversary(target) => target,
        _ => return Err(ActionError::TargetNotFriendly(dst)),
    };

    if unit.kind.repair_to(target.kind) == 0 || target.health >= MAX_HEALTH {
        return Err(ActionError::RepairIneffective {
            repairer: unit.kind,
            target: target.kind,
            at: dst,
        });
    }

    Ok(())
}

/// Any owned unit may self-destruct.
pub fn validate_self_destruct(state: &GameState, src: Coord) -> Result<(), ActionError> {
    owned_source(state, src).map(|_| ())
}
