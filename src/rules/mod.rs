//! Rules of play.
//!
//! - `validator`: pure legality checks for proposed actions
//! - `resolver`: board mutation for validated actions
//! - `engine`: the `RulesEngine` trait tying them to turn order and outcome
//! - `invariants`: sanity checks over any reachable state

pub mod engine;
pub mod validator;
pub mod resolver;
pub mod invariants;

pub use engine::{ActionOutcome, RulesEngine};
pub use resolver::{Events, ResolutionEvent};
pub use invariants::{check_invariants, InvariantViolation};
