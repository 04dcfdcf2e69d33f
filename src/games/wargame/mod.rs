//! The 5×5 attacker/defender wargame.
//!
//! - Each side has 6 units: AI, Virus/Tech, Program and Firewall
//! - On your turn: move, attack, repair or self-destruct one unit
//! - Destroy the opposing AI to win
//! - If the move limit runs out, or both AIs fall together, the Defender wins

mod game;

pub use game::Wargame;
