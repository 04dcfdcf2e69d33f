//! Unit kinds, their rule tables, and unit instances.
//!
//! All per-kind rules are data: the damage and repair matrices are indexed
//! by `UnitKind::index`, and movement rules hang off the kind itself.

use serde::{Deserialize, Serialize};

use super::coord::Direction;
use super::player::Player;

/// Maximum (and starting) health of every unit.
pub const MAX_HEALTH: u8 = 9;

/// Damage dealt to every unit around a self-destructing one.
pub const SELF_DESTRUCT_DAMAGE: u8 = 2;

/// Damage inflicted by the row kind onto the column kind.
///
/// Order: AI, Tech, Virus, Program, Firewall.
const DAMAGE_TABLE: [[u8; 5]; 5] = [
    [3, 3, 3, 3, 1], // AI
    [1, 1, 6, 1, 1], // Tech
    [9, 6, 1, 6, 1], // Virus
    [3, 3, 3, 3, 1], // Program
    [1, 1, 1, 1, 1], // Firewall
];

/// Health restored by the row kind onto the column kind. 0 = cannot repair.
const REPAIR_TABLE: [[u8; 5]; 5] = [
    [0, 1, 1, 0, 0], // AI
    [3, 0, 0, 3, 3], // Tech
    [0, 0, 0, 0, 0], // Virus
    [0, 0, 0, 0, 0], // Program
    [0, 0, 0, 0, 0], // Firewall
];

const ANY_DIRECTION: &[Direction] = &Direction::ALL;
const ATTACKER_DIRECTIONS: &[Direction] = &[Direction::Up, Direction::Left];
const DEFENDER_DIRECTIONS: &[Direction] = &[Direction::Down, Direction::Right];

/// The five unit kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// The unit each side must protect.
    AI,
    /// Repairs Firewalls, Programs and the AI.
    Tech,
    /// Kills an AI in one hit.
    Virus,
    /// Generic combat unit.
    Program,
    /// Absorbs damage, deals little.
    Firewall,
}

impl UnitKind {
    /// All kinds in table order.
    pub const ALL: [UnitKind; 5] = [
        UnitKind::AI,
        UnitKind::Tech,
        UnitKind::Virus,
        UnitKind::Program,
        UnitKind::Firewall,
    ];

    /// Row/column index into the rule tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            UnitKind::AI => 0,
            UnitKind::Tech => 1,
            UnitKind::Virus => 2,
            UnitKind::Program => 3,
            UnitKind::Firewall => 4,
        }
    }

    /// Damage this kind inflicts on `target` in one attack.
    #[must_use]
    pub const fn damage_to(self, target: UnitKind) -> u8 {
        DAMAGE_TABLE[self.index()][target.index()]
    }

    /// Health this kind restores on `target`. 0 means the pair cannot repair.
    #[must_use]
    pub const fn repair_to(self, target: UnitKind) -> u8 {
        REPAIR_TABLE[self.index()][target.index()]
    }

    /// Whether an adjacent adversary prevents this kind from moving.
    #[must_use]
    pub const fn immobilized_when_engaged(self) -> bool {
        !matches!(self, UnitKind::Virus | UnitKind::Tech)
    }

    /// Directions this kind may move in when owned by `player`.
    #[must_use]
    pub const fn allowed_directions(self, player: Player) -> &'static [Direction] {
        match (self, player) {
            (UnitKind::Virus | UnitKind::Tech, _) => ANY_DIRECTION,
            (_, Player::Attacker) => ATTACKER_DIRECTIONS,
            (_, Player::Defender) => DEFENDER_DIRECTIONS,
        }
    }

    /// Check a single direction against `allowed_directions`.
    #[must_use]
    pub fn may_move(self, player: Player, dir: Direction) -> bool {
        self.allowed_directions(player).contains(&dir)
    }

    /// Uppercase initial used in board rendering.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            UnitKind::AI => 'A',
            UnitKind::Tech => 'T',
            UnitKind::Virus => 'V',
            UnitKind::Program => 'P',
            UnitKind::Firewall => 'F',
        }
    }
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A unit on the board.
///
/// Units are owned by their board cell. A unit whose health reaches 0 is
/// removed by the board, so a live `Unit` always has `1..=9` health.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Unit {
    /// Owning side.
    pub player: Player,
    /// Unit kind.
    pub kind: UnitKind,
    /// Remaining health, `0..=MAX_HEALTH`.
    pub health: u8,
}

impl Unit {
    /// A full-health unit.
    #[must_use]
    pub const fn new(player: Player, kind: UnitKind) -> Self {
        Self {
            player,
            kind,
            health: MAX_HEALTH,
        }
    }

    /// Same unit with a specific health (clamped).
    #[must_use]
    pub fn with_health(mut self, health: u8) -> Self {
        self.health = health.min(MAX_HEALTH);
        self
    }

    /// Alive units have positive health.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Check if `other` belongs to the opposing side.
    #[must_use]
    pub fn is_adversary(&self, other: &Unit) -> bool {
        self.player != other.player
    }

    /// Lose up to `amount` health, stopping at 0. Returns the health lost.
    pub fn take_damage(&mut self, amount: u8) -> u8 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }

    /// Gain up to `amount` health, stopping at `MAX_HEALTH`. Returns the health gained.
    pub fn heal(&mut self, amount: u8) -> u8 {
        let gained = amount.min(MAX_HEALTH - self.health);
        self.health += gained;
        gained
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.player.initial(), self.kind.initial(), self.health)
    }
}
