//! The 5×5 grid and read-only queries over it.
//!
//! Cells are stored arena-style as a flat array of optional units. Reading a
//! cell off the board is a caller bug and panics; rule-level bounds checks
//! go through `Board::is_in_bounds` first.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Coord, BOARD_DIM};
use super::player::Player;
use super::unit::{Unit, UnitKind};

const CELL_COUNT: usize = (BOARD_DIM as usize) * (BOARD_DIM as usize);

/// Starting layout: (row, col, owner, kind). All units start at full health.
const INITIAL_LAYOUT: [(i8, i8, Player, UnitKind); 12] = [
    (0, 0, Player::Defender, UnitKind::AI),
    (0, 1, Player::Defender, UnitKind::Tech),
    (0, 2, Player::Defender, UnitKind::Firewall),
    (1, 0, Player::Defender, UnitKind::Tech),
    (1, 1, Player::Defender, UnitKind::Program),
    (2, 0, Player::Defender, UnitKind::Firewall),
    (2, 4, Player::Attacker, UnitKind::Program),
    (3, 3, Player::Attacker, UnitKind::Firewall),
    (3, 4, Player::Attacker, UnitKind::Virus),
    (4, 2, Player::Attacker, UnitKind::Program),
    (4, 3, Player::Attacker, UnitKind::Virus),
    (4, 4, Player::Attacker, UnitKind::AI),
];

/// Result of damaging one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DamageReport {
    /// The unit as it was before the hit.
    pub before: Unit,
    /// Health actually lost (after clamping at 0).
    pub lost: u8,
    /// True if the unit was removed from the board.
    pub destroyed: bool,
}

/// The game grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Unit>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no units.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// The fixed starting position.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (row, col, player, kind) in INITIAL_LAYOUT {
            board.place(Coord::new(row, col), Unit::new(player, kind));
        }
        board
    }

    /// Check if a coordinate lies on the board.
    #[must_use]
    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        pos.is_in_bounds()
    }

    /// The unit at `pos`, if any. Panics if `pos` is off the board.
    #[must_use]
    pub fn unit_at(&self, pos: Coord) -> Option<&Unit> {
        self.cells[pos.index()].as_ref()
    }

    /// Check if `pos` holds no unit. Panics if `pos` is off the board.
    #[must_use]
    pub fn is_empty(&self, pos: Coord) -> bool {
        self.unit_at(pos).is_none()
    }

    /// Orthogonal adjacency.
    #[must_use]
    pub fn is_adjacent(&self, a: Coord, b: Coord) -> bool {
        a.is_adjacent(b)
    }

    /// True iff the unit at `pos` has an adversary in one of its 4 orthogonal
    /// neighbours. An empty cell is never engaged.
    #[must_use]
    pub fn is_engaged(&self, pos: Coord) -> bool {
        let Some(unit) = self.unit_at(pos) else {
            return false;
        };
        pos.iter_adjacent()
            .filter_map(|n| self.unit_at(n))
            .any(|other| unit.is_adversary(other))
    }

    /// Surrounding cells including diagonals, clipped to the board.
    #[must_use]
    pub fn neighbors_8(&self, pos: Coord) -> SmallVec<[Coord; 8]> {
        pos.neighbors_8()
    }

    /// Iterate over occupied cells, row-major.
    pub fn units(&self) -> impl Iterator<Item = (Coord, &Unit)> {
        Coord::all().filter_map(move |c| self.unit_at(c).map(|u| (c, u)))
    }

    /// Iterate over one player's units, row-major.
    pub fn units_of(&self, player: Player) -> impl Iterator<Item = (Coord, &Unit)> {
        self.units().filter(move |(_, u)| u.player == player)
    }

    /// Number of units on the board.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Check if `player` still has an AI on the board.
    #[must_use]
    pub fn ai_alive(&self, player: Player) -> bool {
        self.units_of(player).any(|(_, u)| u.kind == UnitKind::AI)
    }

    // === Mutation ===

    /// Put a unit on a cell, returning whatever was there.
    pub fn place(&mut self, pos: Coord, unit: Unit) -> Option<Unit> {
        self.cells[pos.index()].replace(unit)
    }

    /// Take the unit off a cell.
    pub fn remove(&mut self, pos: Coord) -> Option<Unit> {
        self.cells[pos.index()].take()
    }

    /// Relocate the unit at `src` to the empty cell `dst`.
    pub(crate) fn relocate(&mut self, src: Coord, dst: Coord) {
        debug_assert!(self.is_empty(dst), "relocating onto occupied cell {dst}");
        self.cells[dst.index()] = self.cells[src.index()].take();
    }

    /// Damage the unit at `pos`, removing it if its health reaches 0.
    pub(crate) fn damage(&mut self, pos: Coord, amount: u8) -> Option<DamageReport> {
        let slot = &mut self.cells[pos.index()];
        let unit = slot.as_mut()?;
        let before = *unit;
        let lost = unit.take_damage(amount);
        let destroyed = !unit.is_alive();
        if destroyed {
            *slot = None;
        }
        Some(DamageReport {
            before,
            lost,
            destroyed,
        })
    }

    /// Heal the unit at `pos`, returning the health actually gained.
    pub(crate) fn heal(&mut self, pos: Coord, amount: u8) -> Option<u8> {
        self.cells[pos.index()].as_mut().map(|u| u.heal(amount))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_DIM {
            write!(f, " {col}  ")?;
        }
        writeln!(f)?;
        for row in 0..BOARD_DIM {
            let label = Coord::new(row, 0).to_string();
            write!(f, "{}: ", &label[..1])?;
            for col in 0..BOARD_DIM {
                match self.unit_at(Coord::new(row, col)) {
                    Some(unit) => write!(f, "{unit} ")?,
                    None => write!(f, " .  ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(board.unit_count(), 12);
        assert_eq!(board.units_of(Player::Attacker).count(), 6);
        assert_eq!(board.units_of(Player::Defender).count(), 6);

        let ai = board.unit_at(Coord::new(0, 0)).unwrap();
        assert_eq!((ai.player, ai.kind, ai.health), (Player::Defender, UnitKind::AI, 9));
        let ai = board.unit_at(Coord::new(4, 4)).unwrap();
        assert_eq!((ai.player, ai.kind), (Player::Attacker, UnitKind::AI));
        assert!(board.is_empty(Coord::new(2, 2)));
        assert!(board.units().all(|(_, u)| u.health == 9));
    }

    #[test]
    fn test_engagement() {
        let mut board = Board::empty();
        board.place(Coord::new(2, 2), Unit::new(Player::Attacker, UnitKind::Program));
        assert!(!board.is_engaged(Coord::new(2, 2)));

        // Diagonal adversary does not engage
        board.place(Coord::new(1, 1), Unit::new(Player::Defender, UnitKind::Program));
        assert!(!board.is_engaged(Coord::new(2, 2)));

        // Friendly neighbour does not engage
        board.place(Coord::new(2, 3), Unit::new(Player::Attacker, UnitKind::Tech));
        assert!(!board.is_engaged(Coord::new(2, 2)));

        board.place(Coord::new(1, 2), Unit::new(Player::Defender, UnitKind::Firewall));
        assert!(board.is_engaged(Coord::new(2, 2)));
        assert!(board.is_engaged(Coord::new(1, 2)));
        assert!(!board.is_engaged(Coord::new(4, 4)));
    }

    #[test]
    fn test_initial_engagement() {
        let board = Board::initial();
        assert!(!board.units().any(|(c, _)| board.is_engaged(c)));
    }

    #[test]
    fn test_damage_removes_dead_units() {
        let mut board = Board::empty();
        let pos = Coord::new(3, 3);
        board.place(pos, Unit::new(Player::Attacker, UnitKind::Firewall).with_health(3));

        let report = board.damage(pos, 2).unwrap();
        assert_eq!(report.lost, 2);
        assert!(!report.destroyed);
        assert_eq!(board.unit_at(pos).unwrap().health, 1);

        let report = board.damage(pos, 6).unwrap();
        assert_eq!(report.lost, 1);
        assert!(report.destroyed);
        assert!(board.is_empty(pos));
        assert!(board.damage(pos, 1).is_none());
    }

    #[test]
    fn test_relocate_and_heal() {
        let mut board = Board::empty();
        board.place(Coord::new(1, 1), Unit::new(Player::Defender, UnitKind::Tech).with_health(7));
        board.relocate(Coord::new(1, 1), Coord::new(1, 2));
        assert!(board.is_empty(Coord::new(1, 1)));
        assert_eq!(board.heal(Coord::new(1, 2), 3), Some(2));
        assert_eq!(board.unit_at(Coord::new(1, 2)).unwrap().health, 9);
    }

    #[test]
    fn test_ai_alive() {
        let mut board = Board::initial();
        assert!(board.ai_alive(Player::Attacker));
        board.remove(Coord::new(4, 4));
        assert!(!board.ai_alive(Player::Attacker));
        assert!(board.ai_alive(Player::Defender));
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn test_unit_at_out_of_bounds_panics() {
        let board = Board::initial();
        let _ = board.unit_at(Coord::new(5, 0));
    }

    #[test]
    fn test_display() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("A: dA9 dT9 dF9"));
        assert!(lines[5].starts_with("E:  .   .  aP9 aV9 aA9"));
    }
}
