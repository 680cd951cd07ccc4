//! Board representation for Othello

pub mod bitboard;
pub mod board;


use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, ParseBoardError};

/// Largest supported board side (16x16)
pub const MAX_BOARD_SIZE: usize = 16;
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE; // 256

/// Disk colors. Dark moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Dark,
    Light,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// Protocol code: 1 for dark, 2 for light.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Player::Dark => 1,
            Player::Light => 2,
        }
    }

    /// Inverse of [`Player::code`]. Returns `None` for 0 (empty) and unknown codes.
    #[inline]
    pub fn from_code(code: u8) -> Option<Player> {
        match code {
            1 => Some(Player::Dark),
            2 => Some(Player::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Dark => f.write_str("dark"),
            Player::Light => f.write_str("light"),
        }
    }
}

/// Position on the board, `(column, row)`.
///
/// Ordering is column-major, matching the order in which the rules engine
/// enumerates moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!((col as usize) < MAX_BOARD_SIZE && (row as usize) < MAX_BOARD_SIZE);
        Self { col, row }
    }

    /// Cell index on a board of the given side length (row-major).
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32, size: usize) -> bool {
        col >= 0 && col < size as i32 && row >= 0 && row < size as i32
    }
}

/// Rendered the way the controller expects a move: `"<col> <row>"`.
impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.col, self.row)
    }
}
