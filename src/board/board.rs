//! Immutable N×N board value

use std::fmt;
use std::str::FromStr;

use super::bitboard::Bitboard;
use super::{Player, Pos, MAX_BOARD_SIZE};

/// Errors produced when parsing the controller's board text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Text is not a bracketed list of rows
    #[error("malformed board text: {0}")]
    Syntax(String),

    /// Side length outside 1..=16
    #[error("unsupported board size {0} (expected 1..={max})", max = MAX_BOARD_SIZE)]
    UnsupportedSize(usize),

    /// A row whose length differs from the number of rows
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    /// A cell value other than 0, 1 or 2
    #[error("invalid cell {value:?} at column {col}, row {row}")]
    InvalidCell { col: usize, row: usize, value: String },
}

/// Game board.
///
/// A plain value: equal cell contents compare and hash equal, so boards can
/// key the transposition cache directly. Moves never mutate a board in place;
/// the rules engine returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    /// Dark disks bitboard
    dark: Bitboard,
    /// Light disks bitboard
    light: Bitboard,
}

impl Board {
    /// Empty board with the given side length.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0 or larger than [`MAX_BOARD_SIZE`].
    pub fn empty(size: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} out of range"
        );
        Self {
            size: size as u8,
            dark: Bitboard::new(),
            light: Bitboard::new(),
        }
    }

    /// Standard starting position: two disks of each color in the center.
    ///
    /// # Panics
    ///
    /// Panics if `size` is odd, smaller than 2, or larger than [`MAX_BOARD_SIZE`].
    pub fn initial(size: usize) -> Self {
        assert!(size >= 2 && size % 2 == 0, "starting position needs an even size");
        let mut board = Self::empty(size);
        let i = (size / 2) as u8;
        board.place(Pos::new(i - 1, i - 1), Player::Light);
        board.place(Pos::new(i, i), Player::Light);
        board.place(Pos::new(i, i - 1), Player::Dark);
        board.place(Pos::new(i - 1, i), Player::Dark);
        board
    }

    /// Build a board from rows of protocol codes (0 empty, 1 dark, 2 light).
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, ParseBoardError> {
        let size = rows.len();
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ParseBoardError::UnsupportedSize(size));
        }

        let mut board = Self::empty(size);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(ParseBoardError::NotSquare {
                    row,
                    len: cells.len(),
                    size,
                });
            }
            for (col, &code) in cells.iter().enumerate() {
                match (code, Player::from_code(code)) {
                    (0, _) => {}
                    (_, Some(player)) => board.place(Pos::new(col as u8, row as u8), player),
                    (_, None) => {
                        return Err(ParseBoardError::InvalidCell {
                            col,
                            row,
                            value: code.to_string(),
                        })
                    }
                }
            }
        }
        Ok(board)
    }

    /// Rows of protocol codes, the inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        let size = self.size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| {
                        self.get(Pos::new(col as u8, row as u8))
                            .map_or(0, Player::code)
                    })
                    .collect()
            })
            .collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        (pos.col as usize) < self.size() && (pos.row as usize) < self.size()
    }

    /// Get the disk at position, `None` when empty
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Player> {
        let idx = pos.to_index(self.size());
        if self.dark.get(idx) {
            Some(Player::Dark)
        } else if self.light.get(idx) {
            Some(Player::Light)
        } else {
            None
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Put a disk of `player` at `pos`, replacing whatever was there.
    /// Used by the rules engine to place and flip disks on a fresh copy.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        debug_assert!(self.contains(pos));
        let idx = pos.to_index(self.size());
        match player {
            Player::Dark => {
                self.dark.set(idx);
                self.light.clear(idx);
            }
            Player::Light => {
                self.light.set(idx);
                self.dark.clear(idx);
            }
        }
    }

    /// Raw disk counts `(dark, light)`
    #[inline]
    pub fn score(&self) -> (u32, u32) {
        (self.dark.count(), self.light.count())
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> u32 {
        (self.size() * self.size()) as u32 - self.dark.count() - self.light.count()
    }

    /// The four corner cells (one cell on a 1x1 board, repeated).
    pub fn corners(&self) -> [Pos; 4] {
        let last = (self.size() - 1) as u8;
        [
            Pos::new(0, 0),
            Pos::new(last, 0),
            Pos::new(0, last),
            Pos::new(last, last),
        ]
    }
}

/// Parses the controller's list-of-rows text, e.g. `[[0, 1], [2, 0]]`.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let inner = compact
            .strip_prefix("[[")
            .and_then(|rest| rest.strip_suffix("]]"))
            .ok_or_else(|| ParseBoardError::Syntax(s.trim().to_string()))?;

        let mut rows = Vec::new();
        for (row, text) in inner.split("],[").enumerate() {
            let mut cells = Vec::new();
            for (col, cell) in text.split(',').enumerate() {
                if cell.contains(&['[', ']'][..]) {
                    return Err(ParseBoardError::Syntax(s.trim().to_string()));
                }
                let code = cell.parse::<u8>().map_err(|_| ParseBoardError::InvalidCell {
                    col,
                    row,
                    value: cell.to_string(),
                })?;
                cells.push(code);
            }
            rows.push(cells);
        }

        Self::from_rows(&rows)
    }
}

/// Renders the same list-of-rows text that [`FromStr`] accepts.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (r, row) in self.to_rows().iter().enumerate() {
            if r > 0 {
                f.write_str(", ")?;
            }
            f.write_str("[")?;
            for (c, code) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{code}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}
