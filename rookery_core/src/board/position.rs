use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use thiserror::Error;

/// A coordinate on the 8x8 board.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank (rank
/// 1). Column 0 is the a-file. A [`Position`] can only ever hold an on-board
/// coordinate; anything that may step off the board returns an
/// [`Option<Position>`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub const BOARD_SIZE: u8 = 8;

    /// Creates a new [`Position`], returning [`None`] if either coordinate is
    /// outside of `0..8`.
    pub const fn new(row: i8, col: i8) -> Option<Self> {
        if row < 0 || col < 0 || row >= Self::BOARD_SIZE as i8 || col >= Self::BOARD_SIZE as i8 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Creates a new [`Position`] without bounds checking. Out of range
    /// coordinates wrap around the board.
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self {
            row: row % Self::BOARD_SIZE,
            col: col % Self::BOARD_SIZE,
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position shifted by the given number of rows and columns,
    /// or [`None`] if that would leave the board.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// The file letter of this position, `a` through `h`.
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// The rank number of this position as used in algebraic notation, 1
    /// through 8.
    pub const fn rank(self) -> u8 {
        Self::BOARD_SIZE - self.row
    }

    /// Iterates over every position on the board, row by row starting from
    /// row 0.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..Self::BOARD_SIZE)
            .flat_map(|row| (0..Self::BOARD_SIZE).map(move |col| Position::new_unchecked(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.file_char())?;
        f.write_char((self.rank() + b'0') as char)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePositionError {
    #[error("Expected a file letter followed by a rank digit, got `{0}`")]
    Malformed(String),
    #[error("Square `{0}` is off the board")]
    OffBoard(String),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut char_iter = s.chars();
        let (Some(file), Some(rank), None) = (char_iter.next(), char_iter.next(), char_iter.next())
        else {
            return Err(ParsePositionError::Malformed(s.to_string()));
        };

        if !file.is_ascii_alphabetic() || !rank.is_ascii_digit() {
            return Err(ParsePositionError::Malformed(s.to_string()));
        }

        let col = (file as i32) - ('a' as i32);
        let rank = (rank as i32) - ('0' as i32);
        if !(0..8).contains(&col) || !(1..=8).contains(&rank) {
            return Err(ParsePositionError::OffBoard(s.to_string()));
        }

        Ok(Position::new_unchecked((8 - rank) as u8, col as u8))
    }
}
