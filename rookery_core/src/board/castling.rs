use super::{Color, Position};

/// Column the king must stand on for castling to be possible.
pub const KING_HOME_COL: u8 = 4;

/// The square a king of `color` starts the game on, and the only square it
/// may castle from.
pub const fn king_home(color: Color) -> Position {
    Position::new_unchecked(color.home_row(), KING_HOME_COL)
}

/// Which rook a castling move pairs the king with.
///
/// Castling is recognised purely from the king's displacement along its row:
/// two columns towards the king-side rook, or three columns towards the
/// queen-side rook. The rook then lands on the square next to the king's new
/// position, on the side the king came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column offset travelled by the king.
    pub const fn king_displacement(self) -> i8 {
        match self {
            CastleSide::KingSide => 2,
            CastleSide::QueenSide => -3,
        }
    }

    /// Sign of the king's displacement, i.e. the direction of the rook.
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Column of the corner the castling rook starts on.
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    pub const fn from_king_displacement(d_col: i8) -> Option<Self> {
        match d_col {
            2 => Some(CastleSide::KingSide),
            -3 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Works out whether a move of `color`'s king from `from` to `to` is a
    /// castle. Only moves starting on the king's home square can be.
    pub const fn from_king_move(color: Color, from: Position, to: Position) -> Option<Self> {
        let home = king_home(color);
        if from.row() != home.row() || from.col() != home.col() || from.row() != to.row() {
            return None;
        }
        Self::from_king_displacement(to.col() as i8 - from.col() as i8)
    }

    /// Returns the `(from, to)` squares of the rook for a king castling from
    /// `king_from`, or [`None`] if the king's destination is off the board.
    pub const fn rook_squares(self, king_from: Position) -> Option<(Position, Position)> {
        let Some(king_to) = king_from.offset(0, self.king_displacement()) else {
            return None;
        };
        let Some(rook_to) = king_to.offset(0, -self.direction()) else {
            return None;
        };
        let rook_from = Position::new_unchecked(king_from.row(), self.rook_col());
        Some((rook_from, rook_to))
    }

    /// Squares strictly between a king on `king_from` and this side's rook.
    pub fn squares_between(self, king_from: Position) -> impl Iterator<Item = Position> {
        let row = king_from.row();
        let (low, high) = match self {
            CastleSide::KingSide => (king_from.col() + 1, self.rook_col()),
            CastleSide::QueenSide => (self.rook_col() + 1, king_from.col()),
        };
        (low..high).map(move |col| Position::new_unchecked(row, col))
    }

    /// Squares the king passes over before landing, not including its start
    /// or destination square.
    pub fn squares_crossed(self, king_from: Position) -> impl Iterator<Item = Position> {
        let steps = self.king_displacement().unsigned_abs() - 1;
        let direction = self.direction();
        (1..=steps as i8).filter_map(move |step| king_from.offset(0, direction * step))
    }

    pub const fn notation(self) -> &'static str {
        match self {
            CastleSide::KingSide => "O-O",
            CastleSide::QueenSide => "O-O-O",
        }
    }
}

/// How strictly castling candidates are checked during move generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CastlingRules {
    /// The king and the rook must not have moved, every square between them
    /// must be empty, the king must not be in check, and the king may not
    /// pass over or land on an attacked square.
    #[default]
    Standard,
    /// Only requires a friendly rook on the corner and empty squares between
    /// it and the king. Move history and attacked squares are ignored.
    Permissive,
}
