use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use log::warn;
use thiserror::Error;

use super::{
    BoardSpace, Capture, CastleSide, Color, Piece, PieceArena, PieceId, PieceType, PlayerPieceSet,
    Position, Promotion,
};
use crate::move_gen;

/// Text diagram of the standard starting position. Row 0 (Black's back rank)
/// comes first, uppercase letters are White.
pub const STARTING_POSITION_DIAGRAM: &str = "
    rnbqkbnr
    pppppppp
    ........
    ........
    ........
    ........
    PPPPPPPP
    RNBQKBNR
";

/// Side effects of resolving a move on the board, used to annotate the
/// corresponding [`Move`](super::Move).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MoveEffects {
    pub capture: Option<Capture>,
    pub double_pawn_push: bool,
    pub castle: Option<CastleSide>,
    pub promotion: Option<Promotion>,
}

/// The pieces on the board, the arena owning them, and both players' piece
/// sets.
///
/// The grid is the only record of where a piece stands. Alive pieces are
/// exactly the ones on the grid; [`PlayerPieceSet`]s mirror this as a ledger.
///
/// This struct is cheap to clone, which is how speculative moves are tried
/// without touching the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRepr {
    grid: [[Option<PieceId>; 8]; 8],
    arena: PieceArena,
    white: PlayerPieceSet,
    black: PlayerPieceSet,
}

impl Default for BoardRepr {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardRepr {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
            arena: PieceArena::default(),
            white: PlayerPieceSet::new(Color::White),
            black: PlayerPieceSet::new(Color::Black),
        }
    }

    /// The 32 pieces in their standard starting squares.
    pub fn starting_position() -> Self {
        STARTING_POSITION_DIAGRAM
            .parse()
            .expect("starting position diagram is valid")
    }

    pub fn space(&self, position: Position) -> BoardSpace {
        BoardSpace::new(position, self.occupant(position))
    }

    /// Looks up a space by raw coordinates, returning [`None`] for anything
    /// off the board.
    pub fn space_at(&self, row: i8, col: i8) -> Option<BoardSpace> {
        Position::new(row, col).map(|position| self.space(position))
    }

    pub fn occupant(&self, position: Position) -> Option<PieceId> {
        self.grid[position.row() as usize][position.col() as usize]
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.occupant(position).map(|id| &self.arena[id])
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.arena.get(id)
    }

    pub fn arena(&self) -> &PieceArena {
        &self.arena
    }

    pub fn piece_set(&self, color: Color) -> &PlayerPieceSet {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn piece_set_mut(&mut self, color: Color) -> &mut PlayerPieceSet {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Finds where a piece stands. Captured pieces have no position.
    pub fn position_of(&self, id: PieceId) -> Option<Position> {
        Position::all().find(|&position| self.occupant(position) == Some(id))
    }

    /// Position of the given color's king, if it has one on the board.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = self
            .piece_set(color)
            .alive_pieces_of_type(&self.arena, PieceType::King)
            .next()?;
        self.position_of(king)
    }

    /// Iterates over every occupied square, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        Position::all()
            .filter_map(move |position| self.piece_at(position).map(|piece| (position, piece)))
    }

    /// Iterates over the squares occupied by the given color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Creates a new piece and puts it on the board. Anything already on that
    /// square is captured first.
    ///
    /// # Panics
    ///
    /// Panics once more than [`PieceArena::CAPACITY`] pieces have been created
    /// on this board, counting captured ones.
    pub fn add_piece(&mut self, color: Color, piece_type: PieceType, position: Position) -> PieceId {
        if let Some(existing) = self.remove_piece(position) {
            warn!("{existing:?} on {position} replaced by a new {color} {piece_type}");
        }

        let id = match color {
            Color::White => self.white.add_piece(&mut self.arena, piece_type),
            Color::Black => self.black.add_piece(&mut self.arena, piece_type),
        };
        self.set_occupant(position, Some(id));
        id
    }

    /// Takes a piece off the board, marking it captured in its owner's set.
    pub fn remove_piece(&mut self, position: Position) -> Option<PieceId> {
        let id = self.occupant(position)?;
        self.set_occupant(position, None);
        let color = self.arena[id].color();
        self.piece_set_mut(color).capture(id);
        Some(id)
    }

    fn set_occupant(&mut self, position: Position, occupant: Option<PieceId>) {
        self.grid[position.row() as usize][position.col() as usize] = occupant;
    }

    fn relocate(&mut self, from: Position, to: Position) {
        if let Some(id) = self.occupant(from) {
            self.set_occupant(from, None);
            self.set_occupant(to, Some(id));
            self.arena[id].mark_moved();
        }
    }

    fn capture_at(&mut self, position: Position) -> Option<Capture> {
        let piece = *self.piece_at(position)?;
        self.remove_piece(position);
        Some(Capture {
            piece: piece.id(),
            color: piece.color(),
            piece_type: piece.piece_type(),
            position,
        })
    }

    fn clear_en_passant(&mut self) {
        for piece in self.arena.iter_mut() {
            piece.set_en_passant_eligible(false);
        }
    }

    /// Returns the opposing pawn that a pawn of `color` moving onto `to`
    /// would capture en passant, along with its square.
    fn en_passant_target(&self, color: Color, from: Position, to: Position) -> Option<Position> {
        if from.col() == to.col() {
            return None;
        }

        let behind = to.offset(-color.forward(), 0)?;
        let target = self.piece_at(behind)?;
        (target.color() != color && target.is_en_passant_eligible()).then_some(behind)
    }

    /// Performs every board mutation of a move, in order: en passant capture,
    /// clearing en passant eligibility, ordinary capture, relocation, the
    /// castling rook, and promotion.
    ///
    /// `mover` must be the piece standing on `from`. No legality checks are
    /// performed.
    pub(crate) fn execute(
        &mut self,
        mover: PieceId,
        from: Position,
        to: Position,
        promotion: PieceType,
    ) -> MoveEffects {
        debug_assert_eq!(self.occupant(from), Some(mover));

        let mut effects = MoveEffects::default();
        let piece = self.arena[mover];
        let color = piece.color();

        if piece.is(PieceType::Pawn) {
            if let Some(target) = self.en_passant_target(color, from, to) {
                effects.capture = self.capture_at(target);
            }
        }

        // Has to happen after the en passant check above but before this
        // move's own double step sets eligibility.
        self.clear_en_passant();

        if let Some(capture) = self.capture_at(to) {
            if effects.capture.is_some() {
                warn!("{from}{to} captured both en passant and on its destination");
            } else {
                effects.capture = Some(capture);
            }
        }

        self.relocate(from, to);

        if piece.is(PieceType::Pawn) && from.row().abs_diff(to.row()) == 2 {
            self.arena[mover].set_en_passant_eligible(true);
            effects.double_pawn_push = true;
        }

        if piece.is(PieceType::King) {
            effects.castle = self.castle_rook(color, from, to);
        }

        if piece.is(PieceType::Pawn) && to.row() == color.promotion_row() {
            effects.promotion = Some(self.promote(color, mover, to, promotion));
        }

        effects
    }

    fn castle_rook(&mut self, color: Color, king_from: Position, king_to: Position) -> Option<CastleSide> {
        let side = CastleSide::from_king_move(color, king_from, king_to)?;
        let (rook_from, rook_to) = side.rook_squares(king_from)?;

        match self.piece_at(rook_from) {
            Some(rook) if rook.is(PieceType::Rook) && rook.color() == color => {
                self.relocate(rook_from, rook_to);
                Some(side)
            }
            _ => {
                warn!("{color} king castled from {king_from} without a rook on {rook_from}");
                None
            }
        }
    }

    fn promote(&mut self, color: Color, pawn: PieceId, to: Position, piece_type: PieceType) -> Promotion {
        let piece_type = if piece_type.is_promotion_target() {
            piece_type
        } else {
            warn!("cannot promote into a {piece_type}, using a queen");
            PieceType::Queen
        };

        self.set_occupant(to, None);
        let promoted = match color {
            Color::White => self.white.promote(&mut self.arena, pawn, piece_type),
            Color::Black => self.black.promote(&mut self.arena, pawn, piece_type),
        };
        self.set_occupant(to, Some(promoted));

        Promotion {
            piece: promoted,
            piece_type,
        }
    }

    /// Returns true if any alive non-king piece of the opposing color could
    /// move onto `color`'s king, going by geometry alone.
    ///
    /// A color without a king on the board is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_position(color) else {
            return false;
        };

        self.pieces_of(color.flip())
            .filter(|(_, piece)| !piece.is(PieceType::King))
            .any(|(position, _)| move_gen::attacks(self, position, king))
    }

    /// Returns true if the two kings stand on neighbouring squares.
    pub fn kings_adjacent(&self) -> bool {
        match (
            self.king_position(Color::White),
            self.king_position(Color::Black),
        ) {
            (Some(white), Some(black)) => {
                white.row().abs_diff(black.row()) <= 1 && white.col().abs_diff(black.col()) <= 1
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("Unexpected character `{0}` in board diagram")]
    UnexpectedChar(char),
    #[error("Board diagram describes {0} squares, expected 64")]
    WrongSquareCount(usize),
}

impl FromStr for BoardRepr {
    type Err = ParseBoardError;

    /// Parses an 8x8 diagram, one character per square starting at row 0.
    /// `.` marks an empty square and FEN letters mark pieces. Whitespace is
    /// ignored. Pieces are created in reading order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
        if squares.len() != 64 {
            return Err(ParseBoardError::WrongSquareCount(squares.len()));
        }

        let mut board = Self::empty();
        for (position, c) in Position::all().zip(squares) {
            if c == '.' {
                continue;
            }

            let piece_type = PieceType::try_from_char(c).ok_or(ParseBoardError::UnexpectedChar(c))?;
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            board.add_piece(color, piece_type, position);
        }

        Ok(board)
    }
}

impl Display for BoardRepr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                match self.piece_at(Position::new_unchecked(row, col)) {
                    Some(piece) => f.write_char(piece.as_fen_char())?,
                    None => f.write_char('.')?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
