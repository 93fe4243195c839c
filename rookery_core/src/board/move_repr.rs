use std::fmt::Debug;

use bitflags::bitflags;

use super::{CastleSide, Color, PieceId, PieceType, Position};

bitflags! {
    /// Annotations derived while a move is being resolved.
    ///
    /// Can be accessed from a move via the [`Move::flags`] method. Convenience
    /// methods such as [`Move::is_en_passant`] and [`Move::is_check`] are
    /// provided.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u8 {
        /// The initial double step of a pawn. The pawn may be captured en
        /// passant on the very next move.
        const DOUBLE_PAWN_PUSH = 0b0001;
        /// The capture was en passant, so the captured pawn was not on the
        /// destination square.
        const EN_PASSANT       = 0b0010;
        /// The move left the opponent in check.
        const CHECK            = 0b0100;
        /// The move left the opponent checkmated. Never set together with
        /// [`CHECK`](Self::CHECK).
        const CHECKMATE        = 0b1000;
    }
}

/// A piece taken by a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    pub piece: PieceId,
    pub color: Color,
    pub piece_type: PieceType,
    /// Where the captured piece stood. Equal to the destination of the move
    /// except for en passant captures.
    pub position: Position,
}

/// The piece a pawn turned into on reaching the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Promotion {
    pub piece: PieceId,
    pub piece_type: PieceType,
}

/// Record of a single applied move.
///
/// The mover and the source and destination squares are fixed at creation.
/// Everything else is filled in by [`Game`](super::Game) while it resolves the
/// move, after which the record is never modified again.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    piece: PieceId,
    color: Color,
    piece_type: PieceType,
    from: Position,
    to: Position,
    capture: Option<Capture>,
    castle: Option<CastleSide>,
    promotion: Option<Promotion>,
    flags: MoveFlags,
}

impl Move {
    pub const fn new(
        piece: PieceId,
        color: Color,
        piece_type: PieceType,
        from: Position,
        to: Position,
    ) -> Self {
        Self {
            piece,
            color,
            piece_type,
            from,
            to,
            capture: None,
            castle: None,
            promotion: None,
            flags: MoveFlags::empty(),
        }
    }

    /// Id of the piece that moved. For a promotion this is the pawn.
    pub const fn piece(&self) -> PieceId {
        self.piece
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub const fn from(&self) -> Position {
        self.from
    }

    pub const fn to(&self) -> Position {
        self.to
    }

    pub const fn capture(&self) -> Option<Capture> {
        self.capture
    }

    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Square the captured piece stood on, if this move captured anything.
    pub fn capture_position(&self) -> Option<Position> {
        self.capture.map(|capture| capture.position)
    }

    pub const fn castle(&self) -> Option<CastleSide> {
        self.castle
    }

    pub const fn is_castle(&self) -> bool {
        self.castle.is_some()
    }

    pub const fn promotion(&self) -> Option<Promotion> {
        self.promotion
    }

    pub const fn flags(&self) -> MoveFlags {
        self.flags
    }

    pub const fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    pub const fn is_double_pawn_push(&self) -> bool {
        self.flags.contains(MoveFlags::DOUBLE_PAWN_PUSH)
    }

    pub const fn is_check(&self) -> bool {
        self.flags.contains(MoveFlags::CHECK)
    }

    pub const fn is_checkmate(&self) -> bool {
        self.flags.contains(MoveFlags::CHECKMATE)
    }

    pub(crate) fn set_capture(&mut self, capture: Capture) {
        self.capture = Some(capture);
        self.flags.set(MoveFlags::EN_PASSANT, capture.position != self.to);
    }

    pub(crate) fn set_double_pawn_push(&mut self) {
        self.flags |= MoveFlags::DOUBLE_PAWN_PUSH;
    }

    pub(crate) fn set_castle(&mut self, side: CastleSide) {
        self.castle = Some(side);
    }

    pub(crate) fn set_promotion(&mut self, promotion: Promotion) {
        self.promotion = Some(promotion);
    }

    pub(crate) fn set_check(&mut self) {
        self.flags.remove(MoveFlags::CHECKMATE);
        self.flags |= MoveFlags::CHECK;
    }

    pub(crate) fn set_checkmate(&mut self) {
        self.flags.remove(MoveFlags::CHECK);
        self.flags |= MoveFlags::CHECKMATE;
    }
}

impl Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Move")
            .field("piece", &self.piece)
            .field("color", &self.color)
            .field("piece_type", &self.piece_type)
            .field("from", &format_args!("{}", self.from))
            .field("to", &format_args!("{}", self.to))
            .field("capture", &self.capture)
            .field("castle", &self.castle)
            .field("promotion", &self.promotion)
            .field("flags", &self.flags)
            .finish()
    }
}
