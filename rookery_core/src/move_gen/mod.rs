//! Move generation for individual pieces.
//!
//! Geometry lives in [`pawn_moves`] and [`piece_moves`] and is dispatched by
//! matching on [`PieceKind`]. Legal move generation then tries each
//! geometric candidate on a cloned board and throws away anything that leaves
//! the mover's own king in check.

use arrayvec::ArrayVec;

use crate::board::{BoardRepr, CastleSide, CastlingRules, PieceKind, PieceType, Position};

mod pawn_moves;
mod piece_moves;

/// Upper bound on the destinations of a single piece: a queen in the centre of
/// an empty board reaches 27 squares.
pub const MAX_DESTINATIONS: usize = 32;

pub type PositionVec = ArrayVec<Position, MAX_DESTINATIONS>;

/// Destinations for the piece on `from` that respect its movement geometry
/// and board occupancy, without regard to the safety of its own king.
///
/// Returns an empty list if `from` is empty.
pub fn pseudo_legal_moves(board: &BoardRepr, from: Position, castling: CastlingRules) -> PositionVec {
    let mut out = PositionVec::new();
    let Some(&piece) = board.piece_at(from) else {
        return out;
    };
    let color = piece.color();

    match piece.kind() {
        PieceKind::Pawn { .. } => pawn_moves::pawn_moves(board, from, color, &mut out),
        PieceKind::Knight => {
            piece_moves::leaper_moves(board, from, color, &piece_moves::KNIGHT_OFFSETS, &mut out)
        }
        PieceKind::Bishop => {
            piece_moves::slider_moves(board, from, color, &piece_moves::BISHOP_DIRECTIONS, &mut out)
        }
        PieceKind::Rook => {
            piece_moves::slider_moves(board, from, color, &piece_moves::ROOK_DIRECTIONS, &mut out)
        }
        PieceKind::Queen => {
            piece_moves::slider_moves(board, from, color, &piece_moves::QUEEN_DIRECTIONS, &mut out)
        }
        PieceKind::King => {
            piece_moves::leaper_moves(board, from, color, &piece_moves::KING_OFFSETS, &mut out);
            piece_moves::castling_moves(board, from, &piece, castling, &mut out);
        }
    }

    out
}

/// Returns true if the piece on `from` could move onto `target` by geometry
/// alone.
pub fn attacks(board: &BoardRepr, from: Position, target: Position) -> bool {
    pseudo_legal_moves(board, from, CastlingRules::default()).contains(&target)
}

/// Legal destinations for the piece on `from`: its pseudo-legal moves minus
/// any that would leave its own king in check.
pub fn legal_moves(board: &BoardRepr, from: Position, castling: CastlingRules) -> PositionVec {
    let mut moves = pseudo_legal_moves(board, from, castling);
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };

    let castle_blocked = piece.is(PieceType::King)
        && castling == CastlingRules::Standard
        && board.in_check(piece.color());

    moves.retain(|&mut to| {
        if piece.is(PieceType::King) {
            if let Some(side) = CastleSide::from_king_move(piece.color(), from, to) {
                if castle_blocked || !castle_path_is_safe(board, from, side, castling) {
                    return false;
                }
            }
        }
        !would_expose_own_king(board, from, to)
    });

    moves
}

fn castle_path_is_safe(
    board: &BoardRepr,
    from: Position,
    side: CastleSide,
    castling: CastlingRules,
) -> bool {
    match castling {
        CastlingRules::Permissive => true,
        CastlingRules::Standard => side
            .squares_crossed(from)
            .all(|square| !would_expose_own_king(board, from, square)),
    }
}

/// Tries moving the piece on `from` to `to` on a copy of the board and
/// reports whether its own king is left in check, or standing next to the
/// opposing king.
///
/// The board passed in is never modified. Returns false if `from` is empty.
pub fn would_expose_own_king(board: &BoardRepr, from: Position, to: Position) -> bool {
    let Some(&piece) = board.piece_at(from) else {
        return false;
    };

    let mut trial = board.clone();
    // Which piece a pawn promotes into cannot affect its own king's safety.
    trial.execute(piece.id(), from, to, PieceType::Queen);

    trial.in_check(piece.color()) || trial.kings_adjacent()
}
