use super::PositionVec;
use crate::board::{
    king_home, BoardRepr, CastleSide, CastlingRules, Color, Piece, PieceType, Position,
};

pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(super) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = KING_OFFSETS;

/// Single-step moves to each offset that is on the board and not occupied by
/// a friendly piece.
pub(super) fn leaper_moves(
    board: &BoardRepr,
    from: Position,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut PositionVec,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };

        if board.piece_at(to).map_or(true, |piece| piece.color() != color) {
            out.push(to);
        }
    }
}

/// Slides along each direction until leaving the board or hitting a piece,
/// which is included only if it belongs to the opponent.
pub(super) fn slider_moves(
    board: &BoardRepr,
    from: Position,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut PositionVec,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;

        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color() != color {
                        out.push(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Castling destinations for `king` standing on `from`. Nothing is offered
/// unless the king is on its home square.
///
/// Only the board layout is checked here (and, under
/// [`CastlingRules::Standard`], whether the king and rook have moved). Checks
/// on attacked squares belong to legal move generation.
pub(super) fn castling_moves(
    board: &BoardRepr,
    from: Position,
    king: &Piece,
    rules: CastlingRules,
    out: &mut PositionVec,
) {
    if from != king_home(king.color()) {
        return;
    }

    if rules == CastlingRules::Standard && king.has_moved() {
        return;
    }

    for side in CastleSide::ALL {
        let Some(to) = from.offset(0, side.king_displacement()) else {
            continue;
        };

        let rook_square = Position::new_unchecked(from.row(), side.rook_col());
        let rook_ready = board.piece_at(rook_square).is_some_and(|rook| {
            rook.is(PieceType::Rook)
                && rook.color() == king.color()
                && (rules == CastlingRules::Permissive || !rook.has_moved())
        });
        if !rook_ready {
            continue;
        }

        if side
            .squares_between(from)
            .any(|square| board.occupant(square).is_some())
        {
            continue;
        }

        if board.piece_at(to).is_some_and(|piece| piece.color() == king.color()) {
            continue;
        }

        out.push(to);
    }
}
