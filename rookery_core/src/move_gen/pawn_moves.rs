use super::PositionVec;
use crate::board::{BoardRepr, Color, Position};

/// Pushes, double steps from the starting row, diagonal captures and en
/// passant captures for a pawn of `color` on `from`.
pub(super) fn pawn_moves(board: &BoardRepr, from: Position, color: Color, out: &mut PositionVec) {
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.occupant(one_step).is_none() {
            out.push(one_step);

            if from.row() == color.pawn_row() {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.occupant(two_step).is_none() {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(forward, d_col) else {
            continue;
        };

        match board.piece_at(target) {
            Some(piece) if piece.color() != color => out.push(target),
            Some(_) => (),
            None => {
                let en_passant = from
                    .offset(0, d_col)
                    .and_then(|beside| board.piece_at(beside))
                    .is_some_and(|piece| piece.color() != color && piece.is_en_passant_eligible());

                if en_passant {
                    out.push(target);
                }
            }
        }
    }
}
