use std::fmt::{Display, Write};

use super::{CastleSide, Color, Move, PieceType, Position};

/// How piece types are spelled out in a notation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PieceStyle {
    Letter,
    Glyph,
}

impl PieceStyle {
    fn write(self, f: &mut std::fmt::Formatter<'_>, piece_type: PieceType, color: Color) -> std::fmt::Result {
        match self {
            PieceStyle::Letter => f.write_char(piece_type.as_uppercase_char()),
            PieceStyle::Glyph => f.write_char(piece_type.as_unicode_char(color)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct RegularRepr {
    piece_type: PieceType,
    color: Color,
    from: Position,
    is_capture: bool,
    to: Position,
    promotion: Option<PieceType>,
}

#[derive(Debug, Clone, Copy)]
enum NotationRepr {
    Regular(RegularRepr),
    Castle(&'static str),
}

/// Short notation for an applied move, either with piece letters
/// ([`Move::algebraic`]) or piece glyphs ([`Move::symbolic`]).
#[derive(Debug, Clone, Copy)]
struct Notation {
    repr: NotationRepr,
    style: PieceStyle,
    is_check: bool,
    is_checkmate: bool,
}

impl Notation {
    fn new(the_move: &Move, style: PieceStyle) -> Self {
        let repr = match the_move.castle() {
            Some(side) => NotationRepr::Castle(side.notation()),
            None => NotationRepr::Regular(RegularRepr {
                piece_type: the_move.piece_type(),
                color: the_move.color(),
                from: the_move.from(),
                is_capture: the_move.is_capture(),
                to: the_move.to(),
                promotion: the_move.promotion().map(|promotion| promotion.piece_type),
            }),
        };

        Self {
            repr,
            style,
            is_check: the_move.is_check(),
            is_checkmate: the_move.is_checkmate(),
        }
    }
}

impl Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let r = match self.repr {
            // Castles replace the whole string, suffix included.
            NotationRepr::Castle(castle) => return f.write_str(castle),
            NotationRepr::Regular(r) => r,
        };

        if r.piece_type != PieceType::Pawn {
            self.style.write(f, r.piece_type, r.color)?;
        }

        if r.is_capture {
            if r.piece_type == PieceType::Pawn {
                f.write_char(r.from.file_char())?;
            }
            f.write_char('x')?;
        }

        write!(f, "{}", r.to)?;

        if let Some(promotion) = r.promotion {
            f.write_char('=')?;
            self.style.write(f, promotion, r.color)?;
        }

        if self.is_checkmate {
            f.write_char('#')?;
        } else if self.is_check {
            f.write_char('+')?;
        }

        Ok(())
    }
}

impl Move {
    /// Algebraic notation, e.g. `Nf3`, `exd6`, `e8=Q+` or `O-O-O`.
    pub fn algebraic(&self) -> String {
        Notation::new(self, PieceStyle::Letter).to_string()
    }

    /// Like [`Move::algebraic`], but with Unicode piece glyphs in the mover's
    /// color instead of letters. Pawns still get no glyph.
    pub fn symbolic(&self) -> String {
        Notation::new(self, PieceStyle::Glyph).to_string()
    }

    /// An English sentence describing the move, e.g. `White Pawn moved from
    /// e5 to d6 capturing Black Pawn with an En Passant`.
    pub fn description(&self) -> String {
        let mut out = format!(
            "{} {} moved from {} to {}",
            self.color(),
            self.piece_type(),
            self.from(),
            self.to()
        );

        if let Some(capture) = self.capture() {
            out += &format!(" capturing {} {}", capture.color, capture.piece_type);
            if self.is_en_passant() {
                out += " with an En Passant";
            }
        }

        if let Some(side) = self.castle() {
            out += match side {
                CastleSide::KingSide => " castling on the King side",
                CastleSide::QueenSide => " castling on the Queen side",
            };
        }

        if let Some(promotion) = self.promotion() {
            out += &format!(" promoting into a {}", promotion.piece_type);
        }

        let opponent = self.color().flip();
        if self.is_checkmate() {
            out += &format!(" checkmating the {opponent} King");
        } else if self.is_check() {
            out += &format!(" putting the {opponent} King in check");
        }

        out
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Notation::new(self, PieceStyle::Letter))
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        board::{Capture, PieceId, Promotion},
        test_utils::p,
    };

    fn new_move(color: Color, piece_type: PieceType, from: &str, to: &str) -> Move {
        Move::new(PieceId(0), color, piece_type, p(from), p(to))
    }

    fn capture(the_move: &mut Move, color: Color, piece_type: PieceType, at: &str) {
        the_move.set_capture(Capture {
            piece: PieceId(1),
            color,
            piece_type,
            position: p(at),
        });
    }

    #[test]
    fn quiet_moves() {
        let pawn = new_move(Color::White, PieceType::Pawn, "e2", "e4");
        assert_eq!(pawn.algebraic(), "e4");
        assert_eq!(pawn.symbolic(), "e4");
        assert_eq!(pawn.to_string(), "e4");

        let knight = new_move(Color::Black, PieceType::Knight, "g8", "f6");
        assert_eq!(knight.algebraic(), "Nf6");
        assert_eq!(knight.symbolic(), "\u{265e}f6");
        assert_eq!(
            knight.description(),
            "Black Knight moved from g8 to f6"
        );
    }

    #[test]
    fn captures() {
        let mut pawn = new_move(Color::White, PieceType::Pawn, "e4", "d5");
        capture(&mut pawn, Color::Black, PieceType::Pawn, "d5");
        assert_eq!(pawn.algebraic(), "exd5");

        let mut bishop = new_move(Color::White, PieceType::Bishop, "c4", "f7");
        capture(&mut bishop, Color::Black, PieceType::Pawn, "f7");
        bishop.set_check();
        assert_eq!(bishop.algebraic(), "Bxf7+");
        assert_eq!(bishop.symbolic(), "\u{2657}xf7+");
        assert_eq!(
            bishop.description(),
            "White Bishop moved from c4 to f7 capturing Black Pawn putting the Black King in check"
        );
    }

    #[test]
    fn en_passant_description() {
        let mut pawn = new_move(Color::White, PieceType::Pawn, "e5", "d6");
        capture(&mut pawn, Color::Black, PieceType::Pawn, "d5");

        assert_eq!(pawn.algebraic(), "exd6");
        assert_eq!(
            pawn.description(),
            "White Pawn moved from e5 to d6 capturing Black Pawn with an En Passant"
        );
    }

    #[test]
    fn promotion_and_checkmate() {
        let mut pawn = new_move(Color::White, PieceType::Pawn, "g7", "h8");
        capture(&mut pawn, Color::Black, PieceType::Rook, "h8");
        pawn.set_promotion(Promotion {
            piece: PieceId(2),
            piece_type: PieceType::Queen,
        });
        pawn.set_checkmate();

        assert_eq!(pawn.algebraic(), "gxh8=Q#");
        assert_eq!(pawn.symbolic(), "gxh8=\u{2655}#");
        assert_eq!(
            pawn.description(),
            "White Pawn moved from g7 to h8 capturing Black Rook promoting into a Queen \
             checkmating the Black King"
        );
    }

    #[test]
    fn castles_override_everything() {
        let mut short = new_move(Color::White, PieceType::King, "e1", "g1");
        short.set_castle(CastleSide::KingSide);
        short.set_check();
        assert_eq!(short.algebraic(), "O-O");
        assert_eq!(short.symbolic(), "O-O");
        assert_eq!(
            short.description(),
            "White King moved from e1 to g1 castling on the King side putting the Black King in check"
        );

        let mut long = new_move(Color::Black, PieceType::King, "e8", "b8");
        long.set_castle(CastleSide::QueenSide);
        assert_eq!(long.algebraic(), "O-O-O");
        assert_eq!(
            long.description(),
            "Black King moved from e8 to b8 castling on the Queen side"
        );
    }
}
