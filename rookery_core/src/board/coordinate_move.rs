use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use thiserror::Error;

use super::{Move, PieceType, Position};

/// A move written as its source and destination squares, plus an optional
/// promotion letter:
///
/// * `e2e4`
/// * `g8f6`
/// * `e1g1` (white king-side castle)
/// * `e1b1` (white queen-side castle)
/// * `a7a8n` (promotion into a knight)
///
/// This is the input format of the `perft` tool and the easiest way to feed
/// moves into [`Game::apply_move`](super::Game::apply_move).
///
/// ```
/// # use rookery_core::board::{CoordinateMove, PieceType, Position};
/// assert_eq!(
///     "e7e8q".parse(),
///     Ok(CoordinateMove {
///         from: Position::new(1, 4).unwrap(),
///         to: Position::new(0, 4).unwrap(),
///         promotion: Some(PieceType::Queen),
///     })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoordinateMove {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceType>,
}

impl CoordinateMove {
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub const fn with_promotion(self, promotion: PieceType) -> Self {
        Self {
            promotion: Some(promotion),
            ..self
        }
    }
}

impl Display for CoordinateMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            f.write_char(promotion.as_lowercase_char())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordinateMoveError {
    #[error("Expected 4 or 5 characters")]
    IncorrectLength,
    #[error("Invalid square {0}")]
    InvalidSquare(String),
    #[error("Invalid promotion target `{0}`")]
    InvalidPromotionTarget(char),
}

impl FromStr for CoordinateMove {
    type Err = ParseCoordinateMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.trim().chars().collect::<Vec<_>>();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(ParseCoordinateMoveError::IncorrectLength);
        }

        let parse_square = |squares: &[char]| {
            let square = String::from_iter(squares);
            square
                .parse::<Position>()
                .map_err(|_| ParseCoordinateMoveError::InvalidSquare(square))
        };

        let from = parse_square(&chars[0..2])?;
        let to = parse_square(&chars[2..4])?;

        let promotion = match chars.get(4) {
            Some(&c) => Some(
                PieceType::try_from_char(c)
                    .filter(|piece_type| piece_type.is_promotion_target())
                    .ok_or(ParseCoordinateMoveError::InvalidPromotionTarget(c))?,
            ),
            None => None,
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

impl From<&Move> for CoordinateMove {
    fn from(value: &Move) -> Self {
        Self {
            from: value.from(),
            to: value.to(),
            promotion: value.promotion().map(|promotion| promotion.piece_type),
        }
    }
}
