use super::{PieceId, Position};

/// A single cell of the board: a fixed [`Position`] and the id of the piece
/// standing on it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSpace {
    position: Position,
    occupant: Option<PieceId>,
}

impl BoardSpace {
    pub const fn new(position: Position, occupant: Option<PieceId>) -> Self {
        Self { position, occupant }
    }

    pub const fn position(&self) -> Position {
        self.position
    }

    pub const fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}
