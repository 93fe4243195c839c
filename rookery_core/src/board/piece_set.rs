use std::ops::{Index, IndexMut};

use log::warn;

use super::{Color, Piece, PieceId, PieceType};

/// Owns every [`Piece`] created during a game, alive or captured.
///
/// Pieces are never removed, so a [`PieceId`] handed out by the arena stays
/// valid for as long as the arena does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceArena {
    pieces: Vec<Piece>,
}

impl PieceArena {
    /// Most pieces an arena can hold. A game from the starting position never
    /// creates more than 48 (32 plus one per promoted pawn).
    pub const CAPACITY: usize = u8::MAX as usize + 1;

    /// # Panics
    ///
    /// Panics if the arena already holds [`PieceArena::CAPACITY`] pieces.
    pub(crate) fn alloc(&mut self, color: Color, piece_type: PieceType) -> PieceId {
        let id = PieceId(
            u8::try_from(self.pieces.len()).expect("piece arena holds at most 256 pieces"),
        );
        self.pieces.push(Piece::new(id, color, piece_type));
        id
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> + '_ {
        self.pieces.iter_mut()
    }
}

impl Index<PieceId> for PieceArena {
    type Output = Piece;

    fn index(&self, index: PieceId) -> &Self::Output {
        &self.pieces[index.index()]
    }
}

impl IndexMut<PieceId> for PieceArena {
    fn index_mut(&mut self, index: PieceId) -> &mut Self::Output {
        &mut self.pieces[index.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceStatus {
    Alive,
    Captured,
}

/// Registry of all pieces belonging to one player, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPieceSet {
    color: Color,
    ledger: Vec<(PieceId, PieceStatus)>,
}

impl PlayerPieceSet {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ledger: Vec::with_capacity(16),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Creates a new alive piece of this set's color and registers it. The
    /// caller is responsible for placing it on the board.
    ///
    /// # Panics
    ///
    /// Panics if `arena` is already full, see [`PieceArena::CAPACITY`].
    pub fn add_piece(&mut self, arena: &mut PieceArena, piece_type: PieceType) -> PieceId {
        let id = arena.alloc(self.color, piece_type);
        self.ledger.push((id, PieceStatus::Alive));
        id
    }

    /// Marks a piece as captured.
    ///
    /// Capturing a piece that is not alive in this set is a caller error.
    pub fn capture(&mut self, id: PieceId) {
        match self.ledger.iter_mut().find(|(entry, _)| *entry == id) {
            Some((_, status @ PieceStatus::Alive)) => *status = PieceStatus::Captured,
            Some((_, PieceStatus::Captured)) => {
                warn!("{} piece {id:?} captured twice", self.color);
                debug_assert!(false, "piece {id:?} is already captured");
            }
            None => {
                warn!("{} piece set does not own {id:?}", self.color);
                debug_assert!(false, "piece {id:?} not in {} piece set", self.color);
            }
        }
    }

    /// Replaces a pawn with a newly created piece of the given type. The pawn
    /// moves to the captured side of the ledger and the new piece is returned
    /// for placement.
    pub fn promote(&mut self, arena: &mut PieceArena, pawn: PieceId, piece_type: PieceType) -> PieceId {
        debug_assert!(arena[pawn].is(PieceType::Pawn), "only pawns promote");
        self.capture(pawn);
        self.add_piece(arena, piece_type)
    }

    pub fn status(&self, id: PieceId) -> Option<PieceStatus> {
        self.ledger
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|&(_, status)| status)
    }

    pub fn is_alive(&self, id: PieceId) -> bool {
        self.status(id) == Some(PieceStatus::Alive)
    }

    pub fn all_pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.ledger.iter().map(|&(id, _)| id)
    }

    pub fn alive_pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.with_status(PieceStatus::Alive)
    }

    pub fn captured_pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.with_status(PieceStatus::Captured)
    }

    /// Alive pieces of a given type. For [`PieceType::King`] this yields
    /// exactly one piece in any position reachable by legal play.
    pub fn alive_pieces_of_type<'a>(
        &'a self,
        arena: &'a PieceArena,
        piece_type: PieceType,
    ) -> impl Iterator<Item = PieceId> + 'a {
        self.alive_pieces().filter(move |&id| arena[id].is(piece_type))
    }

    fn with_status(&self, status: PieceStatus) -> impl Iterator<Item = PieceId> + '_ {
        self.ledger
            .iter()
            .filter(move |&&(_, entry_status)| entry_status == status)
            .map(|&(id, _)| id)
    }
}
