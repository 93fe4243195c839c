use std::fmt::{Debug, Display, Write};

/// Represents the type of a piece, but not its colour or any per-piece state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Piece types a pawn may be promoted into.
    pub const PROMOTION_TARGETS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Get the uppercase letter used for this piece type in notation.
    pub const fn as_uppercase_char(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    pub const fn as_lowercase_char(self) -> char {
        self.as_uppercase_char().to_ascii_lowercase()
    }

    pub const fn try_from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Human readable name, e.g. `Knight`.
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "Pawn",
            PieceType::Knight => "Knight",
            PieceType::Bishop => "Bishop",
            PieceType::Rook => "Rook",
            PieceType::Queen => "Queen",
            PieceType::King => "King",
        }
    }

    /// Returns true if this piece type is a slider (i.e. a bishop, rook, or
    /// queen).
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Bishop | PieceType::Rook | PieceType::Queen)
    }

    pub const fn is_promotion_target(self) -> bool {
        !matches!(self, PieceType::Pawn | PieceType::King)
    }

    /// The Unicode chess glyph for this piece type in the given colour.
    pub fn as_unicode_char(self, color: Color) -> char {
        let base = match color {
            Color::White => 0x2654,
            Color::Black => 0x265a,
        };
        let offset = match self {
            PieceType::King => 0,
            PieceType::Queen => 1,
            PieceType::Rook => 2,
            PieceType::Bishop => 3,
            PieceType::Knight => 4,
            PieceType::Pawn => 5,
        };
        // The twelve glyphs are contiguous from U+2654 to U+265F.
        char::from_u32(base + offset).unwrap_or('?')
    }
}

impl Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Represents a player in a chess game (either white or black).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    pub const fn is_black(self) -> bool {
        !self.is_white()
    }

    /// Inverts the color, i.e. maps [`Color::White`] to [`Color::Black`] and
    /// vice versa.
    pub const fn flip(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advancing for this color. White starts on row 6
    /// and advances towards row 0.
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's major pieces at the start of the game.
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row this color's pawns start on, from where they may double step.
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote.
    pub const fn promotion_row(self) -> u8 {
        self.flip().home_row()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identity of a piece for the lifetime of a game.
///
/// Board spaces and [`PlayerPieceSet`](super::PlayerPieceSet)s both refer to
/// pieces by id; the piece itself lives in the [`PieceArena`](super::PieceArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(pub(crate) u8);

impl PieceId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Piece variant along with any variant-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn {
        /// Set only immediately after this pawn advanced two squares.
        en_passant_eligible: bool,
    },
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const fn new(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::Pawn => PieceKind::Pawn {
                en_passant_eligible: false,
            },
            PieceType::Knight => PieceKind::Knight,
            PieceType::Bishop => PieceKind::Bishop,
            PieceType::Rook => PieceKind::Rook,
            PieceType::Queen => PieceKind::Queen,
            PieceType::King => PieceKind::King,
        }
    }

    pub const fn piece_type(self) -> PieceType {
        match self {
            PieceKind::Pawn { .. } => PieceType::Pawn,
            PieceKind::Knight => PieceType::Knight,
            PieceKind::Bishop => PieceType::Bishop,
            PieceKind::Rook => PieceType::Rook,
            PieceKind::Queen => PieceType::Queen,
            PieceKind::King => PieceType::King,
        }
    }
}

/// A single piece as stored in the arena.
///
/// Where the piece stands is deliberately not stored here: the board grid is
/// the only record of piece locations.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    color: Color,
    kind: PieceKind,
    has_moved: bool,
}

impl Piece {
    pub(crate) const fn new(id: PieceId, color: Color, piece_type: PieceType) -> Self {
        Self {
            id,
            color,
            kind: PieceKind::new(piece_type),
            has_moved: false,
        }
    }

    pub const fn id(&self) -> PieceId {
        self.id
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub const fn piece_type(&self) -> PieceType {
        self.kind.piece_type()
    }

    pub const fn is(&self, piece_type: PieceType) -> bool {
        self.kind.piece_type() as u8 == piece_type as u8
    }

    /// Whether this piece has been relocated by a move since the game began.
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// True only for a pawn that advanced two squares on the latest move.
    pub const fn is_en_passant_eligible(&self) -> bool {
        matches!(
            self.kind,
            PieceKind::Pawn {
                en_passant_eligible: true
            }
        )
    }

    pub(crate) fn set_en_passant_eligible(&mut self, eligible: bool) {
        if let PieceKind::Pawn {
            en_passant_eligible,
        } = &mut self.kind
        {
            *en_passant_eligible = eligible;
        }
    }

    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }

    pub const fn as_fen_char(&self) -> char {
        match self.color {
            Color::White => self.piece_type().as_uppercase_char(),
            Color::Black => self.piece_type().as_lowercase_char(),
        }
    }

    pub fn as_unicode_char(&self) -> char {
        self.piece_type().as_unicode_char(self.color)
    }
}

impl Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Piece")
            .field("id", &self.id)
            .field("color", &self.color)
            .field("kind", &self.kind)
            .field("has_moved", &self.has_moved)
            .finish()
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.as_fen_char())
    }
}
