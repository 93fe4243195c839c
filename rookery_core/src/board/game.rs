use log::{debug, trace, warn};
use thiserror::Error;

use super::{
    BoardRepr, BoardSpace, CastlingRules, Color, CoordinateMove, Move, Piece, PieceType, Position,
};
use crate::move_gen::{self, PositionVec};

/// Knobs that change how a [`Game`] judges moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GameOptions {
    pub castling: CastlingRules,
}

/// Result of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InPlay { check: bool },
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("No piece on {0}")]
    NoPiece(Position),
    #[error("It is {expected}'s turn, but the piece belongs to {found}")]
    WrongTurn { expected: Color, found: Color },
    #[error("{from}{to} is not a legal move")]
    IllegalMove { from: Position, to: Position },
    #[error("Cannot promote into a {0}")]
    InvalidPromotion(PieceType),
}

/// A game of chess: the board, whose turn it is, and every move applied so
/// far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: BoardRepr,
    current_turn: Color,
    history: Vec<Move>,
    options: GameOptions,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    pub fn with_options(options: GameOptions) -> Self {
        Self {
            board: BoardRepr::starting_position(),
            current_turn: Color::White,
            history: Vec::new(),
            options,
        }
    }

    /// Starts a game from an arbitrary board with an empty history. Pieces
    /// on the board count as unmoved.
    pub fn from_board(board: BoardRepr, current_turn: Color) -> Self {
        Self {
            board,
            current_turn,
            history: Vec::new(),
            options: GameOptions::default(),
        }
    }

    /// Rebuilds a game by applying each move of `history` to a fresh game
    /// with default options.
    ///
    /// Only the source square, destination square and promotion of each
    /// move are used. The moves are not validated.
    pub fn replay<'a>(history: impl IntoIterator<Item = &'a Move>) -> Self {
        Self::replay_with_options(history, GameOptions::default())
    }

    /// Like [`Game::replay`], but the rebuilt game uses `options`.
    pub fn replay_with_options<'a>(
        history: impl IntoIterator<Item = &'a Move>,
        options: GameOptions,
    ) -> Self {
        let mut game = Self::with_options(options);
        for the_move in history {
            let promotion = the_move.promotion().map(|promotion| promotion.piece_type);
            if game
                .apply_move_unchecked(the_move.from(), the_move.to(), promotion)
                .is_none()
            {
                warn!("replay skipped {the_move:?}, {} is empty", the_move.from());
            }
        }
        game
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn set_options(&mut self, options: GameOptions) {
        self.options = options;
    }

    pub fn board(&self) -> &BoardRepr {
        &self.board
    }

    /// Direct access to the board, for setting up positions. Changes made
    /// through it are not recorded in the history.
    pub fn board_mut(&mut self) -> &mut BoardRepr {
        &mut self.board
    }

    pub fn board_space(&self, position: Position) -> BoardSpace {
        self.board.space(position)
    }

    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.board.piece_at(position)
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn alive_pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        let arena = self.board.arena();
        self.board
            .piece_set(color)
            .alive_pieces()
            .map(move |id| &arena[id])
    }

    pub fn captured_pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        let arena = self.board.arena();
        self.board
            .piece_set(color)
            .captured_pieces()
            .map(move |id| &arena[id])
    }

    /// Destinations for the piece on `position`.
    ///
    /// With `filter_for_own_check_safety` unset this is movement geometry
    /// only. With it set, moves that would leave the mover's own king in
    /// check are removed, as are castles through attacked squares under
    /// [`CastlingRules::Standard`].
    pub fn legal_moves(&self, position: Position, filter_for_own_check_safety: bool) -> PositionVec {
        if filter_for_own_check_safety {
            move_gen::legal_moves(&self.board, position, self.options.castling)
        } else {
            move_gen::pseudo_legal_moves(&self.board, position, self.options.castling)
        }
    }

    /// Every legal move for the side to move. Pawn moves onto the last row
    /// are listed once for each promotion target.
    pub fn legal_move_list(&self) -> Vec<CoordinateMove> {
        let mut moves = Vec::new();

        for (from, piece) in self.board.pieces_of(self.current_turn) {
            let promotes_on = piece
                .is(PieceType::Pawn)
                .then_some(piece.color().promotion_row());

            for to in self.legal_moves(from, true) {
                let the_move = CoordinateMove::new(from, to);
                if promotes_on == Some(to.row()) {
                    moves.extend(
                        PieceType::PROMOTION_TARGETS
                            .iter()
                            .map(|&target| the_move.with_promotion(target)),
                    );
                } else {
                    moves.push(the_move);
                }
            }
        }

        moves
    }

    /// Validates and applies a move for the side to move.
    ///
    /// `promotion` picks the piece a pawn turns into on the last row and
    /// defaults to a queen. It is ignored for any other move. The board is
    /// left untouched if an error is returned.
    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> Result<&Move, MoveError> {
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPiece(from))?;

        if piece.color() != self.current_turn {
            return Err(MoveError::WrongTurn {
                expected: self.current_turn,
                found: piece.color(),
            });
        }

        if let Some(target) = promotion.filter(|target| !target.is_promotion_target()) {
            return Err(MoveError::InvalidPromotion(target));
        }

        if !self.legal_moves(from, true).contains(&to) {
            return Err(MoveError::IllegalMove { from, to });
        }

        self.apply_move_unchecked(from, to, promotion)
            .ok_or(MoveError::NoPiece(from))
    }

    pub fn apply_coordinate_move(&mut self, the_move: CoordinateMove) -> Result<&Move, MoveError> {
        self.apply_move(the_move.from, the_move.to, the_move.promotion)
    }

    /// Applies a move without checking whose turn it is or whether the piece
    /// may move there.
    ///
    /// Returns [`None`] and does nothing if `from` is empty. Otherwise the
    /// move is recorded, resolved on the board, annotated, and the turn
    /// passes to the other player.
    pub fn apply_move_unchecked(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PieceType>,
    ) -> Option<&Move> {
        let piece = *self.board.piece_at(from)?;
        let color = piece.color();
        trace!("{color} {} {from} -> {to}", piece.piece_type());

        self.history
            .push(Move::new(piece.id(), color, piece.piece_type(), from, to));

        let effects = self.board.execute(
            piece.id(),
            from,
            to,
            promotion.unwrap_or(PieceType::Queen),
        );

        let opponent = color.flip();
        let checkmate = self.is_checkmate(opponent);
        let check = !checkmate && self.in_check(opponent);

        let index = self.history.len() - 1;
        let the_move = &mut self.history[index];
        if let Some(capture) = effects.capture {
            the_move.set_capture(capture);
        }
        if effects.double_pawn_push {
            the_move.set_double_pawn_push();
        }
        if let Some(side) = effects.castle {
            the_move.set_castle(side);
        }
        if let Some(promoted) = effects.promotion {
            debug!("{color} pawn on {to} promoted into a {}", promoted.piece_type);
            the_move.set_promotion(promoted);
        }
        if checkmate {
            debug!("{opponent} is checkmated");
            the_move.set_checkmate();
        } else if check {
            debug!("{opponent} is in check");
            the_move.set_check();
        }

        let turn_before = self.current_turn;
        self.current_turn = turn_before.flip();
        debug_assert_ne!(self.current_turn, turn_before);

        self.history.last()
    }

    /// Returns true if any opposing non-king piece could move onto `color`'s
    /// king.
    pub fn in_check(&self, color: Color) -> bool {
        self.board.in_check(color)
    }

    /// Returns true if `color` is in check and has no legal move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_move(color)
    }

    /// Returns true if `color` is not in check but has no legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.in_check(color) && !self.has_legal_move(color)
    }

    pub fn state(&self) -> GameState {
        let color = self.current_turn;
        let check = self.in_check(color);

        match (check, self.has_legal_move(color)) {
            (true, false) => GameState::Checkmate {
                winner: color.flip(),
            },
            (false, false) => GameState::Stalemate,
            (check, true) => GameState::InPlay { check },
        }
    }

    /// Returns true if moving the piece on `from` to `to` would leave its
    /// own king in check. The game itself is not modified.
    pub fn would_expose_own_king(&self, from: Position, to: Position) -> bool {
        move_gen::would_expose_own_king(&self.board, from, to)
    }

    fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .any(|(position, _)| !self.legal_moves(position, true).is_empty())
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        board::CastleSide,
        test_utils::{assert_in_any_order, p},
    };

    fn play(game: &mut Game, moves: &[&str]) {
        for the_move in moves {
            let the_move: CoordinateMove = the_move.parse().unwrap();
            if let Err(e) = game.apply_coordinate_move(the_move) {
                panic!("could not play {the_move}: {e}");
            }
        }
    }

    fn fixture(diagram: &str, current_turn: Color) -> Game {
        Game::from_board(diagram.parse().unwrap(), current_turn)
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let game = Game::new();

        let total: usize = game
            .board()
            .pieces_of(Color::White)
            .map(|(position, _)| game.legal_moves(position, true).len())
            .sum();
        assert_eq!(total, 20);
        assert_eq!(game.legal_move_list().len(), 20);
        assert_eq!(game.state(), GameState::InPlay { check: false });
    }

    #[test]
    fn starting_position_queries() {
        let game = Game::new();

        assert_eq!(game.current_turn(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.alive_pieces(Color::White).count(), 16);
        assert_eq!(game.alive_pieces(Color::Black).count(), 16);
        assert_eq!(game.captured_pieces(Color::Black).count(), 0);

        let space = game.board_space(p("d8"));
        assert_eq!(space.position(), p("d8"));
        assert!(space.is_occupied());
        assert!(!game.board_space(p("d5")).is_occupied());
        assert_eq!(game.board().space_at(8, 0), None);
        assert_eq!(game.board().space_at(0, -1), None);
    }

    #[test]
    fn apply_move_rejects_bad_input() {
        let mut game = Game::new();

        assert_eq!(
            game.apply_move(p("e4"), p("e5"), None),
            Err(MoveError::NoPiece(p("e4")))
        );
        assert_eq!(
            game.apply_move(p("e7"), p("e5"), None),
            Err(MoveError::WrongTurn {
                expected: Color::White,
                found: Color::Black,
            })
        );
        assert_eq!(
            game.apply_move(p("e2"), p("e5"), None),
            Err(MoveError::IllegalMove {
                from: p("e2"),
                to: p("e5"),
            })
        );
        assert_eq!(
            game.apply_move(p("e2"), p("e4"), Some(PieceType::King)),
            Err(MoveError::InvalidPromotion(PieceType::King))
        );

        assert_eq!(game, Game::new());
    }

    #[test]
    fn apply_move_toggles_turn_and_records_history() {
        let mut game = Game::new();

        let the_move = *game.apply_move(p("e2"), p("e4"), None).unwrap();
        assert_eq!(the_move.from(), p("e2"));
        assert_eq!(the_move.to(), p("e4"));
        assert_eq!(the_move.piece_type(), PieceType::Pawn);
        assert!(the_move.is_double_pawn_push());
        assert_eq!(the_move.algebraic(), "e4");

        assert_eq!(game.current_turn(), Color::Black);
        assert_eq!(game.history(), &[the_move]);
        assert_eq!(game.piece_at(p("e2")), None);
        assert_eq!(
            game.piece_at(p("e4")).map(|piece| piece.piece_type()),
            Some(PieceType::Pawn)
        );

        play(&mut game, &["g8f6"]);
        assert_eq!(game.current_turn(), Color::White);
        assert_eq!(game.last_move().unwrap().algebraic(), "Nf6");
    }

    #[test]
    fn apply_move_unchecked_ignores_turn() {
        let mut game = Game::new();

        assert!(game.apply_move_unchecked(p("e4"), p("e5"), None).is_none());
        assert!(game.history().is_empty());

        let the_move = *game.apply_move_unchecked(p("e7"), p("e5"), None).unwrap();
        assert_eq!(the_move.color(), Color::Black);
        assert_eq!(game.current_turn(), Color::Black);
    }

    #[test]
    fn en_passant_capture_removes_pawn_beside_capturer() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);

        assert!(game.piece_at(p("d5")).unwrap().is_en_passant_eligible());
        assert!(!game.piece_at(p("e5")).unwrap().is_en_passant_eligible());
        assert!(game.legal_moves(p("e5"), true).contains(&p("d6")));

        let the_move = *game.apply_move(p("e5"), p("d6"), None).unwrap();
        assert!(the_move.is_en_passant());
        assert_eq!(the_move.capture_position(), Some(p("d5")));
        assert_eq!(the_move.algebraic(), "exd6");

        assert_eq!(game.piece_at(p("d5")), None);
        assert_eq!(
            game.piece_at(p("d6")).map(|piece| (piece.color(), piece.piece_type())),
            Some((Color::White, PieceType::Pawn))
        );
        assert_eq!(game.captured_pieces(Color::Black).count(), 1);
    }

    #[test]
    fn en_passant_expires_after_one_move() {
        let mut game = Game::new();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5", "a2a3"]);

        assert!(!game.piece_at(p("d5")).unwrap().is_en_passant_eligible());

        play(&mut game, &["a6a5"]);
        assert!(!game.legal_moves(p("e5"), true).contains(&p("d6")));
        assert_eq!(
            game.apply_move(p("e5"), p("d6"), None),
            Err(MoveError::IllegalMove {
                from: p("e5"),
                to: p("d6"),
            })
        );
    }

    const CASTLING_FIXTURE: &str = "
        r...k..r
        pppppppp
        ........
        ........
        ........
        ........
        PPPPPPPP
        R...K..R
    ";

    #[test]
    fn castling_king_side_moves_rook() {
        let mut game = fixture(CASTLING_FIXTURE, Color::White);
        let rook = game.board().occupant(p("h1"));

        let the_move = *game.apply_move(p("e1"), p("g1"), None).unwrap();
        assert_eq!(the_move.castle(), Some(CastleSide::KingSide));
        assert_eq!(the_move.algebraic(), "O-O");

        assert_eq!(game.board().occupant(p("h1")), None);
        assert_eq!(game.board().occupant(p("f1")), rook);
        assert_eq!(
            game.piece_at(p("g1")).map(|piece| piece.piece_type()),
            Some(PieceType::King)
        );
    }

    #[test]
    fn castling_queen_side_moves_rook() {
        let mut game = fixture(CASTLING_FIXTURE, Color::White);
        let rook = game.board().occupant(p("a1"));

        let the_move = *game.apply_move(p("e1"), p("b1"), None).unwrap();
        assert_eq!(the_move.castle(), Some(CastleSide::QueenSide));
        assert_eq!(the_move.algebraic(), "O-O-O");
        assert_eq!(game.board().occupant(p("a1")), None);
        assert_eq!(game.board().occupant(p("c1")), rook);

        let rook = game.board().occupant(p("a8"));
        let the_move = *game.apply_move(p("e8"), p("b8"), None).unwrap();
        assert_eq!(the_move.castle(), Some(CastleSide::QueenSide));
        assert_eq!(game.board().occupant(p("c8")), rook);
        assert_eq!(game.board().occupant(p("a8")), None);
    }

    #[test]
    fn ordinary_king_move_leaves_rooks_alone() {
        let mut game = fixture(CASTLING_FIXTURE, Color::White);
        let rooks = (game.board().occupant(p("a1")), game.board().occupant(p("h1")));

        let the_move = *game.apply_move(p("e1"), p("f1"), None).unwrap();
        assert_eq!(the_move.castle(), None);
        assert_eq!(
            (game.board().occupant(p("a1")), game.board().occupant(p("h1"))),
            rooks
        );

        // The king has moved, so castling is gone for good.
        play(&mut game, &["a7a6", "f1e1", "a6a5"]);
        assert_in_any_order(game.legal_moves(p("e1"), true), [p("d1"), p("f1")]);
    }

    #[test]
    fn king_cannot_castle_onto_its_own_rook() {
        let mut game = Game::with_options(GameOptions {
            castling: CastlingRules::Permissive,
        });
        play(
            &mut game,
            &[
                "d2d4", "a7a6", "d1d3", "a6a5", "c1e3", "h7h6", "b1c3", "h6h5", "e1d1", "g7g6",
            ],
        );

        assert_in_any_order(game.legal_moves(p("d1"), true), [p("d2"), p("c1"), p("e1")]);
        assert_eq!(
            game.apply_move(p("d1"), p("a1"), None),
            Err(MoveError::IllegalMove {
                from: p("d1"),
                to: p("a1"),
            })
        );
        assert_eq!(game.captured_pieces(Color::White).count(), 0);

        for castling in [CastlingRules::Standard, CastlingRules::Permissive] {
            let mut game = fixture(
                "
                    ....k...
                    ........
                    ........
                    ........
                    ........
                    ........
                    ........
                    R....K.R
                ",
                Color::White,
            );
            game.set_options(GameOptions { castling });

            assert!(!game.legal_moves(p("f1"), true).contains(&p("h1")));
            assert_eq!(
                game.apply_move(p("f1"), p("h1"), None),
                Err(MoveError::IllegalMove {
                    from: p("f1"),
                    to: p("h1"),
                })
            );
        }
    }

    #[test]
    fn permissive_castling_ignores_moved_king() {
        let mut game = fixture(CASTLING_FIXTURE, Color::White);
        game.set_options(GameOptions {
            castling: CastlingRules::Permissive,
        });
        play(&mut game, &["e1f1", "a7a6", "f1e1", "a6a5"]);

        assert_in_any_order(
            game.legal_moves(p("e1"), true),
            [p("d1"), p("f1"), p("g1"), p("b1")],
        );
    }

    const PROMOTION_FIXTURE: &str = "
        ....k...
        P.......
        ........
        ........
        ........
        ........
        ........
        ....K...
    ";

    #[test]
    fn promotion_defaults_to_queen() {
        let mut game = fixture(PROMOTION_FIXTURE, Color::White);
        let pawn = game.board().occupant(p("a7")).unwrap();

        let the_move = *game.apply_move(p("a7"), p("a8"), None).unwrap();
        let promotion = the_move.promotion().unwrap();
        assert_eq!(promotion.piece_type, PieceType::Queen);
        assert_eq!(the_move.piece(), pawn);
        assert_eq!(the_move.algebraic(), "a8=Q+");

        let queen = game.piece_at(p("a8")).unwrap();
        assert_eq!(queen.id(), promotion.piece);
        assert_eq!(queen.piece_type(), PieceType::Queen);
        assert_eq!(queen.color(), Color::White);

        assert_eq!(
            game.captured_pieces(Color::White)
                .map(|piece| piece.id())
                .collect::<Vec<_>>(),
            vec![pawn]
        );
        assert_eq!(game.alive_pieces(Color::White).count(), 2);
        assert!(game.in_check(Color::Black));
    }

    #[test]
    fn promotion_into_knight() {
        let mut game = fixture(PROMOTION_FIXTURE, Color::White);

        let the_move = *game
            .apply_move(p("a7"), p("a8"), Some(PieceType::Knight))
            .unwrap();
        assert_eq!(the_move.algebraic(), "a8=N");
        assert_eq!(
            game.piece_at(p("a8")).map(|piece| piece.piece_type()),
            Some(PieceType::Knight)
        );
        assert!(!game.in_check(Color::Black));
    }

    #[test]
    fn promotion_listed_for_every_target() {
        let game = fixture(PROMOTION_FIXTURE, Color::White);

        let promotions = game
            .legal_move_list()
            .into_iter()
            .filter(|the_move| the_move.from == p("a7"))
            .map(|the_move| the_move.to_string())
            .collect::<Vec<_>>();
        assert_in_any_order(promotions, ["a7a8q", "a7a8r", "a7a8b", "a7a8n"].map(String::from));
    }

    #[test]
    fn check_is_pure_and_idempotent() {
        let game = fixture(
            "
                ....k...
                ........
                ........
                ........
                ....R...
                ........
                ........
                ....K...
            ",
            Color::Black,
        );
        let before = game.clone();

        assert!(game.in_check(Color::Black));
        assert!(game.in_check(Color::Black));
        assert!(!game.in_check(Color::White));
        assert_eq!(game.state(), GameState::InPlay { check: true });
        assert_eq!(game, before);
    }

    const BACK_RANK_FIXTURE: &str = "
        ......k.
        .....ppp
        ........
        ........
        ........
        ........
        ........
        R.....K.
    ";

    #[test]
    fn back_rank_checkmate() {
        let mut game = fixture(BACK_RANK_FIXTURE, Color::White);

        let the_move = *game.apply_move(p("a1"), p("a8"), None).unwrap();
        assert!(the_move.is_checkmate());
        assert!(!the_move.is_check());
        assert_eq!(the_move.algebraic(), "Ra8#");
        assert_eq!(
            the_move.description(),
            "White Rook moved from a1 to a8 checkmating the Black King"
        );

        assert!(game.is_checkmate(Color::Black));
        assert!(!game.is_stalemate(Color::Black));
        assert_eq!(
            game.state(),
            GameState::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn removing_the_checker_ends_checkmate() {
        let mut game = fixture(BACK_RANK_FIXTURE, Color::White);
        play(&mut game, &["a1a8"]);
        assert!(game.is_checkmate(Color::Black));

        game.board_mut().remove_piece(p("a8"));
        assert!(!game.in_check(Color::Black));
        assert!(!game.is_checkmate(Color::Black));
        assert_eq!(game.state(), GameState::InPlay { check: false });
    }

    #[test]
    fn scholars_mate() {
        let mut game = Game::new();
        play(
            &mut game,
            &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
        );

        let notation = game
            .history()
            .iter()
            .map(Move::algebraic)
            .collect::<Vec<_>>();
        assert_eq!(
            notation,
            vec!["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"]
        );
        assert_eq!(game.last_move().unwrap().symbolic(), "\u{2655}xf7#");
        assert!(game.legal_move_list().is_empty());
    }

    #[test]
    fn stalemate() {
        let game = fixture(
            "
                k.......
                ..Q.....
                ........
                ........
                ........
                ........
                ........
                .......K
            ",
            Color::Black,
        );

        assert!(!game.in_check(Color::Black));
        assert!(game.is_stalemate(Color::Black));
        assert!(!game.is_checkmate(Color::Black));
        assert_eq!(game.state(), GameState::Stalemate);
    }

    #[test]
    fn would_expose_own_king_leaves_game_untouched() {
        let game = fixture(
            "
                ....r..k
                ........
                ........
                ........
                ........
                ........
                ....N...
                ....K...
            ",
            Color::White,
        );
        let before = game.clone();

        assert!(game.would_expose_own_king(p("e2"), p("c3")));
        assert!(!game.would_expose_own_king(p("e1"), p("d1")));
        assert!(game.legal_moves(p("e2"), true).is_empty());
        assert_eq!(game.legal_moves(p("e2"), false).len(), 6);
        assert_eq!(game, before);
    }

    #[test]
    fn replay_reproduces_game() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                "e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1", "f6e4", "d2d4", "e5d4",
            ],
        );
        assert_eq!(game.history()[6].algebraic(), "O-O");

        let replayed = Game::replay(game.history());
        assert_eq!(replayed.current_turn(), game.current_turn());
        assert_eq!(replayed.board(), game.board());
        assert_eq!(replayed.history(), game.history());
        assert_eq!(replayed, game);
    }

    #[test]
    fn replay_with_options_keeps_castling_rules() {
        let options = GameOptions {
            castling: CastlingRules::Permissive,
        };
        let mut game = Game::with_options(options);
        play(&mut game, &["g1f3", "a7a6", "g2g3", "a6a5", "f1g2", "b7b6"]);

        let replayed = Game::replay_with_options(game.history(), game.options());
        assert_eq!(replayed.options(), options);
        assert_eq!(replayed, game);
        assert_ne!(Game::replay(game.history()), game);
    }

    #[test]
    fn replay_keeps_promotion_choice() {
        let mut game = Game::new();
        play(
            &mut game,
            &[
                "h2h4", "g7g5", "h4g5", "h7h6", "g5h6", "f8g7", "h6g7", "a7a6", "g7h8n",
            ],
        );
        assert_eq!(game.last_move().unwrap().algebraic(), "gxh8=N");

        let replayed = Game::replay(game.history());
        assert_eq!(
            replayed.piece_at(p("h8")).map(|piece| piece.piece_type()),
            Some(PieceType::Knight)
        );
        assert_eq!(replayed, game);
    }
}
