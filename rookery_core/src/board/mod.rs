//! Structs and functions related to the board and the state of a game.

mod board_repr;
mod board_space;
mod castling;
mod coordinate_move;
mod game;
mod move_repr;
mod notation;
mod piece;
mod piece_set;
mod position;

pub use board_repr::{BoardRepr, ParseBoardError, STARTING_POSITION_DIAGRAM};
pub use board_space::BoardSpace;
pub use castling::{king_home, CastleSide, CastlingRules, KING_HOME_COL};
pub use coordinate_move::{CoordinateMove, ParseCoordinateMoveError};
pub use game::{Game, GameOptions, GameState, MoveError};
pub use move_repr::{Capture, Move, MoveFlags, Promotion};
pub use piece::{Color, Piece, PieceId, PieceKind, PieceType};
pub use piece_set::{PieceArena, PieceStatus, PlayerPieceSet};
pub use position::{ParsePositionError, Position};
