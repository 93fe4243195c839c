use crate::board::{CoordinateMove, Game};

/// Counts the leaf nodes of the legal move tree below `game`, `depth` plies
/// deep. Each branch is played out on its own copy of the game.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_move_list();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|the_move| perft(&play(game, the_move), depth - 1))
        .sum()
}

/// Like [`perft`], but reports the node count under each legal move of
/// `game` separately.
pub fn divide(game: &Game, depth: usize) -> Vec<(CoordinateMove, u64)> {
    game.legal_move_list()
        .into_iter()
        .map(|the_move| {
            let nodes = perft(&play(game, the_move), depth.saturating_sub(1));
            (the_move, nodes)
        })
        .collect()
}

fn play(game: &Game, the_move: CoordinateMove) -> Game {
    let mut game = game.clone();
    game.apply_move_unchecked(the_move.from, the_move.to, the_move.promotion);
    game
}
