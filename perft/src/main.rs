use std::time::{Duration, Instant};

use clap::Parser;
use log::info;
use rookery_core::{
    board::{CastlingRules, CoordinateMove, Game, GameOptions},
    perft::{divide, perft},
};

/// Perft tester for Rookery.
///
/// Plays an optional list of moves from the starting position, then counts
/// the nodes of the legal move tree to check the move generator.
#[derive(Parser, Debug)]
struct Args {
    /// Moves to play from the starting position before running perft.
    ///
    /// Moves should consist of the starting square in algebraic notation
    /// followed by the ending square in algebraic notation, plus an optional
    /// promotion target as a lowercase letter, e.g. `d2d4`, `e7e8q`. Castling
    /// is written as the king's move, e.g. `e1g1` or `e1b1`.
    #[arg(short, long, num_args(0..))]
    moves: Vec<CoordinateMove>,

    /// Exact depth to search to.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..), default_value_t = 4)]
    depth: u8,

    /// Run in divide mode.
    ///
    /// When provided, lists each legal move in the current position along
    /// with the number of nodes found under it at the given depth.
    #[arg(long)]
    divide: bool,

    /// Only require a rook in the corner and empty squares between it and
    /// the king for castling.
    #[arg(long)]
    permissive_castling: bool,

    /// Print the moves played so far in every notation before running perft.
    #[arg(long)]
    history: bool,
}

fn generic_perft(game: &Game, max_depth: usize) {
    let mut total_time = Duration::ZERO;
    let mut last_depth_time = Duration::ZERO;
    let mut total_nodes = 0;

    for depth in 1..=max_depth {
        let start_time = Instant::now();

        let nodes = perft(game, depth);

        let time_taken = start_time.elapsed();

        println!(
            "Depth: {depth}\tNodes: {nodes}\tTime taken: {:.3}s",
            time_taken.as_secs_f64()
        );

        total_time += time_taken;
        last_depth_time = time_taken;
        total_nodes += nodes;
    }

    println!();

    let nodes_per_second = total_nodes as f64 / last_depth_time.as_secs_f64();

    println!(
        "Total nodes: {total_nodes}\tTotal time: {:.3}s\tNodes per second: {:.3}",
        total_time.as_secs_f64(),
        nodes_per_second
    );
}

fn specific_perft(game: &Game, depth: usize) {
    let mut total_nodes = 0;
    for (move_spec, nodes) in divide(game, depth) {
        total_nodes += nodes;
        println!("{move_spec}: {nodes}");
    }

    println!();
    println!("Nodes searched: {total_nodes}");
}

fn print_history(game: &Game) {
    for (i, the_move) in game.history().iter().enumerate() {
        println!(
            "{:>3}. {:<8} {:<8} {}",
            i + 1,
            the_move.algebraic(),
            the_move.symbolic(),
            the_move.description()
        );
    }
    println!();
}

fn main() -> Result<(), String> {
    env_logger::init();

    let Args {
        moves,
        depth,
        divide,
        permissive_castling,
        history,
    } = Args::parse();

    let castling = if permissive_castling {
        CastlingRules::Permissive
    } else {
        CastlingRules::Standard
    };
    let mut game = Game::with_options(GameOptions { castling });

    for move_spec in moves {
        if let Err(e) = game.apply_coordinate_move(move_spec) {
            return Err(format!("Move `{move_spec}` cannot be played: {e}"));
        }
    }
    info!("{} to move, {:?}", game.current_turn(), game.state());

    if history {
        print_history(&game);
    }

    println!("{}", game.board());

    if divide {
        specific_perft(&game, depth as _)
    } else {
        generic_perft(&game, depth as _);
    }

    Ok(())
}
