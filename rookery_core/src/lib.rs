pub mod board;
pub mod move_gen;
pub mod perft;

#[cfg(test)]
mod test_utils;
