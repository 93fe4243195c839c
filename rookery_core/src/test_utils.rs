use std::fmt::Debug;

use pretty_assertions::assert_eq;

use crate::board::Position;

/// Parses an algebraic square such as `e4`.
pub fn p(square: &str) -> Position {
    square
        .parse()
        .unwrap_or_else(|e| panic!("bad square in test: {e}"))
}

/// Parses a list of algebraic squares.
pub fn ps(squares: &[&str]) -> Vec<Position> {
    squares.iter().map(|square| p(square)).collect()
}

pub fn assert_in_any_order<T: Eq + Ord + Debug>(
    values: impl IntoIterator<Item = T>,
    expected: impl IntoIterator<Item = T>,
) {
    let mut values = values.into_iter().collect::<Vec<_>>();
    values.sort();

    let mut expected = expected.into_iter().collect::<Vec<_>>();
    expected.sort();

    assert_eq!(values, expected);
}
