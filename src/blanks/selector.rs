//! Blank selection
//!
//! Applies a strategy to the candidate tokens, then normalizes the result:
//! whatever order a strategy picks in, blanks always come out in reading
//! order with contiguous ids starting at zero.

use crate::blanks::Strategy;
use crate::core::{Blank, Token};

/// Select up to `count` blanks from the candidate tokens
///
/// The effective count is `count.min(tokens.len())`; an empty candidate list
/// yields an empty selection regardless of `count`. Chosen tokens are sorted
/// by (line, position) and numbered 0, 1, 2, ... in that order, so blank ids
/// always read top to bottom, left to right.
pub fn select_blanks<S>(tokens: &[Token], count: usize, strategy: &mut S) -> Vec<Blank>
where
    S: Strategy + ?Sized,
{
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut chosen = strategy.pick(tokens, count.min(tokens.len()));
    chosen.sort_unstable_by_key(|&i| (tokens[i].line_index(), tokens[i].position()));

    chosen
        .into_iter()
        .enumerate()
        .map(|(id, index)| Blank::new(tokens[index].clone(), id as u32))
        .collect()
}
