//! Counting enumerations without keeping them in memory

use log::{debug, info};
use rayon::prelude::*;

use crate::alphabet::Alphabet;
use crate::iterator::PostfixIterator;
use crate::operator::Operator;

/// Number of expressions `PostfixIterator::new(alphabet, opcount)` yields.
///
/// The top-level splits are independent, so they are counted in parallel.
/// Each split streams its own subexpressions.
pub fn count_expressions(alphabet: &Alphabet, opcount: usize) -> u64 {
    info!(
        "Counting expressions with {} operators over '{}'",
        opcount, alphabet
    );

    if opcount == 0 {
        return alphabet.len() as u64;
    }

    let total: u64 = (0..opcount)
        .into_par_iter()
        .map(|left_count| count_split(alphabet, opcount, left_count))
        .sum();

    info!("Counted {} expressions", total);
    total
}

fn count_split(alphabet: &Alphabet, opcount: usize, left_count: usize) -> u64 {
    let right_count = opcount - 1 - left_count;
    let mut count: u64 = 0;

    for u in PostfixIterator::new(alphabet, left_count) {
        for v in PostfixIterator::new(alphabet, right_count) {
            count += Operator::ALL
                .iter()
                .filter(|op| op.admits(&u, &v))
                .count() as u64;
        }
    }

    debug!(
        "Split {}+{} contributes {} expressions",
        left_count, right_count, count
    );
    count
}
