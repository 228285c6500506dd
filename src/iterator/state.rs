use log::trace;

use crate::alphabet::Alphabet;

use super::core::PostfixIterator;

/// Progress through one way of splitting the remaining operators
#[derive(Debug, Clone)]
pub(crate) struct SplitState<'a> {
    /// Operators given to the left subexpression
    pub(crate) left_count: usize,
    pub(crate) left: PostfixIterator<'a>,
    /// Rebuilt for every left subexpression
    pub(crate) right: Option<PostfixIterator<'a>>,
    pub(crate) current_left: Option<String>,
    pub(crate) current_right: Option<String>,
    /// Next entry of `Operator::ALL` to try for the current pair
    pub(crate) op_idx: usize,
}

impl<'a> SplitState<'a> {
    pub(crate) fn new(alphabet: &'a Alphabet, left_count: usize) -> Self {
        trace!("Starting split with {} operators on the left", left_count);
        Self {
            left_count,
            left: PostfixIterator::new(alphabet, left_count),
            right: None,
            current_left: None,
            current_right: None,
            op_idx: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) enum GenerationState<'a> {
    /// Zero operators: walk the alphabet
    Leaves { position: usize },
    Splits(Box<SplitState<'a>>),
    Exhausted,
}
