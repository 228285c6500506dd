use std::iter::FusedIterator;

use crate::alphabet::Alphabet;
use crate::operator::Operator;

use super::state::{GenerationState, SplitState};

/// Lazily yields every postfix expression with exactly `opcount` operators.
///
/// Order is fixed: alphabet order for leaves, then ascending operator count on
/// the left side, left subexpressions varying slower than right ones, and
/// `-`, `+`, `*` for each pair. Live state is one frame per nested
/// subexpression, so memory stays linear in `opcount`.
#[derive(Debug, Clone)]
pub struct PostfixIterator<'a> {
    alphabet: &'a Alphabet,
    opcount: usize,
    state: GenerationState<'a>,
}

impl<'a> PostfixIterator<'a> {
    pub fn new(alphabet: &'a Alphabet, opcount: usize) -> Self {
        let state = if opcount == 0 {
            GenerationState::Leaves { position: 0 }
        } else {
            GenerationState::Splits(Box::new(SplitState::new(alphabet, 0)))
        };

        Self {
            alphabet,
            opcount,
            state,
        }
    }

    pub fn opcount(&self) -> usize {
        self.opcount
    }

    pub fn alphabet(&self) -> &'a Alphabet {
        self.alphabet
    }

    fn next_leaf(alphabet: &Alphabet, position: &mut usize) -> Option<String> {
        let symbol = alphabet.symbol(*position)?;
        *position += 1;
        Some(symbol.to_string())
    }

    fn next_composite(
        alphabet: &'a Alphabet,
        opcount: usize,
        split: &mut SplitState<'a>,
    ) -> Option<String> {
        loop {
            // Remaining operators for the current (u, v) pair
            if let (Some(u), Some(v)) = (&split.current_left, &split.current_right) {
                while let Some(op) = Operator::ALL.get(split.op_idx).copied() {
                    split.op_idx += 1;
                    if op.admits(u, v) {
                        let mut expr = String::with_capacity(u.len() + v.len() + 1);
                        expr.push_str(u);
                        expr.push_str(v);
                        expr.push(op.symbol());
                        return Some(expr);
                    }
                }
                split.current_right = None;
            }

            if split.current_left.is_some() {
                if let Some(right) = split.right.as_mut()
                    && let Some(v) = right.next()
                {
                    split.current_right = Some(v);
                    split.op_idx = 0;
                    continue;
                }
                split.current_left = None;
                split.right = None;
            }

            if let Some(u) = split.left.next() {
                let right_count = opcount - 1 - split.left_count;
                split.right = Some(PostfixIterator::new(alphabet, right_count));
                split.current_left = Some(u);
                continue;
            }

            let next_left_count = split.left_count + 1;
            if next_left_count >= opcount {
                return None;
            }
            *split = SplitState::new(alphabet, next_left_count);
        }
    }
}

impl Iterator for PostfixIterator<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &mut self.state {
            GenerationState::Leaves { position } => Self::next_leaf(self.alphabet, position),
            GenerationState::Splits(split) => {
                Self::next_composite(self.alphabet, self.opcount, split)
            }
            GenerationState::Exhausted => return None,
        };

        if next.is_none() {
            self.state = GenerationState::Exhausted;
        }
        next
    }
}

impl FusedIterator for PostfixIterator<'_> {}
