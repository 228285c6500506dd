use log::debug;

use crate::alphabet::Alphabet;
use crate::operator::Operator;

use super::errors::PostfixError;

/// Operator and operand counts of a well-formed postfix expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostfixShape {
    pub operators: usize,
    pub operands: usize,
}

/// Scan `expr` left to right, tracking how many values would be on the stack.
///
/// # Errors
///
/// Returns an error if the string is empty, uses a symbol outside the alphabet
/// and operator set, applies an operator to fewer than two values, or does not
/// reduce to exactly one value.
pub fn check_postfix(expr: &str, alphabet: &Alphabet) -> Result<PostfixShape, PostfixError> {
    if expr.is_empty() {
        return Err(PostfixError::Empty);
    }

    let mut shape = PostfixShape {
        operators: 0,
        operands: 0,
    };
    let mut depth: usize = 0;

    for (position, symbol) in expr.chars().enumerate() {
        if Operator::from_symbol(symbol).is_some() {
            if depth < 2 {
                debug!("Operator underflow at {} in '{}'", position, expr);
                return Err(PostfixError::MissingOperand { position });
            }
            depth -= 1;
            shape.operators += 1;
        } else if alphabet.contains(symbol) {
            depth += 1;
            shape.operands += 1;
        } else {
            return Err(PostfixError::UnknownSymbol { symbol, position });
        }
    }

    if depth != 1 {
        return Err(PostfixError::Unbalanced { depth });
    }

    Ok(shape)
}

pub fn is_valid_postfix(expr: &str, alphabet: &Alphabet) -> bool {
    check_postfix(expr, alphabet).is_ok()
}
