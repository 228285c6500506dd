use thiserror::Error;

/// Reasons a string is not a well-formed postfix expression
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PostfixError {
    #[error("Expression cannot be empty")]
    Empty,
    #[error("Unknown symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
    #[error("Operator at position {position} has fewer than two operands")]
    MissingOperand { position: usize },
    #[error("Expression leaves {depth} values on the stack instead of one")]
    Unbalanced { depth: usize },
}
