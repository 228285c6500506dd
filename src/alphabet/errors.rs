use thiserror::Error;

/// Errors raised while building an operand alphabet
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlphabetError {
    #[error("Symbol '{0}' is reserved for an operator")]
    ReservedSymbol(char),
    #[error("Alphabet symbols cannot be whitespace")]
    WhitespaceSymbol,
    #[error("Symbol '{0}' appears more than once in the alphabet")]
    DuplicateSymbol(char),
}
