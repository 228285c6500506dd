//! Operand alphabet used as the leaves of every expression

mod errors;

pub use errors::AlphabetError;

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::operator::Operator;

/// Symbols used when no alphabet is given explicitly
pub const DEFAULT_ALPHABET: &str = "abcdxyz";

/// Ordered set of single-character operand symbols.
///
/// Symbol order is significant: the base case of the enumeration yields the
/// symbols in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// # Errors
    ///
    /// Returns an error if a symbol is an operator character, whitespace,
    /// or repeated. The size of the alphabet is not checked.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        debug!("Building alphabet from '{}'", symbols);

        let mut collected: Vec<char> = Vec::with_capacity(symbols.len());
        for symbol in symbols.chars() {
            if Operator::from_symbol(symbol).is_some() {
                warn!("Rejecting operator character '{}' as operand", symbol);
                return Err(AlphabetError::ReservedSymbol(symbol));
            }
            if symbol.is_whitespace() {
                return Err(AlphabetError::WhitespaceSymbol);
            }
            if collected.contains(&symbol) {
                return Err(AlphabetError::DuplicateSymbol(symbol));
            }
            collected.push(symbol);
        }

        Ok(Self { symbols: collected })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn symbol(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
