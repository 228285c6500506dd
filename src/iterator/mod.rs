mod core;
mod state;

pub use self::core::PostfixIterator;

use log::debug;

use crate::alphabet::Alphabet;

/// Start a fresh enumeration of expressions with `opcount` operators
pub fn iter_postfix(alphabet: &Alphabet, opcount: usize) -> PostfixIterator<'_> {
    debug!(
        "Enumerating postfix expressions with {} operators over '{}'",
        opcount, alphabet
    );
    PostfixIterator::new(alphabet, opcount)
}
