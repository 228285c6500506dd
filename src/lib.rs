//! Zoosearch - enumerate postfix arithmetic expressions
//!
//! This library lazily generates every postfix expression that uses an exact
//! number of binary operators (`-`, `+`, `*`) over an ordered alphabet of
//! single-character operands. Commutative mirror images are pruned by
//! comparing the operand subexpressions.

pub mod alphabet;
pub mod budget;
pub mod counter;
pub mod errors;
pub mod iterator;
pub mod operator;
pub mod postfix;

// Re-export the main public API
pub use alphabet::{Alphabet, AlphabetError, DEFAULT_ALPHABET};
pub use budget::{BudgetError, OperatorBudget};
pub use counter::count_expressions;
pub use errors::ZoosearchError;
pub use iterator::{PostfixIterator, iter_postfix};
pub use operator::Operator;
pub use postfix::{PostfixError, PostfixShape, check_postfix, is_valid_postfix};

/// Enumerate the postfix expressions over `alphabet` with exactly `opcount` operators
///
/// The returned iterator is lazy; stop consuming it at any point.
///
/// # Errors
///
/// Returns `ZoosearchError::BudgetError` if `opcount` is negative.
///
/// # Examples
///
/// ```
/// use zoosearch::{Alphabet, postfix_expressions};
///
/// let alphabet = Alphabet::new("ax").unwrap_or_default();
/// match postfix_expressions(&alphabet, 1) {
///     Ok(exprs) => {
///         let exprs: Vec<String> = exprs.collect();
///         assert_eq!(exprs, ["aa*", "ax-", "ax+", "ax*", "xa-", "xx*"]);
///     }
///     Err(e) => println!("Error: {}", e),
/// }
///
/// assert!(postfix_expressions(&alphabet, -1).is_err());
/// ```
pub fn postfix_expressions(
    alphabet: &Alphabet,
    opcount: i64,
) -> Result<PostfixIterator<'_>, ZoosearchError> {
    let budget = OperatorBudget::try_from(opcount)?;
    Ok(iter_postfix(alphabet, budget.get()))
}
