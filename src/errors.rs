use thiserror::Error;

use crate::alphabet::AlphabetError;
use crate::budget::BudgetError;
use crate::postfix::PostfixError;

#[derive(Error, Debug)]
pub enum ZoosearchError {
    #[error("Alphabet error: {0}")]
    AlphabetError(#[from] AlphabetError),
    #[error("Invalid argument: {0}")]
    BudgetError(#[from] BudgetError),
    #[error("Postfix error: {0}")]
    PostfixError(#[from] PostfixError),
}
