//! Structural checks for postfix expression strings

mod errors;
mod validation;

pub use errors::PostfixError;
pub use validation::{PostfixShape, check_postfix, is_valid_postfix};
