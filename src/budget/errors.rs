use thiserror::Error;

/// Invalid operator counts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BudgetError {
    #[error("Invalid operator count '{0}': expected a non-negative integer")]
    InvalidArgument(String),
    #[error("Invalid operator count {0}: must not be negative")]
    Negative(i64),
}
