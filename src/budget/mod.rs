//! Operator-count budget parsing

mod errors;

pub use errors::BudgetError;

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

/// Exact number of binary operators an expression must contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct OperatorBudget(usize);

impl OperatorBudget {
    pub fn new(count: usize) -> Self {
        Self(count)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for OperatorBudget {
    fn from(count: usize) -> Self {
        Self(count)
    }
}

impl TryFrom<i64> for OperatorBudget {
    type Error = BudgetError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        usize::try_from(count)
            .map(Self)
            .map_err(|_| BudgetError::Negative(count))
    }
}

impl FromStr for OperatorBudget {
    type Err = BudgetError;

    /// # Errors
    ///
    /// Returns an error if the input is not an integer or is negative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        debug!("Parsing operator count '{}'", trimmed);

        let count = trimmed.parse::<i64>().map_err(|_| {
            warn!("Operator count is not an integer: '{}'", s);
            BudgetError::InvalidArgument(s.to_string())
        })?;

        Self::try_from(count)
    }
}

impl fmt::Display for OperatorBudget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
