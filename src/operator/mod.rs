//! Binary operators and the guards that decide when each one is emitted

use std::fmt;

/// A binary operator in postfix output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Sub,
    Add,
    Mul,
}

impl Operator {
    /// All operators in the order their candidates are emitted for one operand pair
    pub const ALL: [Operator; 3] = [Operator::Sub, Operator::Add, Operator::Mul];

    pub fn symbol(self) -> char {
        match self {
            Operator::Sub => '-',
            Operator::Add => '+',
            Operator::Mul => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Operator::Sub),
            '+' => Some(Operator::Add),
            '*' => Some(Operator::Mul),
            _ => None,
        }
    }

    pub fn is_commutative(self) -> bool {
        !matches!(self, Operator::Sub)
    }

    /// Whether `left right op` should be emitted.
    ///
    /// Subtraction needs distinct operands. Addition needs `left < right` and
    /// multiplication `left <= right`, so only one orientation of a commutative
    /// pair is produced while `x x *` is still kept.
    pub fn admits(self, left: &str, right: &str) -> bool {
        match self {
            Operator::Sub => left != right,
            Operator::Add => left < right,
            Operator::Mul => left <= right,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests;
