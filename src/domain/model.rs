use crate::utils::error::{CalcError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    Arabic,
    Roman,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Divide,
    Multiply,
}

impl Operator {
    /// Detection order. The first operator contained in the input wins,
    /// regardless of where in the input it appears.
    pub const PRIORITY: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Divide,
        Operator::Multiply,
    ];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Divide => '/',
            Operator::Multiply => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '/' => Ok(Operator::Divide),
            '*' => Ok(Operator::Multiply),
            _ => Err(CalcError::ArithmeticOperationNotSupported),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A validated two-operand expression. Both operands are known members of
/// `system`; build one with `core::parser::validate_operands`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    lhs: String,
    rhs: String,
    operator: Operator,
    system: NumeralSystem,
}

impl Expression {
    pub(crate) fn new(lhs: String, rhs: String, operator: Operator, system: NumeralSystem) -> Self {
        Self {
            lhs,
            rhs,
            operator,
            system,
        }
    }

    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    pub fn rhs(&self) -> &str {
        &self.rhs
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn system(&self) -> NumeralSystem {
        self.system
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.operator, self.rhs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i64,
    pub system: NumeralSystem,
}
