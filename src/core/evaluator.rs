use crate::domain::model::Operator;
use crate::utils::error::{CalcError, Result};

/// Integer arithmetic. Division truncates toward zero.
pub fn evaluate(lhs: i64, rhs: i64, operator: Operator) -> Result<i64> {
    let result = match operator {
        Operator::Add => lhs.checked_add(rhs),
        Operator::Subtract => lhs.checked_sub(rhs),
        Operator::Multiply => lhs.checked_mul(rhs),
        Operator::Divide if rhs == 0 => return Err(CalcError::DivisionByZero),
        Operator::Divide => lhs.checked_div(rhs),
    };

    result.ok_or_else(|| CalcError::ArithmeticOverflow {
        expression: format!("{} {} {}", lhs, operator, rhs),
    })
}

pub fn evaluate_symbol(lhs: i64, rhs: i64, symbol: char) -> Result<i64> {
    evaluate(lhs, rhs, Operator::from_symbol(symbol)?)
}
