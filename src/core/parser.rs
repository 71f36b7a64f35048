//! Turns a raw input line into a validated [`Expression`].

use crate::core::numeral::{is_arabic, is_roman};
use crate::domain::model::{Expression, NumeralSystem, Operator};
use crate::utils::error::{CalcError, Result};

/// Drops the line terminator and every space. Other whitespace (tabs) is kept
/// and makes the operand unrecognized.
pub fn normalize(input: &str) -> String {
    input
        .trim_end_matches(|c: char| c == '\r' || c == '\n')
        .replace(' ', "")
}

/// Containment check in priority order, not a left-to-right scan:
/// `"2*3-1"` yields `-`.
pub fn detect_operator(text: &str) -> Result<Operator> {
    Operator::PRIORITY
        .into_iter()
        .find(|operator| text.contains(operator.symbol()))
        .ok_or(CalcError::ArithmeticOperationNotSupported)
}

pub fn split_expression(text: &str, operator: Operator) -> Vec<&str> {
    text.split(operator.symbol()).collect()
}

pub fn classify(operand: &str) -> Option<NumeralSystem> {
    if is_arabic(operand) {
        Some(NumeralSystem::Arabic)
    } else if is_roman(operand) {
        Some(NumeralSystem::Roman)
    } else {
        None
    }
}

pub fn validate_operands(operands: &[&str], operator: Operator) -> Result<Expression> {
    let [lhs, rhs] = operands else {
        return Err(CalcError::CalculationNotSupportedOperation);
    };

    match (classify(lhs), classify(rhs)) {
        (Some(left), Some(right)) if left == right => Ok(Expression::new(
            lhs.to_string(),
            rhs.to_string(),
            operator,
            left,
        )),
        _ => Err(CalcError::CalculationNotSupportedOperation),
    }
}

pub fn parse_expression(input: &str) -> Result<Expression> {
    let text = normalize(input);
    let operator = detect_operator(&text)?;
    let operands = split_expression(&text, operator);
    validate_operands(&operands, operator)
}
