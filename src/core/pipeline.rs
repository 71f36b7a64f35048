use crate::core::{evaluator, formatter, numeral, parser};
use crate::core::{Evaluation, Expression, NumeralSystem, Pipeline};
use crate::utils::error::{CalcError, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct SimplePipeline;

impl SimplePipeline {
    pub fn new() -> Self {
        Self
    }

    fn operand_value(operand: &str, system: NumeralSystem) -> Result<i64> {
        match system {
            NumeralSystem::Roman => numeral::roman_to_arabic(operand),
            NumeralSystem::Arabic => operand
                .parse::<i64>()
                .map_err(|_| CalcError::number_not_found(operand)),
        }
    }
}

impl Pipeline for SimplePipeline {
    fn parse(&self, input: &str) -> Result<Expression> {
        tracing::debug!("Parsing input: {:?}", input);
        let expression = parser::parse_expression(input)?;
        tracing::debug!(
            "Parsed {} as {:?} expression",
            expression,
            expression.system()
        );
        Ok(expression)
    }

    fn evaluate(&self, expression: &Expression) -> Result<Evaluation> {
        let system = expression.system();
        let lhs = Self::operand_value(expression.lhs(), system)?;
        let rhs = Self::operand_value(expression.rhs(), system)?;

        let value = evaluator::evaluate(lhs, rhs, expression.operator())?;
        tracing::debug!("Evaluated {} {} {} = {}", lhs, expression.operator(), rhs, value);

        Ok(Evaluation { value, system })
    }

    fn render(&self, evaluation: Evaluation) -> Result<String> {
        let rendered = formatter::format_result(evaluation)?;
        tracing::debug!("Rendered {} as {}", evaluation.value, rendered);
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Result<String> {
        let pipeline = SimplePipeline::new();
        let expression = pipeline.parse(input)?;
        let evaluation = pipeline.evaluate(&expression)?;
        pipeline.render(evaluation)
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(run("2+2").unwrap(), "4");
        assert_eq!(run("IV+II").unwrap(), "VI");
        assert_eq!(run("10/3").unwrap(), "3");
        assert_eq!(run("IX*X").unwrap(), "XC");
        assert_eq!(run("X * X").unwrap(), "C");
        assert_eq!(run("1 - 10").unwrap(), "-9");
    }

    #[test]
    fn test_failures() {
        assert!(matches!(run("X-X"), Err(CalcError::CalculationResultNotSupported)));
        assert!(matches!(run("I/X"), Err(CalcError::CalculationResultNotSupported)));
        assert!(matches!(run("3+IV"), Err(CalcError::CalculationNotSupportedOperation)));
        assert!(matches!(run("1+2+3"), Err(CalcError::CalculationNotSupportedOperation)));
        assert!(matches!(run("3^2"), Err(CalcError::ArithmeticOperationNotSupported)));
    }

    #[test]
    fn test_evaluation_keeps_system() {
        let pipeline = SimplePipeline::new();
        let expression = pipeline.parse("VII - II").unwrap();
        let evaluation = pipeline.evaluate(&expression).unwrap();
        assert_eq!(
            evaluation,
            Evaluation {
                value: 5,
                system: NumeralSystem::Roman
            }
        );
    }

    #[test]
    fn test_arabic_pairs_match_integer_arithmetic() {
        for lhs in 1..=10i64 {
            for rhs in 1..=10i64 {
                assert_eq!(run(&format!("{}+{}", lhs, rhs)).unwrap(), (lhs + rhs).to_string());
                assert_eq!(run(&format!("{}-{}", lhs, rhs)).unwrap(), (lhs - rhs).to_string());
                assert_eq!(run(&format!("{}*{}", lhs, rhs)).unwrap(), (lhs * rhs).to_string());
            }
        }
    }
}
