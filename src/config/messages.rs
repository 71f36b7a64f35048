use crate::core::MessageProvider;
use crate::utils::error::ErrorKind;
use serde::{Deserialize, Serialize};

pub const PROMPT: &str = "Чего нибудь посчитать?";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub prompt: String,
    pub arithmetic_operation_not_supported: String,
    pub calculation_not_supported_operation: String,
    pub calculation_result_not_supported: String,
    pub division_by_zero: String,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        let (arithmetic, operation, result, division) = match locale {
            Locale::Ru => (
                "Арифмитическая операция не поддерживается",
                "Калькулятор не поддерживает данную операцию",
                "Калькулятор не поддерживает результат арифмитической операции",
                "Деление на ноль не поддерживается",
            ),
            Locale::En => (
                "Arithmetic operation is not supported",
                "Calculator does not support this operation",
                "Calculator does not support the result of the arithmetic operation",
                "Division by zero is not supported",
            ),
        };

        Self {
            prompt: PROMPT.to_string(),
            arithmetic_operation_not_supported: arithmetic.to_string(),
            calculation_not_supported_operation: operation.to_string(),
            calculation_result_not_supported: result.to_string(),
            division_by_zero: division.to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl MessageProvider for Messages {
    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn message_for(&self, kind: ErrorKind) -> &str {
        match kind {
            ErrorKind::ArithmeticOperationNotSupported => &self.arithmetic_operation_not_supported,
            ErrorKind::CalculationNotSupportedOperation => &self.calculation_not_supported_operation,
            ErrorKind::CalculationResultNotSupported => &self.calculation_result_not_supported,
            ErrorKind::DivisionByZero => &self.division_by_zero,
        }
    }
}
