use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Arithmetic operation is not supported")]
    ArithmeticOperationNotSupported,

    #[error("Calculator does not support this operation")]
    CalculationNotSupportedOperation,

    #[error("{value}: number is not supported by the calculator")]
    NumberNotFound { value: String },

    #[error("Calculator does not support the result of the arithmetic operation")]
    CalculationResultNotSupported,

    #[error("Division by zero is not supported")]
    DivisionByZero,

    #[error("Arithmetic overflow in {expression}")]
    ArithmeticOverflow { expression: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

/// The fixed set of outcomes a user can see. Every calculation error collapses
/// into exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArithmeticOperationNotSupported,
    CalculationNotSupportedOperation,
    CalculationResultNotSupported,
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Evaluation,
    System,
}

impl CalcError {
    pub fn number_not_found(value: impl ToString) -> Self {
        Self::NumberNotFound {
            value: value.to_string(),
        }
    }

    /// Umbrella kind shown to the user. `NumberNotFound` only ever surfaces as
    /// an unsupported result; I/O and config failures have no kind.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::ArithmeticOperationNotSupported => Some(ErrorKind::ArithmeticOperationNotSupported),
            Self::CalculationNotSupportedOperation => {
                Some(ErrorKind::CalculationNotSupportedOperation)
            }
            Self::NumberNotFound { .. }
            | Self::CalculationResultNotSupported
            | Self::ArithmeticOverflow { .. } => Some(ErrorKind::CalculationResultNotSupported),
            Self::DivisionByZero => Some(ErrorKind::DivisionByZero),
            Self::IoError(_) | Self::ConfigError { .. } => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ArithmeticOperationNotSupported | Self::CalculationNotSupportedOperation => {
                ErrorCategory::Input
            }
            Self::NumberNotFound { .. }
            | Self::CalculationResultNotSupported
            | Self::DivisionByZero
            | Self::ArithmeticOverflow { .. } => ErrorCategory::Evaluation,
            Self::IoError(_) | Self::ConfigError { .. } => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ArithmeticOperationNotSupported => "Use one of the operators + - / *",
            Self::CalculationNotSupportedOperation => {
                "Enter exactly two operands, both 1..10 or both I..X"
            }
            Self::NumberNotFound { .. } | Self::CalculationResultNotSupported => {
                "Roman results must be between I and C"
            }
            Self::DivisionByZero => "Use a non-zero divisor",
            Self::ArithmeticOverflow { .. } => "Keep operands within the 64-bit integer range",
            Self::IoError(_) => "Check that stdin and stdout are readable and writable",
            Self::ConfigError { .. } => "Fix the configuration file and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_not_found_surfaces_as_result_error() {
        let err = CalcError::number_not_found(101);
        assert_eq!(err.kind(), Some(ErrorKind::CalculationResultNotSupported));
        assert_eq!(err.to_string(), "101: number is not supported by the calculator");
        assert_eq!(err.category(), ErrorCategory::Evaluation);
    }

    #[test]
    fn test_overflow_surfaces_as_result_error() {
        let err = CalcError::ArithmeticOverflow {
            expression: "9223372036854775807 + 1".to_string(),
        };
        assert_eq!(err.kind(), Some(ErrorKind::CalculationResultNotSupported));
        assert_eq!(err.category(), ErrorCategory::Evaluation);
    }

    #[test]
    fn test_system_errors_have_no_kind() {
        let err = CalcError::IoError(std::io::Error::other("broken pipe"));
        assert_eq!(err.kind(), None);
        assert_eq!(err.category(), ErrorCategory::System);

        let err = CalcError::ConfigError {
            field: "output.locale".to_string(),
            message: "unknown".to_string(),
        };
        assert_eq!(err.kind(), None);
    }
}
