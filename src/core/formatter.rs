use crate::core::numeral::arabic_to_roman;
use crate::domain::model::{Evaluation, NumeralSystem};
use crate::utils::error::{CalcError, Result};

/// Roman results must be at least 1 (and at most 100 to have a numeral);
/// Arabic results are printed as-is, zero and negatives included.
pub fn format_result(evaluation: Evaluation) -> Result<String> {
    match evaluation.system {
        NumeralSystem::Roman if evaluation.value < 1 => {
            Err(CalcError::CalculationResultNotSupported)
        }
        NumeralSystem::Roman => arabic_to_roman(evaluation.value),
        NumeralSystem::Arabic => Ok(evaluation.value.to_string()),
    }
}
