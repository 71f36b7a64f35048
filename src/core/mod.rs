pub mod engine;
pub mod evaluator;
pub mod formatter;
pub mod numeral;
pub mod parser;
pub mod pipeline;

pub use crate::domain::model::{Evaluation, Expression, NumeralSystem, Operator};
pub use crate::domain::ports::{MessageProvider, Pipeline};
pub use crate::utils::error::Result;
