use crate::domain::model::{Evaluation, Expression};
use crate::utils::error::{ErrorKind, Result};

pub trait Pipeline {
    fn parse(&self, input: &str) -> Result<Expression>;
    fn evaluate(&self, expression: &Expression) -> Result<Evaluation>;
    fn render(&self, evaluation: Evaluation) -> Result<String>;
}

pub trait MessageProvider {
    fn prompt(&self) -> &str;
    fn message_for(&self, kind: ErrorKind) -> &str;
}
