use crate::core::{MessageProvider, Pipeline};
use crate::utils::error::{ErrorKind, Result};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(String),
    Failed(ErrorKind),
}

pub struct CalcEngine<P: Pipeline, M: MessageProvider> {
    pipeline: P,
    messages: M,
}

impl<P: Pipeline, M: MessageProvider> CalcEngine<P, M> {
    pub fn new(pipeline: P, messages: M) -> Self {
        Self { pipeline, messages }
    }

    /// Runs the pipeline on one line without touching any I/O.
    pub fn calculate(&self, line: &str) -> Result<String> {
        let expression = self.pipeline.parse(line)?;
        let evaluation = self.pipeline.evaluate(&expression)?;
        self.pipeline.render(evaluation)
    }

    /// Prints the prompt, reads one line, writes one answer line.
    ///
    /// Calculation failures are reported on `output` and returned as
    /// [`Outcome::Failed`]; only I/O errors come back as `Err`.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<Outcome> {
        writeln!(output, "{}", self.messages.prompt())?;
        output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail operand validation.
        let mut buf = Vec::new();
        let read = input.read_until(b'\n', &mut buf)?;
        if read == 0 {
            tracing::debug!("No input received");
        }
        let line = String::from_utf8_lossy(&buf);

        let outcome = match self.calculate(&line) {
            Ok(value) => Outcome::Value(value),
            Err(e) => match e.kind() {
                Some(kind) => {
                    tracing::info!(
                        "Calculation failed: {} (Category: {:?})",
                        e,
                        e.category()
                    );
                    tracing::debug!("Suggestion: {}", e.recovery_suggestion());
                    Outcome::Failed(kind)
                }
                None => return Err(e),
            },
        };

        match &outcome {
            Outcome::Value(value) => writeln!(output, "{}", value)?,
            Outcome::Failed(kind) => writeln!(output, "{}", self.messages.message_for(*kind))?,
        }
        output.flush()?;

        Ok(outcome)
    }
}
