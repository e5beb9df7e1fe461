use crate::core::evaluator::Evaluator;
use crate::core::tokenizer;
use crate::core::{ConfigProvider, Console, Evaluation};
use crate::utils::error::Result;

pub struct CalcEngine<C: Console, P: ConfigProvider> {
    console: C,
    config: P,
    evaluator: Evaluator,
}

impl<C: Console, P: ConfigProvider> CalcEngine<C, P> {
    pub fn new(console: C, config: P) -> Self {
        let evaluator = Evaluator::from_config(&config);
        Self {
            console,
            config,
            evaluator,
        }
    }

    pub fn evaluate_line(&self, line: &str) -> Result<Evaluation> {
        let tokens = tokenizer::tokenize(line)?;
        tracing::debug!("Tokens: {:?}", tokens);
        self.evaluator.evaluate(tokens)
    }

    /// Prompts, reads one line and answers with one `Result:` or `Error:` line.
    ///
    /// Evaluation errors are reported on the console and also returned, so the
    /// caller can pick an exit code. Console failures are returned unreported.
    pub fn run(&mut self) -> Result<Evaluation> {
        self.console.write(self.config.prompt())?;

        let line = match self.console.read_line()? {
            Some(line) => line,
            None => {
                tracing::warn!("No input received");
                String::new()
            }
        };

        let outcome = self.evaluate_line(&line);
        match &outcome {
            Ok(evaluation) => tracing::info!("Evaluated {:?} to {}", line.trim(), evaluation),
            Err(e) => tracing::warn!("Evaluation failed: {} (Category: {:?})", e, e.category()),
        }

        self.console.write_line(&render(&outcome))?;
        outcome
    }

    pub fn into_console(self) -> C {
        self.console
    }
}

/// Renders the single output line for an evaluation outcome.
pub fn render(outcome: &Result<Evaluation>) -> String {
    match outcome {
        Ok(evaluation) => format!("Result: {}", evaluation),
        Err(e) => format!("Error: {}", e.user_friendly_message()),
    }
}
