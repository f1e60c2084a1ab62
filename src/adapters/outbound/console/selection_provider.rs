use crate::ports::outbound::SelectionProvider;
use crate::sbom_aggregation::domain::CollectionSummary;
use crate::shared::Result;
use anyhow::Context;
use std::cell::RefCell;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// PromptSelectionProvider adapter asking the operator on a terminal
///
/// Reads one line per question from `R` and writes prompts to `W`. End of
/// input is returned as an empty answer; invalid UTF-8 is decoded lossily.
pub struct PromptSelectionProvider<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl PromptSelectionProvider<StdinLock<'static>, Stdout> {
    /// Creates a provider bound to the process' stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptSelectionProvider<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        {
            let mut output = self.output.borrow_mut();
            write!(output, "{}", prompt).context("Failed to write prompt")?;
            output.flush().context("Failed to write prompt")?;
        }

        // Bytes that are not UTF-8 become U+FFFD
        let mut line = Vec::new();
        self.input
            .borrow_mut()
            .read_until(b'\n', &mut line)
            .context("Failed to read answer")?;

        let answer = String::from_utf8_lossy(&line);
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> SelectionProvider for PromptSelectionProvider<R, W> {
    fn prompt_search_text(&self, prompt: &str) -> Result<String> {
        self.ask(prompt)
    }

    fn prompt_selection(&self, candidates: &[CollectionSummary]) -> Result<String> {
        {
            let mut output = self.output.borrow_mut();
            writeln!(output, "Please choose a collection:").context("Failed to write prompt")?;
            for (index, candidate) in candidates.iter().enumerate() {
                writeln!(output, "{}) {}", index + 1, candidate.name)
                    .context("Failed to write prompt")?;
            }
        }

        self.ask("Enter number: ")
    }
}
