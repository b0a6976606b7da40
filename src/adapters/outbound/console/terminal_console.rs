use crate::ports::outbound::OperatorConsole;
use crate::shared::error::GeneratorError;
use crate::shared::Result;
use std::cell::RefCell;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// TerminalConsole adapter for the interactive dialogue
///
/// Labels and informational text go to `output`; answers are read one line
/// at a time from `input`. End of input is reported as `InputClosed`.
pub struct TerminalConsole<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

/// Console bound to the process's stdin and stdout
pub type StdinConsole = TerminalConsole<BufReader<Stdin>, Stdout>;

impl StdinConsole {
    pub fn stdio() -> Self {
        TerminalConsole::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Consumes the console and returns the output sink
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> OperatorConsole for TerminalConsole<R, W> {
    fn prompt_line(&self, label: &str) -> Result<String> {
        {
            let mut output = self.output.borrow_mut();
            output.write_all(label.as_bytes())?;
            output.flush()?;
        }

        let mut line = String::new();
        let read = self.input.borrow_mut().read_line(&mut line)?;
        if read == 0 {
            return Err(GeneratorError::InputClosed {
                label: label.trim().to_string(),
            }
            .into());
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(answer.to_string())
    }

    fn show(&self, text: &str) {
        let mut output = self.output.borrow_mut();
        // a broken stdout surfaces on the next prompt
        let _ = writeln!(output, "{}", text);
        let _ = output.flush();
    }
}
