//! Line-oriented console used by the menu session and its actions.

use std::io::{self, BufRead, Write};

use crate::printer::{Output, Printer, formatting::format_prompt};

/// The input source and display sink of an interactive session.
///
/// The session and every menu action talk to the user exclusively through
/// this trait, which keeps both testable with scripted input.
pub trait Console {
    /// Shows `prompt` and blocks until one line of input is available.
    ///
    /// Returns `Ok(None)` once the input is exhausted. The returned line has
    /// its trailing newline removed but is otherwise untouched.
    ///
    /// # Errors
    /// Returns an error if reading from the underlying input fails.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Presents one output to the user.
    fn emit(&mut self, output: &Output);
}

/// Asks a question and returns the trimmed answer.
///
/// End of input is treated as an empty answer.
///
/// # Errors
/// Returns an error if reading from the console fails.
pub fn ask(console: &mut dyn Console, prompt: &str) -> io::Result<String> {
    let answer = console.read_line(prompt)?;
    Ok(answer.map(|line| line.trim().to_string()).unwrap_or_default())
}

/// Console backed by the process stdin and stdout.
pub struct StdConsole {
    printer: Printer,
}

impl StdConsole {
    /// Creates a console that renders outputs with `printer`.
    pub fn new(printer: Printer) -> Self {
        Self { printer }
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        if self.printer.color() {
            write!(stdout, "{}", format_prompt(prompt))?;
        } else {
            write!(stdout, "{prompt}")?;
        }
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn emit(&mut self, output: &Output) {
        println!("{}", self.printer.render(output));
    }
}
