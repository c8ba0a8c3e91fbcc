//! Terminal port for the interactive workflow.
//!
//! The workflow and the answer collector talk to the user exclusively
//! through [`Terminal`], so tests can drive them with a scripted double
//! instead of a real tty.

use std::io::{self, BufRead, Write};

/// Line-oriented terminal interaction
pub trait Terminal {
    /// Write one line of output
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Write a prompt (no newline) and read one line of input,
    /// stripped of its line terminator
    fn prompt(&mut self, prompt: &str) -> io::Result<String>;

    /// Like [`Terminal::prompt`], but the input is not echoed
    fn prompt_secret(&mut self, prompt: &str) -> io::Result<String>;
}

/// Production terminal over stdin/stdout
pub struct StdTerminal;

impl Terminal for StdTerminal {
    fn say(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            // Closed stdin would otherwise spin the re-prompt loops
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while waiting for input",
            ));
        }
        while input.ends_with('\n') || input.ends_with('\r') {
            input.pop();
        }
        Ok(input)
    }

    fn prompt_secret(&mut self, prompt: &str) -> io::Result<String> {
        rpassword::prompt_password(prompt)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Terminal;
    use std::collections::VecDeque;
    use std::io;

    /// Scripted terminal double: replays canned input lines, captures all
    /// output, and counts reads so tests can assert prompt behavior.
    pub(crate) struct ScriptedTerminal {
        inputs: VecDeque<String>,
        pub output: String,
        pub reads: usize,
    }

    impl ScriptedTerminal {
        pub fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                output: String::new(),
                reads: 0,
            }
        }

        fn next_input(&mut self) -> io::Result<String> {
            self.reads += 1;
            self.inputs.pop_front().ok_or_else(|| {
                io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
            })
        }
    }

    impl Terminal for ScriptedTerminal {
        fn say(&mut self, line: &str) -> io::Result<()> {
            self.output.push_str(line);
            self.output.push('\n');
            Ok(())
        }

        fn prompt(&mut self, prompt: &str) -> io::Result<String> {
            self.output.push_str(prompt);
            self.next_input()
        }

        fn prompt_secret(&mut self, prompt: &str) -> io::Result<String> {
            self.output.push_str(prompt);
            self.next_input()
        }
    }
}
