//! Line-oriented terminal I/O
//!
//! Wraps an input reader and an output writer so the console views can be
//! driven from stdin/stdout or from a scripted buffer.

use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;

use crate::app::lock;

pub struct Console {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl Console {
    pub fn new(input: impl BufRead + Send + 'static, output: impl Write + Send + 'static) -> Self {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
        }
    }

    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    pub fn print(&self, text: &str) {
        let mut output = lock(&self.output);
        if let Err(e) = output.write_all(text.as_bytes()).and_then(|_| output.flush()) {
            tracing::warn!("Failed to write to console: {}", e);
        }
    }

    pub fn println(&self, line: &str) {
        self.print(&format!("{}\n", line));
    }

    /// Show `label` and read one trimmed line. `None` once input is exhausted.
    pub fn prompt(&self, label: &str) -> Option<String> {
        self.print(label);

        let mut line = String::new();
        match lock(&self.input).read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(e) => {
                tracing::warn!("Failed to read from console: {}", e);
                None
            }
        }
    }

    /// Ask a yes/no question. Anything but y/yes counts as no.
    pub fn confirm(&self, question: &str) -> bool {
        self.prompt(&format!("{} [y/N]: ", question))
            .is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    }
}
