//! Progress reporting for sweep execution

use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;
use sweep_application::ports::progress::SweepProgressNotifier;
use sweep_domain::{Combination, InvocationDescriptor, SolverExit};
use tracing::debug;

/// Text of the line announcing a run
pub fn progress_line(combination: &Combination) -> String {
    format!(
        "samples={} threads={} iterations={} file={}",
        combination.triple.samples,
        combination.threads,
        combination.triple.iterations,
        combination.triple.input_file
    )
}

/// Prints one `Exec ...` line to stdout before every run
///
/// The line is flushed before the callback returns: the solver writes to the
/// same terminal, and its output must follow the line that describes it.
pub struct ConsoleProgress {
    color: bool,
    summary: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            color: false,
            summary: true,
        }
    }

    /// Colour the `Exec` prefix and the summary line
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Print a closing line once every run has succeeded
    pub fn with_summary(mut self, summary: bool) -> Self {
        self.summary = summary;
        self
    }

    fn emit(line: &str) {
        println!("{}", line);
        if let Err(e) = io::stdout().flush() {
            debug!("Failed to flush progress line: {}", e);
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepProgressNotifier for ConsoleProgress {
    fn on_invocation_start(
        &self,
        combination: &Combination,
        _total: usize,
        _invocation: &InvocationDescriptor,
    ) {
        let prefix = if self.color {
            "Exec".cyan().bold().to_string()
        } else {
            "Exec".to_string()
        };
        Self::emit(&format!("{} {}", prefix, progress_line(combination)));
    }

    fn on_invocation_complete(
        &self,
        combination: &Combination,
        exit: &SolverExit,
        _elapsed: Duration,
    ) {
        if exit.success() {
            return;
        }
        let mark = if self.color {
            "x".red().to_string()
        } else {
            "x".to_string()
        };
        Self::emit(&format!(
            "{} {} ({})",
            mark,
            progress_line(combination),
            exit
        ));
    }

    fn on_sweep_complete(&self, total: usize, elapsed: Duration) {
        if !self.summary {
            return;
        }
        let message = format!("Sweep complete: {} runs in {:.1?}", total, elapsed);
        if self.color {
            Self::emit(&format!("{} {}", "v".green(), message.green()));
        } else {
            Self::emit(&format!("v {}", message));
        }
    }
}
