//! Progress reporting for CLI commands
//!
//! Commands receive a [`Reporter`] constructed once in `main` instead of
//! mutating process-wide logging state.

use console::style;

/// Quiet/verbose aware progress output.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }

    /// One progress line per pipeline stage.
    pub fn step(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("→").blue(), message);
        }
    }

    /// Extra detail, shown only with --verbose.
    pub fn detail(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("  {}", style(message).dim());
        }
    }

    /// Final confirmation for a completed operation.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Warnings go to stderr and ignore --quiet.
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", style("!").yellow(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_flags() {
        let reporter = Reporter::new(true, false);
        assert!(reporter.quiet);
        assert!(!reporter.verbose);
    }
}
