//! Styled terminal output.
//!
//! Colored progress in normal mode; in verbose mode tracing takes over
//! and only errors are printed here.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub colors_enabled: bool,
    pub verbose: bool,
}

impl UiConfig {
    /// Create UI config from environment and args
    pub fn new(verbose: bool) -> Self {
        let colors_enabled = should_use_colors();
        Self {
            colors_enabled,
            verbose,
        }
    }
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    // Check NO_COLOR env (standard: https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check FORCE_COLOR env
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Check if stderr is a terminal
    io::stderr().is_terminal()
}

/// Styled output writer
pub struct Ui {
    config: UiConfig,
    writer: Box<dyn Write>,
}

impl Ui {
    /// Create a new UI with stderr output
    pub fn new(config: UiConfig) -> Self {
        // Set colored crate's global color setting
        if !config.colors_enabled {
            colored::control::set_override(false);
        }

        Self {
            config,
            writer: Box::new(io::stderr()),
        }
    }

    /// Create UI with custom writer (for testing)
    pub fn with_writer(config: UiConfig, writer: Box<dyn Write>) -> Self {
        if !config.colors_enabled {
            colored::control::set_override(false);
        }

        Self { config, writer }
    }

    /// Create a UI that discards everything (for testing)
    pub fn silent() -> Self {
        Self {
            config: UiConfig {
                colors_enabled: false,
                verbose: false,
            },
            writer: Box::new(io::sink()),
        }
    }

    /// Print the application header
    pub fn print_header(&mut self, version: &str) {
        if self.config.verbose {
            let _ = writeln!(self.writer, "retemplate v{}", version);
            let _ = writeln!(self.writer);
            return;
        }

        if self.config.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {}",
                "retemplate".bright_cyan().bold(),
                format!("v{}", version).dimmed()
            );
        } else {
            let _ = writeln!(self.writer, "retemplate v{}", version);
        }
        let _ = writeln!(self.writer);
    }

    /// Print a section header
    pub fn section(&mut self, title: &str) {
        if self.config.verbose {
            return;
        }
        let _ = writeln!(self.writer);
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", title.bold());
        } else {
            let _ = writeln!(self.writer, "{}", title);
        }
    }

    /// Print a success message with checkmark
    pub fn success(&mut self, msg: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✓".green().bold(), msg.green());
        } else {
            let _ = writeln!(self.writer, "* {}", msg);
        }
    }

    /// Print a warning message
    pub fn warning(&mut self, msg: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), msg.yellow());
        } else {
            let _ = writeln!(self.writer, "! {}", msg);
        }
    }

    /// Print an error message
    pub fn error(&mut self, msg: &str) {
        // Errors shown in both modes
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "✗".red().bold(), msg.red());
        } else {
            let _ = writeln!(self.writer, "X {}", msg);
        }
    }

    /// Print a dim/muted message
    pub fn dim(&mut self, msg: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.dimmed());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Print a step in progress
    pub fn step(&mut self, msg: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = write!(self.writer, "{}", format!("{}... ", msg).dimmed());
        } else {
            let _ = write!(self.writer, "{}... ", msg);
        }
        let _ = self.writer.flush();
    }

    /// Complete a step with a result note
    pub fn step_done(&mut self, msg: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", msg.green());
        } else {
            let _ = writeln!(self.writer, "{}", msg);
        }
    }

    /// Print a key-value pair
    pub fn kv(&mut self, key: &str, value: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}: {}", key.bold(), value);
        } else {
            let _ = writeln!(self.writer, "{}: {}", key, value);
        }
    }

    /// Print a blank line
    pub fn blank(&mut self) {
        if self.config.verbose {
            return;
        }
        let _ = writeln!(self.writer);
    }

    /// Print a rename as `from -> to`
    pub fn list_item(&mut self, from: &str, to: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = writeln!(
                self.writer,
                "  {} {} {}",
                from.dimmed(),
                "→".cyan(),
                to.bold()
            );
        } else {
            let _ = writeln!(self.writer, "  {} -> {}", from, to);
        }
    }

    /// Check if in verbose mode
    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }
}
