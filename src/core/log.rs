//! Diagnostics on stderr
//!
//! Results go to stdout; everything printed here is for humans watching the run.

use colored::Colorize;

/// How chatty stderr diagnostics are
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_quiet(self) -> bool {
        self == Verbosity::Quiet
    }

    /// Per-step detail, only with --verbose
    pub fn detail(self, message: impl AsRef<str>) {
        if self == Verbosity::Verbose {
            eprintln!("{} {}", "·".dimmed(), message.as_ref());
        }
    }

    /// Something the user probably wants to look at; hidden by --quiet
    pub fn warn(self, message: impl AsRef<str>) {
        if !self.is_quiet() {
            eprintln!("{} {}", "⚠️ ".yellow(), message.as_ref().yellow());
        }
    }
}

/// Globally enable or disable ANSI colors
pub fn set_color(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
