// Fri Oct 16 2026 - Alex

use crate::config::ENV_NO_COLOR;
use colored::Colorize;
use std::error::Error;
use std::ffi::{OsStr, OsString};

const MAX_CAUSES: usize = 10;

pub struct ErrorDisplay {
    show_cause_chain: bool,
    color_enabled: bool,
}

impl ErrorDisplay {
    pub fn new() -> Self {
        Self {
            show_cause_chain: true,
            color_enabled: true,
        }
    }

    /// Picks colors for errors raised before the config is read: off when
    /// `--no-color` appears in `argv` or `NO_COLOR` is set to a non-empty value.
    pub fn for_invocation<I, T>(argv: I, no_color_env: Option<OsString>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        let no_color_flag = argv.into_iter().any(|arg| arg.as_ref() == "--no-color");
        let no_color_env = no_color_env.map_or(false, |value| !value.is_empty());

        if no_color_flag || no_color_env {
            Self::new().without_colors()
        } else {
            Self::new()
        }
    }

    pub fn from_env() -> Self {
        Self::for_invocation(std::env::args_os(), std::env::var_os(ENV_NO_COLOR))
    }

    pub fn without_colors(mut self) -> Self {
        self.color_enabled = false;
        self
    }

    pub fn without_causes(mut self) -> Self {
        self.show_cause_chain = false;
        self
    }

    pub fn format(&self, error: &dyn Error) -> String {
        let header = if self.color_enabled {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };

        let mut output = format!("{} {}", header, error);

        if self.show_cause_chain {
            let mut source = error.source();
            let mut depth = 0;

            while let Some(cause) = source {
                if depth == MAX_CAUSES {
                    output.push_str("\n  ... (cause chain truncated)");
                    break;
                }

                let arrow = if self.color_enabled {
                    "→".yellow().to_string()
                } else {
                    "->".to_string()
                };

                output.push_str(&format!("\n  {} Caused by: {}", arrow, cause));
                source = cause.source();
                depth += 1;
            }
        }

        output
    }

    pub fn print(&self, error: &dyn Error) {
        eprintln!("{}", self.format(error));
    }
}

impl Default for ErrorDisplay {
    fn default() -> Self {
        Self::new()
    }
}
