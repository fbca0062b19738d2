// Fri Oct 16 2026 - Alex

use crate::config::ConfigError;
use crate::generator::GeneratorError;
use crate::loader::LoadError;
use std::path::PathBuf;
use thiserror::Error;

pub const HELP_URL: &str = "https://github.com/jeswin/graphql-to-ts-cli";

#[derive(Error, Debug)]
pub enum CliError {
    #[error(
        "Invalid option. Valid options are 'types', 'resolvers' and 'apolloqueries'. See {}.",
        HELP_URL
    )]
    InvalidInvocation { given: Option<String> },

    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("Failed to write {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(e) => e.exit_code(),
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
