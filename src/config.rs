// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = ".graphql-to-ts.json";
pub const DEFAULT_GENERATOR: &str = "graphql-to-ts-generator";

pub const ENV_GENERATOR: &str = "GRAPHQL_TO_TS_GENERATOR";
pub const ENV_LOG: &str = "GRAPHQL_TO_TS_LOG";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Cannot read config file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_GENERATOR.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub working_dir: Option<PathBuf>,
    pub log_level: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            working_dir: None,
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
            _ => ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match ext.to_lowercase().as_str() {
            "json" => serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Loads `.graphql-to-ts.json` from `dir` when present, defaults otherwise.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn apply_env(&mut self) {
        self.apply_env_vars(std::env::vars());
    }

    pub fn apply_env_vars<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                ENV_GENERATOR if !value.is_empty() => self.generator.program = value.to_string(),
                ENV_LOG if !value.is_empty() => self.log_level = value.to_lowercase(),
                ENV_NO_COLOR if !value.is_empty() => self.color = false,
                _ => {}
            }
        }
    }

    pub fn with_generator_program<S: Into<String>>(mut self, program: S) -> Self {
        self.generator.program = program.into();
        self
    }

    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn with_log_level<S: Into<String>>(mut self, level: S) -> Self {
        self.log_level = level.into().to_lowercase();
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "generator.program must not be empty".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "log_level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }
        Ok(())
    }

    pub fn log_filter(&self) -> log::LevelFilter {
        match self.log_level.as_str() {
            "error" => log::LevelFilter::Error,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Warn,
        }
    }
}
