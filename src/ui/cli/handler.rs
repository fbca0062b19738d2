// Fri Oct 16 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::dispatch::{Artifact, Dispatcher, Invocation};
use crate::error::CliError;
use crate::generator::ProcessGenerator;
use crate::loader::resolve;
use crate::ui::{print_info, print_success};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub struct CommandHandler {
    process_dir: Option<PathBuf>,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { process_dir: None }
    }

    /// Uses `dir` instead of the process working directory as the base for
    /// `--cwd`, `--config` and the config file's `working_dir`.
    pub fn with_process_dir(mut self, dir: PathBuf) -> Self {
        self.process_dir = Some(dir);
        self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<Artifact> {
        let invocation = Invocation::from(args.command.clone());
        if let Invocation::Unrecognized(given) = &invocation {
            return Err(CliError::InvalidInvocation { given: given.clone() }.into());
        }

        let process_dir = match &self.process_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Cannot determine the current directory")?,
        };
        let base_dir = args
            .cwd
            .as_ref()
            .map(|dir| resolve(&process_dir, dir))
            .unwrap_or_else(|| process_dir.clone());

        let mut config = self.load_config(&args, &base_dir)?;
        if args.cwd.is_some() {
            config = config.with_working_dir(base_dir);
        }
        self.setup_logging(&config)?;

        let working_dir = match &config.working_dir {
            Some(dir) => resolve(&process_dir, dir),
            None => process_dir,
        };

        let generator = ProcessGenerator::from_config(&config.generator);
        log::debug!("Using generator {:?} in {:?}", generator.program(), working_dir);

        let dispatcher = Dispatcher::new(generator, working_dir);
        let operation = invocation.into_operation(dispatcher.working_dir())?;

        if !args.quiet {
            print_info(&format!("Generating {}...", operation.kind()));
        }

        let artifact = dispatcher.execute(operation)?;

        if !args.quiet {
            print_success(&format!("Wrote {}", artifact.output.display()));
        }

        Ok(artifact)
    }

    fn load_config(&self, args: &Args, base_dir: &Path) -> Result<Config, CliError> {
        let mut config = match &args.config {
            Some(path) => Config::load(resolve(base_dir, path))?,
            None => Config::discover(base_dir)?,
        };

        config.apply_env();

        if let Some(program) = &args.generator {
            config = config.with_generator_program(program.clone());
        }
        if let Some(level) = &args.log_level {
            config = config.with_log_level(level.clone());
        }
        if args.no_color {
            config = config.with_color(false);
        }

        config.validate()?;
        Ok(config)
    }

    fn setup_logging(&self, config: &Config) -> anyhow::Result<()> {
        if !config.color {
            colored::control::set_override(false);
        }

        let installed = env_logger::Builder::new()
            .filter_level(config.log_filter())
            .format_timestamp(None)
            .try_init();

        // Repeated runs in one process keep the first logger.
        if let Err(e) = installed {
            log::debug!("Keeping the existing logger: {}", e);
        }

        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
