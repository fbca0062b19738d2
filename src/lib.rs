// Fri Oct 16 2026 - Alex

pub mod config;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod loader;
pub mod output;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use dispatch::{Artifact, Dispatcher, Invocation, Operation, OperationKind};
pub use error::{CliError, CliResult};
pub use generator::{ApolloQueryOptions, Generator, ProcessGenerator, ResolverOptions};
pub use loader::{LoaderRegistry, ModuleLoader};
