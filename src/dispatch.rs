// Fri Oct 16 2026 - Alex

use crate::error::{CliError, CliResult};
use crate::generator::{ApolloQueryOptions, Generator, ResolverOptions};
use crate::loader::{resolve, LoaderRegistry};
use crate::output::write_artifact;
use crate::ui::cli::args::{ApolloQueriesArgs, Args, Command, ResolversArgs, TypesArgs};
use log::debug;
use serde_json::Value;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// What the user asked for, before anything touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Types(TypesArgs),
    Resolvers(ResolversArgs),
    ApolloQueries(ApolloQueriesArgs),
    Unrecognized(Option<String>),
}

impl From<Option<Command>> for Invocation {
    fn from(command: Option<Command>) -> Self {
        match command {
            Some(Command::Types(args)) => Invocation::Types(args),
            Some(Command::Resolvers(args)) => Invocation::Resolvers(args),
            Some(Command::ApolloQueries(args)) => Invocation::ApolloQueries(args),
            Some(Command::Unrecognized(mut rest)) => {
                Invocation::Unrecognized(if rest.is_empty() { None } else { Some(rest.remove(0)) })
            }
            None => Invocation::Unrecognized(None),
        }
    }
}

impl Invocation {
    /// Resolves every path flag against `working_dir`. Unrecognized
    /// subcommands fail here, before any input is read.
    pub fn into_operation(self, working_dir: &Path) -> CliResult<Operation> {
        match self {
            Invocation::Types(args) => Ok(Operation::Types {
                input: resolve(working_dir, &args.input),
                output: resolve(working_dir, &args.output),
            }),
            Invocation::Resolvers(args) => Ok(Operation::Resolvers {
                input: resolve(working_dir, &args.input),
                output: resolve(working_dir, &args.output),
                options: args.options(),
            }),
            Invocation::ApolloQueries(args) => Ok(Operation::ApolloQueries {
                queries: resolve(working_dir, &args.input),
                schema: resolve(working_dir, &args.schema),
                output: resolve(working_dir, &args.output),
                options: args.options(),
            }),
            Invocation::Unrecognized(given) => Err(CliError::InvalidInvocation { given }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Types,
    Resolvers,
    ApolloQueries,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Types => "types",
            OperationKind::Resolvers => "resolvers",
            OperationKind::ApolloQueries => "apolloqueries",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Types {
        input: PathBuf,
        output: PathBuf,
    },
    Resolvers {
        input: PathBuf,
        output: PathBuf,
        options: ResolverOptions,
    },
    ApolloQueries {
        queries: PathBuf,
        schema: PathBuf,
        output: PathBuf,
        options: ApolloQueryOptions,
    },
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Types { .. } => OperationKind::Types,
            Operation::Resolvers { .. } => OperationKind::Resolvers,
            Operation::ApolloQueries { .. } => OperationKind::ApolloQueries,
        }
    }

    pub fn output(&self) -> &Path {
        match self {
            Operation::Types { output, .. }
            | Operation::Resolvers { output, .. }
            | Operation::ApolloQueries { output, .. } => output,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: OperationKind,
    pub output: PathBuf,
    pub contents: String,
}

pub struct Dispatcher<G> {
    generator: G,
    loaders: LoaderRegistry,
    working_dir: PathBuf,
}

impl<G: Generator> Dispatcher<G> {
    pub fn new<P: Into<PathBuf>>(generator: G, working_dir: P) -> Self {
        Self {
            generator,
            loaders: LoaderRegistry::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn with_loaders(mut self, loaders: LoaderRegistry) -> Self {
        self.loaders = loaders;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Parses a full argv (program name first) and runs the requested
    /// operation. Global options are accepted after the subcommand but ignored
    /// here; the command handler is what applies them.
    pub fn dispatch<I, T>(&self, argv: I) -> CliResult<Artifact>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_invocation(argv)?;
        self.run(Invocation::from(args.command))
    }

    pub fn run(&self, invocation: Invocation) -> CliResult<Artifact> {
        let operation = invocation.into_operation(&self.working_dir)?;
        self.execute(operation)
    }

    pub fn execute(&self, operation: Operation) -> CliResult<Artifact> {
        let kind = operation.kind();
        debug!("Executing {} in {:?}", kind, self.working_dir);

        let (output, contents) = match operation {
            Operation::Types { input, output } => {
                let input = self.load(&input)?;
                (output, self.generator.generate_types(&input)?)
            }
            Operation::Resolvers {
                input,
                output,
                options,
            } => {
                let input = self.load(&input)?;
                (output, self.generator.generate_resolvers(&input, &options)?)
            }
            Operation::ApolloQueries {
                queries,
                schema,
                output,
                options,
            } => {
                let queries = self.load(&queries)?;
                let schema = self.load(&schema)?;
                (
                    output,
                    self.generator
                        .generate_apollo_queries(&queries, &schema, &options)?,
                )
            }
        };

        write_artifact(&output, &contents)?;

        Ok(Artifact {
            kind,
            output,
            contents,
        })
    }

    fn load(&self, path: &Path) -> CliResult<Value> {
        Ok(self.loaders.load(path)?)
    }
}
