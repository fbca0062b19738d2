// Fri Oct 16 2026 - Alex

use crate::error::{CliError, CliResult, HELP_URL};
use crate::generator::{ApolloQueryOptions, ResolverOptions};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

pub const SUBCOMMANDS: &[&str] = &["types", "resolvers", "apolloqueries"];

#[derive(Parser, Debug)]
#[command(name = "graphql-to-ts")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Generate TypeScript types, resolvers and Apollo queries from GraphQL definitions", long_about = None)]
#[command(after_help = format!("See {}.", HELP_URL))]
#[command(disable_help_subcommand = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON or YAML config file (defaults to ./.graphql-to-ts.json when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory that relative paths are resolved against
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Generator program to run
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub generator: Option<String>,

    #[arg(short, long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate TypeScript type declarations
    Types(TypesArgs),

    /// Generate resolver code
    Resolvers(ResolversArgs),

    /// Generate Apollo client queries
    #[command(name = "apolloqueries")]
    ApolloQueries(ApolloQueriesArgs),

    #[command(external_subcommand)]
    Unrecognized(Vec<String>),
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct TypesArgs {
    /// Input definitions (.json, .yaml, .graphql)
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ResolversArgs {
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    #[arg(long = "apimodule", value_name = "MODULE")]
    pub api_module: Option<String>,

    #[arg(long = "graphqlmodule", value_name = "MODULE")]
    pub graphql_module: Option<String>,

    #[arg(long = "parsefuncname", value_name = "NAME")]
    pub parse_func_name: Option<String>,

    #[arg(long = "parsefuncmodule", value_name = "MODULE")]
    pub parse_func_module: Option<String>,
}

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct ApolloQueriesArgs {
    /// Query definitions
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Schema the queries are written against
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: PathBuf,

    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    #[arg(long = "gqltypesmodule", value_name = "MODULE")]
    pub gql_types_module: Option<String>,
}

impl Args {
    /// Parses a full argv (program name first). The first argument after the
    /// program name must be a subcommand; anything else, including a flag or
    /// nothing at all, is an invalid invocation rather than a usage error.
    pub fn try_parse_invocation<I, T>(argv: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();

        match argv.get(1).and_then(|arg| arg.to_str()) {
            Some(name) if SUBCOMMANDS.contains(&name) => Ok(Self::try_parse_from(argv)?),
            _ => Err(CliError::InvalidInvocation {
                given: argv.get(1).map(|arg| arg.to_string_lossy().into_owned()),
            }),
        }
    }
}

impl ResolversArgs {
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions {
            api_module: self.api_module.clone(),
            graphql_module: self.graphql_module.clone(),
            parse_result_function_name: self.parse_func_name.clone(),
            parse_result_module: self.parse_func_module.clone(),
        }
    }
}

impl ApolloQueriesArgs {
    pub fn options(&self) -> ApolloQueryOptions {
        ApolloQueryOptions {
            graphql_types_module: self.gql_types_module.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_types_flags() {
        let args = parse(&["graphql-to-ts", "types", "-i", "./types.json", "-o", "types.ts"]);
        assert_eq!(
            args.command,
            Some(Command::Types(TypesArgs {
                input: PathBuf::from("./types.json"),
                output: PathBuf::from("types.ts"),
            }))
        );
    }

    #[test]
    fn test_equals_form_and_any_order() {
        let args = parse(&[
            "graphql-to-ts",
            "apolloqueries",
            "-o",
            "queries.ts",
            "--schema=schema.json",
            "--gqltypesmodule",
            "./types",
            "-i",
            "queries.yaml",
        ]);
        match args.command {
            Some(Command::ApolloQueries(a)) => {
                assert_eq!(a.input, PathBuf::from("queries.yaml"));
                assert_eq!(a.schema, PathBuf::from("schema.json"));
                assert_eq!(a.output, PathBuf::from("queries.ts"));
                assert_eq!(a.options().graphql_types_module.as_deref(), Some("./types"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_resolver_flags_map_to_options() {
        let args = parse(&[
            "graphql-to-ts",
            "resolvers",
            "-i",
            "schema.graphql",
            "-o",
            "resolvers.ts",
            "--apimodule",
            "./api",
            "--parsefuncname=parseResult",
        ]);
        match args.command {
            Some(Command::Resolvers(r)) => assert_eq!(
                r.options(),
                ResolverOptions {
                    api_module: Some("./api".to_string()),
                    graphql_module: None,
                    parse_result_function_name: Some("parseResult".to_string()),
                    parse_result_module: None,
                }
            ),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_and_missing_subcommand() {
        let args = parse(&["graphql-to-ts", "foo", "-i", "x"]);
        assert_eq!(
            args.command,
            Some(Command::Unrecognized(vec!["foo".to_string(), "-i".to_string(), "x".to_string()]))
        );

        assert_eq!(parse(&["graphql-to-ts"]).command, None);
    }

    #[test]
    fn test_leading_argument_must_be_a_subcommand() {
        let argvs: [&[&str]; 5] = [
            &["graphql-to-ts", "help"],
            &["graphql-to-ts", "--foo"],
            &["graphql-to-ts", "-i", "a.json", "-o", "b.ts"],
            &["graphql-to-ts", "--quiet", "types", "-i", "a.json", "-o", "b.ts"],
            &["graphql-to-ts"],
        ];

        for argv in argvs {
            match Args::try_parse_invocation(argv) {
                Err(CliError::InvalidInvocation { given }) => {
                    assert_eq!(given.as_deref(), argv.get(1).copied())
                }
                other => panic!("{:?} gave {:?}", argv, other),
            }
        }
    }

    #[test]
    fn test_help_is_not_a_subcommand() {
        let args = parse(&["graphql-to-ts", "help"]);
        assert_eq!(args.command, Some(Command::Unrecognized(vec!["help".to_string()])));
    }

    #[test]
    fn test_parse_invocation_accepts_subcommands() {
        let args = Args::try_parse_invocation([
            "graphql-to-ts",
            "resolvers",
            "-i",
            "schema.graphql",
            "-o",
            "resolvers.ts",
            "--no-color",
        ])
        .unwrap();
        assert!(matches!(args.command, Some(Command::Resolvers(_))));
        assert!(args.no_color);

        let err = Args::try_parse_invocation(["graphql-to-ts", "types", "-i", "a.json"]).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn test_missing_required_flag() {
        let err = Args::try_parse_from(["graphql-to-ts", "types", "-i", "a.json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&[
            "graphql-to-ts",
            "types",
            "-i",
            "a.json",
            "-o",
            "a.ts",
            "--cwd",
            "/tmp/proj",
            "--quiet",
        ]);
        assert_eq!(args.cwd, Some(PathBuf::from("/tmp/proj")));
        assert!(args.quiet);
    }
}
