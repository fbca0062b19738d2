// Fri Oct 16 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{ApolloQueriesArgs, Args, Command, ResolversArgs, TypesArgs};
pub use handler::CommandHandler;

use crate::error::CliResult;

pub fn parse_args() -> CliResult<Args> {
    Args::try_parse_invocation(std::env::args_os())
}

pub fn run() -> anyhow::Result<()> {
    let args = parse_args()?;
    let handler = CommandHandler::new();
    handler.execute(args)?;
    Ok(())
}
