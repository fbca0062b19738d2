// Fri Oct 16 2026 - Alex

use graphql_to_ts_cli::error::CliError;
use graphql_to_ts_cli::ui::{cli, ErrorDisplay};
use std::process;

fn main() {
    let err = match cli::run() {
        Ok(()) => return,
        Err(err) => err,
    };

    match err.downcast::<CliError>() {
        // clap prints help, version and usage errors itself
        Ok(CliError::Usage(usage)) => usage.exit(),
        Ok(err) => {
            ErrorDisplay::from_env().print(&err);
            process::exit(err.exit_code());
        }
        Err(err) => {
            ErrorDisplay::from_env().print(&*err);
            process::exit(1);
        }
    }
}
