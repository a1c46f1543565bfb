//! AWS Systems Manager Parameter Store client
//!
//! Lists parameters as a table, CSV or JSON, or creates, updates and deletes
//! a single parameter.

use std::process;

mod opts;

use opts::PstoreOpts;

use pstore_cli::logging::init_logging;
use pstore_cli::{format_error_for_stderr, run_cli, CliError, FAILURE_EXIT_CODE, VERSION};

const PROGRAM_NAME: &str = "pstore";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let opts = match PstoreOpts::try_parse_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(err) => {
            let code = if err.use_stderr() {
                FAILURE_EXIT_CODE
            } else {
                0
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    if opts.version {
        println!("{VERSION}");
        return;
    }

    init_logging();

    let config = match opts.config() {
        Ok(config) => config,
        Err(err) => {
            let err = CliError::from(err);
            eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
            process::exit(err.exit_code());
        }
    };

    if let Err(err) = run_cli(&config).await {
        eprintln!("{}", format_error_for_stderr(PROGRAM_NAME, &err));
        process::exit(err.exit_code());
    }
}
