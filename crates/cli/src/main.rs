//! s3policy - bucket administration for S3-compatible storage
//!
//! Creates, lists and deletes buckets and manages bucket policies, ACLs and
//! CORS rules using credentials from an INI profile.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use s3policy::commands::{self, Cli};
use s3policy::exit_code::ExitCode;

/// Filter used with `--debug`: verbose for this tool, quiet for the SDK
const DEBUG_FILTER: &str = "warn,s3policy=debug,s3policy_core=debug,s3policy_s3=debug";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = commands::parse_error_exit_code(&e);
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    init_tracing(cli.debug);

    // A panic is a failure like any other: log it and exit 1.
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("ERROR happened: {info}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }));

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), profile = ?cli.profile, "Starting");
    let exit_code = commands::execute(cli).await;

    std::process::exit(exit_code.as_i32());
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new(DEBUG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
