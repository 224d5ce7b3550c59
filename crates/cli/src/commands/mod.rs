//! CLI command definitions and execution
//!
//! Every invocation runs exactly one subcommand: load the profile, build a
//! client, issue the call, print the result.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use s3policy_core::{BucketStore, DEFAULT_CONFIG_PATH, Error, ProfileLoader};
use s3policy_s3::S3Client;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

mod acl;
mod bucket;
mod cors;
mod policy;

/// s3policy - bucket administration for S3-compatible storage
///
/// Manages buckets, bucket policies, ACLs and CORS rules using
/// credentials from a profile in an INI configuration file.
#[derive(Parser, Debug)]
#[command(name = "s3policy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profile name (section of the config file), required
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Config INI file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Disable the wait spinner
    #[arg(long, global = true, default_value = "false")]
    pub no_progress: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Bucket selector shared by every bucket-scoped command
#[derive(Args, Debug, Clone)]
pub struct BucketArgs {
    /// Bucket name
    #[arg(short, long)]
    pub bucket: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Put a policy
    PutPolicy(policy::PutPolicyArgs),

    /// Display a policy
    GetPolicy(BucketArgs),

    /// Delete a policy
    DelPolicy(BucketArgs),

    /// List buckets
    ListBuckets,

    /// Create a bucket
    CreateBucket(BucketArgs),

    /// Delete a bucket
    DelBucket(BucketArgs),

    /// Get bucket's ACL
    GetBucketAcl(acl::GetBucketAclArgs),

    /// Get bucket's CORS
    GetCors(BucketArgs),

    /// Put bucket's CORS
    PutCors(BucketArgs),

    /// Delete bucket's CORS
    DelCors(BucketArgs),
}

impl Cli {
    /// Output configuration derived from the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            json: self.json,
            no_color: self.no_color,
            no_progress: self.no_progress,
            quiet: self.quiet,
        }
    }
}

/// Exit code for an argument parsing failure
///
/// `--help` and `--version` are reported through clap errors too and succeed.
pub fn parse_error_exit_code(err: &clap::Error) -> ExitCode {
    if err.use_stderr() {
        ExitCode::GeneralError
    } else {
        ExitCode::Success
    }
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let formatter = Formatter::new(cli.output_config());

    let name = match required_profile(&cli) {
        Ok(name) => name,
        Err(e) => return fail(&formatter, &e),
    };

    let profile = match ProfileLoader::with_path(&cli.config).load(name) {
        Ok(p) => p,
        Err(e) => return fail(&formatter, &e),
    };

    let client = match S3Client::new(&profile).await {
        Ok(c) => c,
        Err(e) => return fail(&formatter, &e),
    };

    run(cli.command, &client, &formatter).await
}

/// Profile named on the command line
///
/// clap cannot require a global flag, so presence is checked here, before the
/// config file is touched.
fn required_profile(cli: &Cli) -> Result<&str, Error> {
    cli.profile
        .as_deref()
        .ok_or_else(|| Error::Config("the profile flag -p/--profile is required".into()))
}

/// Run one command against a store
pub async fn run(command: Commands, store: &dyn BucketStore, formatter: &Formatter) -> ExitCode {
    let result = match command {
        Commands::PutPolicy(args) => policy::put(args, store, formatter).await,
        Commands::GetPolicy(args) => policy::get(args, store, formatter).await,
        Commands::DelPolicy(args) => policy::delete(args, store, formatter).await,
        Commands::ListBuckets => bucket::list(store, formatter).await,
        Commands::CreateBucket(args) => bucket::create(args, store, formatter).await,
        Commands::DelBucket(args) => bucket::delete(args, store, formatter).await,
        Commands::GetBucketAcl(args) => acl::get(args, store, formatter).await,
        Commands::GetCors(args) => cors::get(args, store, formatter).await,
        Commands::PutCors(args) => cors::put(args, store, formatter).await,
        Commands::DelCors(args) => cors::delete(args, store, formatter).await,
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(e) => fail(formatter, &e),
    }
}

fn fail(formatter: &Formatter, err: &Error) -> ExitCode {
    tracing::debug!(error = ?err, config = err.is_config(), "Command failed");
    formatter.error(&err.to_string());
    ExitCode::from(err)
}

/// Status line emitted in JSON mode by commands that change a bucket
#[derive(Debug, serde::Serialize)]
struct StatusOutput<'a> {
    status: &'static str,
    action: &'static str,
    bucket: &'a str,
}

impl<'a> StatusOutput<'a> {
    fn success(action: &'static str, bucket: &'a str) -> Self {
        Self {
            status: "success",
            action,
            bucket,
        }
    }
}

/// Report a completed change in the active output format
fn report_success(formatter: &Formatter, action: &'static str, bucket: &str, message: &str) {
    if formatter.is_json() {
        formatter.json(&StatusOutput::success(action, bucket));
    } else {
        formatter.success(message);
    }
}
