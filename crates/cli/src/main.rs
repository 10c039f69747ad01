use std::{
    env,
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use clap::{ArgGroup, CommandFactory, Parser};
use rdslogs_aws::{AwsProvider, AwsProviderConfig};
use rdslogs_core::{
    error::{Error, Result},
    logging::init_logging,
};
use tracing::debug;

mod commands {
    pub mod list;
    pub mod log_size;
}

const PROGRAM_NAME: &str = "rds-logs-size";

const USAGE_SAMPLES: &str = "\
Usage samples:
--------------
    To list the available RDS instances ID:
        rds-logs-size --list-instances

    To get the total size of RDS database logs:
        rds-logs-size --instance-id <INSTANCE_ID>";

#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, version)]
#[command(about = "Get the total size in human readable format for a RDS database logs.", long_about = None)]
#[command(after_help = USAGE_SAMPLES)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["instance_id", "list_instances"]),
))]
struct Cli {
    #[arg(short, long, help = "A valid AWS profile name to perform the operation")]
    profile: Option<String>,

    #[arg(short, long, help = "A valid AWS region to perform the tasks")]
    region: Option<String>,

    #[arg(
        short,
        long,
        value_name = "INSTANCE_ID",
        help = "The RDS instance ID to get the database logs size"
    )]
    instance_id: Option<String>,

    #[arg(short, long, help = "List the RDS instances")]
    list_instances: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv, -vvv)")]
    verbose: u8,
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    ListInstances,
    LogSize { instance_id: String },
}

impl Cli {
    /// The `action` group guarantees exactly one of the two is set.
    fn action(&self) -> Action {
        match &self.instance_id {
            Some(instance_id) => Action::LogSize {
                instance_id: instance_id.clone(),
            },
            None => Action::ListInstances,
        }
    }

    fn provider_config(&self) -> AwsProviderConfig {
        AwsProviderConfig {
            profile: self.profile.clone(),
            region: self.region.clone(),
        }
    }
}

/// Result of argument parsing: either a command to run or an exit status
/// already decided (help, version, usage errors).
#[derive(Debug)]
enum Invocation {
    Run(Cli),
    Exit(u8),
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

fn parse_args<I, T>(
    args: I,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() <= 1 {
        writeln!(stderr, "{}", Cli::command().render_help())?;
        return Ok(Invocation::Exit(EXIT_FAILURE));
    }

    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        Err(parse_error) if parse_error.use_stderr() => {
            write!(stderr, "{parse_error}")?;
            Ok(Invocation::Exit(EXIT_FAILURE))
        }
        Err(parse_error) => {
            write!(stdout, "{parse_error}")?;
            Ok(Invocation::Exit(EXIT_SUCCESS))
        }
    }
}

/// Runs one query. Configuration errors are reported on `stderr` and turn
/// into exit status 1; any other failure is returned to the caller.
async fn execute(cli: &Cli, stdout: &mut impl Write, stderr: &mut impl Write) -> Result<u8> {
    let provider = match AwsProvider::new(&cli.provider_config()).await {
        Ok(provider) => provider,
        Err(Error::Configuration(configuration_error)) => {
            debug!(%configuration_error, "session setup rejected");
            writeln!(stderr, "{PROGRAM_NAME} error: {configuration_error}")?;
            return Ok(EXIT_FAILURE);
        }
        Err(other) => return Err(other),
    };

    match cli.action() {
        Action::ListInstances => commands::list::list_instances(&provider, stdout).await?,
        Action::LogSize { instance_id } => {
            commands::log_size::log_size(&provider, &instance_id, stdout).await?
        }
    }
    stdout.flush()?;

    Ok(EXIT_SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    // Not locked: log output shares stderr.
    let mut stderr = io::stderr();

    let cli = match parse_args(env::args_os(), &mut stdout, &mut stderr)? {
        Invocation::Run(cli) => cli,
        Invocation::Exit(status) => return Ok(ExitCode::from(status)),
    };

    init_logging(cli.verbose)?;

    let status = execute(&cli, &mut stdout, &mut stderr).await?;
    Ok(ExitCode::from(status))
}
