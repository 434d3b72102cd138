//! Binary entry point for the `qingcloud` CLI.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use qingcloud::{ConfigError, QingCloudConfig, QingCloudError, QingCloudService, registry};

mod cli;

use cli::{CallCommand, Cli};

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid --input JSON: {0}")]
    Input(String),
    #[error(transparent)]
    Api(#[from] QingCloudError),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    let exit_code = match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err);
            1
        }
    };

    process::exit(exit_code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

async fn dispatch(cli: Cli) -> Result<(), CliError> {
    match cli {
        Cli::Actions => list_actions(io::stdout()),
        Cli::Call(command) => call(command).await,
    }
}

fn list_actions(mut target: impl Write) -> Result<(), CliError> {
    for action in registry::ACTIONS {
        writeln!(target, "{action}")?;
    }
    Ok(())
}

async fn call(command: CallCommand) -> Result<(), CliError> {
    let input = parse_input(command.input.as_deref())?;
    if !registry::ACTIONS.contains(&command.action.as_str()) {
        return Err(QingCloudError::UnknownAction(command.action).into());
    }

    let config = QingCloudConfig::load_without_cli_args()?;
    let service = QingCloudService::new(config)?;
    let output = registry::invoke(&service, &command.zone, &command.action, input).await?;
    write_output(io::stdout(), &output)
}

fn parse_input(raw: Option<&str>) -> Result<Value, CliError> {
    raw.map_or(Ok(Value::Null), |text| {
        serde_json::from_str(text).map_err(|err| CliError::Input(err.to_string()))
    })
}

fn write_output(mut target: impl Write, output: &Value) -> Result<(), CliError> {
    let rendered =
        serde_json::to_string_pretty(output).map_err(|err| CliError::Output(err.into()))?;
    writeln!(target, "{rendered}")?;
    Ok(())
}

fn report_error(err: &CliError) {
    write_error(io::stderr(), err);
}

fn write_error(mut target: impl Write, err: &CliError) {
    writeln!(target, "{err}").ok();
}
