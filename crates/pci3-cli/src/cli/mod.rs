mod commands;
mod helpers;

use clap::Parser;
use pci3_core::domain::Pci3Error;
use tracing_subscriber::EnvFilter;

pub fn run_from_env() -> i32 {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    match parse_and_dispatch(args) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_pci3_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            eprintln!("{}", diagnostic.fatal_exit_line());
            diagnostic.exit_code()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => dispatch_parsed(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "pci3-calc",
    version,
    about = "PCI3 assembly reagent calculator"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Compute reagent pmol and stock volumes for a PCI3 batch
    Calc(commands::CalcArgs),
    /// List chemistry presets and anchoring chain constants
    Presets,
    /// List selectable proteins with their stock concentrations
    Stocks,
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Calc(args) => commands::run_calc_command(args),
        CliCommand::Presets => commands::run_presets_command(),
        CliCommand::Stocks => commands::run_stocks_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(Pci3Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn as_pci3_error(&self) -> Pci3Error {
        match self {
            Self::Usage(message) => {
                Pci3Error::input_validation("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => Pci3Error::io_system("IO.CLI", format!("{error:#}")),
        }
    }
}

impl From<Pci3Error> for CliError {
    fn from(error: Pci3Error) -> Self {
        Self::Compute(error)
    }
}
