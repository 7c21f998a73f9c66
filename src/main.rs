mod scheduler;

use clap::{ArgAction, Parser};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use env_logger::Builder;
use log::LevelFilter;
use scheduler::{simulate, SimulationConfig, SimulationError};
use std::{
    io::{self, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

/// Simulates FCFS, SJF and round robin CPU scheduling over a directive file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directive file describing the processes and the algorithm to use
    input: PathBuf,

    /// Log scheduling decisions to stderr (-v dispatches, -vv completions)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        // --help and --version
        Err(err) => err.exit(),
    };

    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SimulationError> {
    let config = SimulationConfig::from_file(&cli.input)?;
    let report = simulate(config)?;
    print!("{report}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let mut builder = Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn print_error(err: &SimulationError) {
    let message = format!("Error: {err}\n");
    let mut stderr = io::stderr();
    let _ = if stderr.is_terminal() {
        execute!(
            stderr,
            SetForegroundColor(Color::Red),
            Print(&message),
            ResetColor
        )
    } else {
        stderr.write_all(message.as_bytes())
    };
}
