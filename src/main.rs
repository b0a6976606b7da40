mod adapters;
mod application;
mod cli;
mod config;
mod interface_generation;
mod ports;
mod shared;

use adapters::outbound::console::{StderrProgressReporter, StdinConsole};
use adapters::outbound::filesystem::{FileSystemReader, FileSystemStore};
use application::dto::GenerationRequest;
use application::use_cases::GenerateInterfaceUseCase;
use cli::Args;
use shared::error::{ExitCode, GeneratorError};
use shared::Result;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;

const OPEN_FAILURE_MESSAGE: &str = "Error: Failed to open file.";

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        let exit_code = exit_code_for(&e);
        if exit_code == ExitCode::InvocationError {
            eprintln!("{}", OPEN_FAILURE_MESSAGE);
        }
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code.as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let Some(source_path) = args.input else {
        eprintln!("{}", OPEN_FAILURE_MESSAGE);
        process::exit(ExitCode::InvocationError.as_i32());
    };

    // An unreadable source outranks a broken config file
    let source_reader = FileSystemReader::new();
    source_reader.check(&source_path)?;

    let base_config = config::resolve_base_config(args.config.as_deref(), Path::new("."))?;

    // Create adapters (Dependency Injection)
    let console = StdinConsole::stdio();
    let file_store = FileSystemStore::new(args.output_dir);
    let progress_reporter = if io::stderr().is_terminal() {
        StderrProgressReporter::new()
    } else {
        StderrProgressReporter::plain()
    };

    let use_case =
        GenerateInterfaceUseCase::new(source_reader, console, file_store, progress_reporter);

    let request = GenerationRequest::new(source_path, base_config, args.defaults);
    use_case.execute(request)?;

    Ok(())
}

/// Maps a failed run to the process exit code
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<GeneratorError>() {
        Some(e) if e.is_invocation_error() => ExitCode::InvocationError,
        _ => ExitCode::ApplicationError,
    }
}
