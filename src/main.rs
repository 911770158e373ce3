//! Driver: parse arguments, acquire the module, invoke the engine.

use std::env;
use std::io;
use std::process::ExitCode;

use anyhow::Context;
use modval::cli::{self, EXIT_SUCCESS, ParseOutcome};
use modval::config::RunConfig;
use modval::diag::StreamSink;
use modval::engine::{BaselineEngine, ValidationEngine};
use modval::input;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match cli::parse_arguments(&args) {
        ParseOutcome::Continue(config) => config,
        ParseOutcome::ShowUsage(code) => {
            print!("{}", cli::usage_text());
            return exit_code(code);
        }
        ParseOutcome::ShowVersion => {
            print!("{}", cli::version_text());
            return ExitCode::SUCCESS;
        }
        ParseOutcome::Fail(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Read the module and run the single validation pass.
fn run(config: &RunConfig) -> anyhow::Result<bool> {
    let words = input::read_words(&config.input)
        .with_context(|| format!("failed to read input from {}", config.input))?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut sink = StreamSink::new(stdout.lock(), stderr.lock());
    Ok(BaselineEngine.validate(&words, config.target_env, &config.options, &mut sink))
}

fn exit_code(code: i32) -> ExitCode {
    if code == EXIT_SUCCESS {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
