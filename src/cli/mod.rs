//! Command-line option parsing and terminal outcome texts

use std::path::PathBuf;

use crate::config::{LimitCategory, RunConfig, TargetEnv};
use crate::input::InputSource;

/// Name the binary answers to
pub const PROGRAM: &str = "modval";

/// Exit code for successful runs and informational terminal outcomes
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for usage errors, I/O failures and failed validation
pub const EXIT_FAILURE: i32 = 1;

/// Option prefix shared by the limit-override family
const MAX_OPTION_PREFIX: &str = "--max-";

/// What the argument scan decided
#[derive(Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Scan completed; run validation with this configuration
    Continue(RunConfig),
    /// Print the usage text to standard output and exit with this code
    ShowUsage(i32),
    /// Print version and target information, exit successfully
    ShowVersion,
    /// Report a usage error on the error stream and exit with failure
    Fail(UsageError),
}

/// Usage errors detected during the argument scan
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("unrecognized option: {0}")]
    UnrecognizedOption(String),

    #[error("missing argument to {0}")]
    MissingArgument(String),

    #[error("unrecognized target environment: {0}")]
    UnknownTargetEnv(String),

    #[error("more than one input file specified")]
    DuplicateInput,
}

/// Scan the argument list (program name excluded) left to right.
///
/// One token is consumed per iteration, two where a flag takes a value. The
/// first terminal outcome wins: the function returns the instant one is
/// reached and nothing after it is examined. Options of the `--max-*` family
/// check for a following token before the name itself is recognized, so an
/// unknown `--max-*` spelling in final position reports a missing argument
/// rather than an unrecognized option.
pub fn parse_arguments(args: &[String]) -> ParseOutcome {
    let mut config = RunConfig::default();
    let mut input: Option<InputSource> = None;

    let mut argi = 0;
    while argi < args.len() {
        let arg = args[argi].as_str();
        if let Some(tail) = arg.strip_prefix('-') {
            if arg.starts_with(MAX_OPTION_PREFIX) {
                match args.get(argi + 1) {
                    None => {
                        return ParseOutcome::Fail(UsageError::MissingArgument(arg.to_string()));
                    }
                    Some(value) => {
                        let Some(category) = LimitCategory::from_option_name(arg) else {
                            return ParseOutcome::Fail(UsageError::UnrecognizedOption(
                                arg.to_string(),
                            ));
                        };
                        let Ok(limit) = value.parse::<u32>() else {
                            return ParseOutcome::Fail(UsageError::MissingArgument(
                                arg.to_string(),
                            ));
                        };
                        config.options.set_universal_limit(category, limit);
                        argi += 1;
                    }
                }
            } else if arg == "--version" {
                return ParseOutcome::ShowVersion;
            } else if arg == "--help" || arg == "-h" {
                return ParseOutcome::ShowUsage(EXIT_SUCCESS);
            } else if arg == "--target-env" {
                match args.get(argi + 1) {
                    None => {
                        return ParseOutcome::Fail(UsageError::MissingArgument(arg.to_string()));
                    }
                    Some(value) => match TargetEnv::from_name(value) {
                        Some(env) => {
                            config.target_env = env;
                            argi += 1;
                        }
                        None => {
                            return ParseOutcome::Fail(UsageError::UnknownTargetEnv(
                                value.clone(),
                            ));
                        }
                    },
                }
            } else if arg == "--relax-logical-pointer" {
                config.options.relax_logical_pointer = true;
            } else if arg == "--relax-struct-store" {
                config.options.relax_struct_store = true;
            } else if tail.is_empty() {
                // A filename of "-" names standard input.
                if let Some(outcome) = record_input(&mut input, InputSource::Stdin) {
                    return outcome;
                }
            } else {
                return ParseOutcome::ShowUsage(EXIT_FAILURE);
            }
        } else if let Some(outcome) =
            record_input(&mut input, InputSource::File(PathBuf::from(arg)))
        {
            return outcome;
        }
        argi += 1;
    }

    config.input = input.unwrap_or(InputSource::Stdin);
    ParseOutcome::Continue(config)
}

/// Record an input source, enforcing the at-most-one invariant
fn record_input(slot: &mut Option<InputSource>, source: InputSource) -> Option<ParseOutcome> {
    if slot.is_some() {
        Some(ParseOutcome::Fail(UsageError::DuplicateInput))
    } else {
        *slot = Some(source);
        None
    }
}

/// Full usage text printed for `--help` and for unrecognized flags
pub fn usage_text() -> String {
    format!(
        r#"{program} - Validate a binary module file.

USAGE: {program} [options] [<filename>]

The module binary is read from <filename>. If no file is specified,
or if the filename is "-", then the binary is read from standard input.

NOTE: The validator is a work in progress.

Options:
  -h, --help                       Print this help.
  --max-struct-members             <maximum number of structure members allowed>
  --max-struct-depth               <maximum allowed nesting depth of structures>
  --max-local-variables            <maximum number of local variables allowed>
  --max-global-variables           <maximum number of global variables allowed>
  --max-switch-branches            <maximum number of branches allowed in switch statements>
  --max-function-args              <maximum number of arguments allowed per function>
  --max-control-flow-nesting-depth <maximum control-flow nesting depth allowed>
  --max-access-chain-indexes       <maximum number of indexes allowed in access chains>
  --relax-logical-pointer          Allow allocating an object of a pointer type and returning
                                   a pointer value from a function in logical addressing mode
  --relax-struct-store             Allow store from one struct type to a
                                   different type with compatible layout and
                                   members.
  --version                        Display validator version information.
  --target-env                     {{core1.0|core1.1|core1.2|gpu1.0}}
                                   Select the validation rule dialect.
"#,
        program = PROGRAM
    )
}

/// Version identity plus the supported target environments
pub fn version_text() -> String {
    let mut text = format!("{} {}\nTargets:\n", PROGRAM, env!("CARGO_PKG_VERSION"));
    for target in TargetEnv::ALL {
        text.push_str("  ");
        text.push_str(target.description());
        text.push('\n');
    }
    text
}
