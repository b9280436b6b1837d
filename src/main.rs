use bounded_copy::{process_user_input, CopyError, CopyOutcome, CopyParams, OverflowPolicy};
use clap::{Parser, ValueEnum};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "bounded-copy")]
#[command(about = "Copy a string into a 20 byte buffer without overrunning it", long_about = None)]
#[command(version = bounded_copy::get_version())]
struct Args {
    /// String to copy into the buffer
    #[arg(allow_hyphen_values = true)]
    input_string: Option<OsString>,

    /// Anything after the first argument is ignored
    #[arg(hide = true)]
    _ignored: Vec<OsString>,

    /// What to do with input longer than 19 bytes
    #[arg(long, value_enum, default_value_t = Policy::Reject)]
    policy: Policy,
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum Policy {
    /// Refuse the input and exit with an error
    Reject,
    /// Keep the first 19 bytes and print a warning
    Truncate,
}

impl From<Policy> for OverflowPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Reject => OverflowPolicy::Reject,
            Policy::Truncate => OverflowPolicy::Truncate,
        }
    }
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|a| a.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bounded-copy".to_string())
}

#[cfg(unix)]
fn input_bytes(input: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(input.as_bytes())
}

#[cfg(not(unix))]
fn input_bytes(input: &OsStr) -> Cow<'_, [u8]> {
    match input.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

fn run(args: Args) -> Result<(), CopyError> {
    let input = args.input_string.ok_or(CopyError::MissingArgument)?;
    let params = CopyParams::new(args.policy.into());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = process_user_input(&input_bytes(&input), &params, &mut out)?;
    if let CopyOutcome::Truncated { stored, dropped } = report.outcome {
        eprintln!(
            "Warning: input truncated to {} bytes, {} bytes dropped",
            stored, dropped
        );
    }

    writeln!(out, "Program completed successfully!")?;
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(()) => {}
        Err(CopyError::MissingArgument) => {
            println!("Usage: {} <input_string>", program_name());
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
