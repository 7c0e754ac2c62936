use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use retype::cli::Cli;
use retype::config::Config;
use retype::error::RetypeError;
use retype::formatter::format_record;
use retype::parser::LineParser;

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior so upstream writers get a clean
    // SIGPIPE signal instead of a BrokenPipeError when retype exits early.
    reset_sigpipe();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("retype: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), RetypeError> {
    let config = Config::from_cli(cli)?;

    if cli.check {
        println!("{}", config.summary());
        return Ok(());
    }

    let parser = LineParser::new(&config)?;
    let modifier = config.modifier();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let mut line_buf = String::new();

    for line_result in stdin.lock().lines() {
        let line = match line_result {
            Ok(l) => l,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => continue,
            Err(e) => return Err(e.into()),
        };

        let Some(mut record) = parser.parse(&line, jiff::Timestamp::now().as_second()) else {
            continue;
        };
        modifier.modify(&mut record);

        if let Err(e) = format_record(&record, &mut line_buf) {
            tracing::warn!(error = %e, "dropping record that cannot be serialized");
            continue;
        }

        if let Err(e) = writeln!(writer, "{line_buf}") {
            return ignore_broken_pipe(e);
        }
    }

    writer.flush().or_else(ignore_broken_pipe)
}

/// A closed downstream ends the stream quietly; any other I/O error is fatal.
fn ignore_broken_pipe(e: io::Error) -> Result<(), RetypeError> {
    if e.kind() == io::ErrorKind::BrokenPipe {
        Ok(())
    } else {
        Err(RetypeError::Io(e))
    }
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Reset SIGPIPE to the default (terminate) behavior.
///
/// By default, Rust ignores SIGPIPE to surface `BrokenPipe` I/O errors.
/// For a filter like `retype`, this causes the *upstream* writer to receive
/// a `BrokenPipeError` when `retype` exits. Restoring `SIG_DFL` lets the OS
/// handle the signal normally.
#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}
