use regfsm::{Fsm, PatternError};
use std::io::{self, Write};
use std::process::ExitCode;

const USAGE: &str = "usage: regfsm <pattern> <input>...";

#[derive(Debug)]
enum CliError {
    Usage,
    Pattern(PatternError),
    Io(io::Error),
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    match run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage) => {
            eprintln!("{}", USAGE);
            ExitCode::from(1)
        }
        Err(CliError::Pattern(err)) => {
            eprintln!("error: {}", err);
            ExitCode::from(2)
        }
        Err(CliError::Io(err)) => {
            eprintln!("error: {}", err);
            ExitCode::from(1)
        }
    }
}

/// Compile the first argument and report a verdict for every other one.
fn run(args: &[String], out: &mut impl Write) -> Result<(), CliError> {
    let [pattern, inputs @ ..] = args else {
        return Err(CliError::Usage);
    };
    if inputs.is_empty() {
        return Err(CliError::Usage);
    }

    let automaton = regfsm::compile(pattern).map_err(CliError::Pattern)?;
    log::debug!("automaton for {:?}:\n{:?}", pattern, automaton);

    for input in inputs {
        let verdict = if automaton.is_match(input) {
            "Matched"
        } else {
            "Not matched"
        };
        writeln!(out, "{}: {}", input, verdict).map_err(CliError::Io)?;
    }
    Ok(())
}
