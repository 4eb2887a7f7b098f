//! Command-line front end for league bracket and Swiss pairing.
//!
//! Reads participants and match history from a JSON event file, runs the
//! pairing library, and prints the result to stdout.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;

use anyhow::{Error, bail};
use pico_args::Arguments;

use commands::Command;
use config::{CliConfig, CliOverrides, OutputFormat};

const HELP: &str = "\
Generate tournament brackets and Swiss pairings

USAGE:
  lp_cli <COMMAND> [OPTIONS]

COMMANDS:
  bracket <N>                 Single-elimination bracket for N participants
  swiss-round1 --input FILE   Round-1 Swiss pairings
  swiss-standings --input FILE
                              Ranked Swiss standings from the match history
  swiss-next --input FILE     Next Swiss round pairings

OPTIONS:
  --input          FILE       Event file: {\"participants\": [...], \"matches\": [...]}
  --output         FORMAT     json or text  [default: env LP_OUTPUT or json]
  --shuffle-seed   N          Shuffle round-1 order with this seed

FLAGS:
  --strict                    Reject inconsistent match history instead of skipping it
  -h, --help                  Print help information

ENVIRONMENT:
  LP_OUTPUT                   Output format (json, text)
  LP_ROUND1_ORDER             Round-1 order (name, shuffle)
  LP_SHUFFLE_SEED             Seed for shuffled round-1 order
  LP_STRICT                   Validate match history (true, false)
  RUST_LOG                    Log filter, logs are written to stderr
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    logging::init();

    let overrides = CliOverrides {
        output: pargs.opt_value_from_str::<_, OutputFormat>("--output")?,
        shuffle_seed: pargs.opt_value_from_str("--shuffle-seed")?,
        strict: pargs.contains("--strict"),
    };
    let config = CliConfig::from_env(overrides)?;

    let command = parse_command(&mut pargs)?;

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        tracing::warn!("Ignoring unused arguments: {:?}", remaining);
    }

    tracing::debug!(?command, ?config, "Running command");
    let output = commands::run(&command, &config)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn parse_command(pargs: &mut Arguments) -> Result<Command, Error> {
    let Some(name) = pargs.subcommand()? else {
        bail!("No command given, see --help");
    };

    let command = match name.as_str() {
        "bracket" => Command::Bracket {
            participants: pargs.free_from_str()?,
        },
        "swiss-round1" => Command::SwissRound1 {
            input: required_input(pargs)?,
        },
        "swiss-standings" => Command::SwissStandings {
            input: required_input(pargs)?,
        },
        "swiss-next" => Command::SwissNext {
            input: required_input(pargs)?,
        },
        other => bail!("Unknown command '{other}', see --help"),
    };

    Ok(command)
}

fn required_input(pargs: &mut Arguments) -> Result<PathBuf, Error> {
    Ok(pargs.value_from_str("--input")?)
}
