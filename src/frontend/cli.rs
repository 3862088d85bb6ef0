use std::io;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};
use log::error;

use crate::backend::frequency::Hertz;
use crate::frontend::logger::init_logger;

use args::{
    handle_arguments, output_config, ARG_BAND_NAME, ARG_CHECK, ARG_FREQUENCY,
    ARG_JSON, ARG_LIST, ARG_VERBOSE, GROUP_ACTION
};


pub use args::CliError;


mod args;


pub fn cli() -> ExitCode {
    let matches = command().get_matches();

    init_logger(output_config(&matches).verbose());

    let mut stdout = io::stdout().lock();

    match handle_arguments(&matches, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(cli_error) => {
            error!("{cli_error}");
            ExitCode::FAILURE
        }
    }
}

#[must_use]
pub fn command() -> Command {
    Command::new("wspr_bands")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Amateur radio bands and their WSPR frequencies.")
        .args([
            arg_list(),
            arg_band_name(),
            arg_frequency(),
            arg_check(),
            arg_json(),
            arg_verbose(),
        ])
        .group(
            ArgGroup::new(GROUP_ACTION)
                .args([ARG_LIST, ARG_BAND_NAME, ARG_FREQUENCY, ARG_CHECK])
                .required(true)
        )
        .arg_required_else_help(true)
}

fn arg_list() -> Arg {
    Arg::new(ARG_LIST)
        .short('l')
        .long("list")
        .action(ArgAction::SetTrue)
        .help("Print every band in the table")
}

fn arg_band_name() -> Arg {
    Arg::new(ARG_BAND_NAME)
        .short('b')
        .long("band")
        .value_name("NAME")
        .help("Print the band with this name (e.g. \"40 m\" or \"40m\")")
}

fn arg_frequency() -> Arg {
    Arg::new(ARG_FREQUENCY)
        .short('f')
        .long("freq")
        .value_name("HZ")
        .value_parser(value_parser!(Hertz))
        .help("Print the band containing this frequency (in hertz)")
}

fn arg_check() -> Arg {
    Arg::new(ARG_CHECK)
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Validate the band table")
}

fn arg_json() -> Arg {
    Arg::new(ARG_JSON)
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print bands as JSON")
}

fn arg_verbose() -> Arg {
    Arg::new(ARG_VERBOSE)
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Show full log output")
}


#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;


    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn actions_are_mutually_exclusive() {
        let result = command()
            .try_get_matches_from(["wspr_bands", "--list", "--check"]);

        assert!(
            matches!(result, Err(error) if error.kind() == ErrorKind::ArgumentConflict)
        );
    }

    #[test]
    fn json_alone_is_not_an_action() {
        let result = command().try_get_matches_from(["wspr_bands", "--json"]);

        assert!(result.is_err());
    }

    #[test]
    fn frequency_must_be_an_integer() {
        let result = command()
            .try_get_matches_from(["wspr_bands", "--freq", "7.04"]);

        assert!(result.is_err());
    }
}
