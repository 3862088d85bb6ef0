use std::io::{self, Write};

use clap::ArgMatches;
use log::{debug, info};
use thiserror::Error;

use crate::backend::band::{
    band_by_name, band_for_frequency, bands, validate_table, BandEntry,
    BandLookupError, BandTableError
};
use crate::backend::frequency::Hertz;
use crate::frontend::config::{OutputConfig, OutputFormat};
use crate::frontend::output::render_entries;


pub const ARG_BAND_NAME: &str = "band name";
pub const ARG_CHECK: &str     = "check table";
pub const ARG_FREQUENCY: &str = "frequency";
pub const ARG_JSON: &str      = "json output";
pub const ARG_LIST: &str      = "list bands";
pub const ARG_VERBOSE: &str   = "verbose";

pub const GROUP_ACTION: &str = "action";


#[derive(Error, Debug)]
pub enum CliError {
    #[error("Band lookup failed with error `{0}`")]
    Lookup(#[from] BandLookupError),
    #[error("Band table is invalid: {0}")]
    InvalidTable(#[from] BandTableError),
    #[error("Failed to serialize bands: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}


/// # Errors
///
/// Will return `Err` if the requested band does not exist, the table is
/// invalid or the output cannot be written.
pub fn handle_arguments<W: Write>(
    matches: &ArgMatches,
    output: &mut W
) -> Result<(), CliError> {
    let config = output_config(matches);

    if matches.get_flag(ARG_CHECK) {
        return check_table(output);
    }

    let entries: Vec<&BandEntry> = if matches.get_flag(ARG_LIST) {
        bands().iter().collect()
    } else if let Some(name) = band_name(matches) {
        let entry = band_by_name(name)
            .ok_or_else(|| BandLookupError::UnknownName(name.to_string()))?;

        vec![entry]
    } else if let Some(frequency) = frequency(matches) {
        let entry = band_for_frequency(frequency)
            .ok_or(BandLookupError::NoBandForFrequency(frequency))?;

        vec![entry]
    } else {
        return Ok(());
    };

    info!("Printing {} band(s)", entries.len());

    let rendered = render_entries(&entries, config.format())?;
    output.write_all(rendered.as_bytes())?;

    Ok(())
}

#[must_use]
pub fn output_config(matches: &ArgMatches) -> OutputConfig {
    let format = if matches.get_flag(ARG_JSON) {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    OutputConfig::new(format, matches.get_flag(ARG_VERBOSE))
}

fn check_table<W: Write>(output: &mut W) -> Result<(), CliError> {
    validate_table(bands())?;

    debug!("Validated {} bands", bands().len());
    writeln!(output, "Band table is valid ({} bands)", bands().len())?;

    Ok(())
}

fn band_name(matches: &ArgMatches) -> Option<&str> {
    matches
        .get_one::<String>(ARG_BAND_NAME)
        .map(String::as_str)
}

fn frequency(matches: &ArgMatches) -> Option<Hertz> {
    matches
        .get_one::<Hertz>(ARG_FREQUENCY)
        .copied()
}


#[cfg(test)]
mod tests {
    use crate::frontend::cli::command;

    use super::*;


    fn run(args: &[&str]) -> (Result<(), CliError>, String) {
        let matches = command()
            .try_get_matches_from(
                std::iter::once("wspr_bands").chain(args.iter().copied())
            )
            .unwrap_or_else(|error| panic!("{}", error));
        let mut output = Vec::new();

        let result = handle_arguments(&matches, &mut output);

        (result, String::from_utf8_lossy(&output).into_owned())
    }


    #[test]
    fn list_prints_every_band() {
        let (result, output) = run(&["--list"]);

        assert!(result.is_ok());
        for entry in bands() {
            assert!(output.contains(entry.name()));
        }
    }

    #[test]
    fn band_by_name_prints_single_band() {
        let (result, output) = run(&["--band", "30m"]);

        assert!(result.is_ok());
        assert!(output.contains("30 m"));
        assert!(output.contains("10.140200 MHz"));
        assert!(!output.contains("40 m"));
    }

    #[test]
    fn unknown_band_name_is_an_error() {
        let (result, output) = run(&["--band", "11m"]);

        assert!(
            matches!(
                result,
                Err(CliError::Lookup(BandLookupError::UnknownName(name)))
                    if name == "11m"
            )
        );
        assert!(output.is_empty());
    }

    #[test]
    fn frequency_outside_bands_is_an_error() {
        let (result, _) = run(&["--freq", "5000000"]);

        assert!(
            matches!(
                result,
                Err(CliError::Lookup(BandLookupError::NoBandForFrequency(
                    5_000_000
                )))
            )
        );
    }

    #[test]
    fn frequency_lookup_prints_json() {
        let (result, output) = run(&["--freq", "14097100", "--json"]);

        assert!(result.is_ok());

        let value: serde_json::Value = serde_json::from_str(&output)
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(value[0]["name"], "20 m");
        assert_eq!(value[0]["wspr_frequency"], 14_097_100);
    }

    #[test]
    fn check_reports_valid_table() {
        let (result, output) = run(&["--check"]);

        assert!(result.is_ok());
        assert_eq!(output, "Band table is valid (11 bands)\n");
    }

    #[test]
    fn output_config_from_flags() {
        let matches = command()
            .try_get_matches_from(["wspr_bands", "-l", "--json", "-v"])
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(
            output_config(&matches),
            OutputConfig::new(OutputFormat::Json, true)
        );
    }
}
