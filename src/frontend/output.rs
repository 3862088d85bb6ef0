use crate::backend::band::BandEntry;
use crate::backend::frequency::{format_mhz, hz_to_khz};

use super::config::OutputFormat;


const HEADER_NAME: &str  = "Band";
const HEADER_LOWER: &str = "Lower (Hz)";
const HEADER_UPPER: &str = "Upper (Hz)";
const HEADER_WIDTH: &str = "Width (kHz)";
const HEADER_WSPR: &str  = "WSPR";


/// # Errors
///
/// Will return `Err` if JSON serialization fails.
pub fn render_entries(
    entries: &[&BandEntry],
    format: OutputFormat
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(entries)),
        OutputFormat::Json => render_json(entries),
    }
}

fn render_text(entries: &[&BandEntry]) -> String {
    let mut text = format!(
        "{HEADER_NAME:<9} {HEADER_LOWER:>11} {HEADER_UPPER:>11} \
        {HEADER_WIDTH:>11}  {HEADER_WSPR}\n"
    );

    for entry in entries {
        text.push_str(
            &format!(
                "{:<9} {:>11} {:>11} {:>11}  {}\n",
                entry.name(),
                entry.lower_limit(),
                entry.upper_limit(),
                hz_to_khz(entry.width()),
                format_mhz(entry.wspr_frequency())
            )
        );
    }

    text
}

fn render_json(entries: &[&BandEntry]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');

    Ok(json)
}


#[cfg(test)]
mod tests {
    use crate::backend::band::Band;

    use super::*;


    #[test]
    fn text_output_has_header_and_aligned_rows() {
        let text = render_entries(
            &[Band::M160.entry(), Band::M2.entry()],
            OutputFormat::Text
        ).unwrap_or_else(|error| panic!("{}", error));

        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Band"));
        assert_eq!(lines[1], "160 m         1800000     2000000         200  1.838100 MHz");
        assert_eq!(lines[2], "2 m         144000000   148000000        4000  144.490500 MHz");
    }

    #[test]
    fn empty_json_output_is_an_empty_array() {
        let json = render_entries(&[], OutputFormat::Json)
            .unwrap_or_else(|error| panic!("{}", error));

        assert_eq!(json, "[]\n");
    }
}
