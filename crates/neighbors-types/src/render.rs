//! Plain-text rendering of a lookup, one line per neighbor.
//!
//! ```rust
//! use neighbors_types::render::render_heading;
//!
//! assert_eq!(render_heading(None), "Awaiting input...");
//! assert_eq!(render_heading(Some("Utah")), "The neighboring states of **Utah** are:");
//! ```

use std::fmt;

use neighbors_core::{decode::Decoded, error::Result};

use crate::outputs::neighbor::NeighborRecord;

/// Title line shown above the results.
pub fn render_heading(users_state: Option<&str>) -> String {
    match users_state.map(str::trim).filter(|s| !s.is_empty()) {
        Some(state) => format!("The neighboring states of **{state}** are:"),
        None => "Awaiting input...".to_owned(),
    }
}

/// A single record described relative to the state the user asked about.
///
/// Renders as e.g. `Nevada, located to the west of California, share a
/// border 137 miles long.`
#[derive(Debug, Clone, Copy)]
pub struct NeighborLine<'a> {
    pub record: &'a NeighborRecord,
    pub origin: &'a str,
}

impl fmt::Display for NeighborLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.record;
        write!(
            f,
            "{}, located to the {} of {}",
            record.name(),
            record.direction(),
            self.origin
        )?;
        if let Some(population) = record.population() {
            write!(f, ", population {population}")?;
        }
        if let Some(miles) = record.shared_border_length_miles() {
            write!(f, ", share a border {miles} miles long")?;
        }
        f.write_str(".")
    }
}

/// Everything the user sees for one lookup: the heading, then either one
/// line per valid record or a notice when the reply couldn't be read.
pub fn render_outcome(
    users_state: Option<&str>,
    outcome: &Result<Decoded<NeighborRecord>>,
) -> Vec<String> {
    let mut lines = vec![render_heading(users_state)];
    let origin = users_state.map(str::trim).unwrap_or_default();

    match outcome {
        Ok(decoded) => {
            lines.extend(
                decoded
                    .records
                    .iter()
                    .map(|record| NeighborLine { record, origin }.to_string()),
            );
            match decoded.rejected.len() {
                0 => {}
                1 => lines.push("(1 entry in the answer could not be read and was skipped)".into()),
                n => lines.push(format!(
                    "({n} entries in the answer could not be read and were skipped)"
                )),
            }
        }
        Err(err) => lines.push(format!("Could not read the model's answer: {err}")),
    }

    lines
}

#[cfg(test)]
mod tests {
    use neighbors_core::{
        decode::ResponseDecoder,
        error::{DecodeError, NeighborsError},
    };

    use super::*;
    use crate::outputs::neighbor::NeighborSchema;

    fn decode(schema: NeighborSchema, payload: &str) -> Result<Decoded<NeighborRecord>> {
        Ok(ResponseDecoder::new(schema.record_schema()).decode(Some(payload))?)
    }

    #[test]
    fn renders_border_length_line() {
        let outcome = decode(
            NeighborSchema::BorderLength,
            r#"[{"state_name":"Nevada","direction":"west","shared_border_length_miles":137.5}]"#,
        );

        let lines = render_outcome(Some("California"), &outcome);

        assert_eq!(
            lines,
            vec![
                "The neighboring states of **California** are:".to_owned(),
                "Nevada, located to the west of California, share a border 137 miles long."
                    .to_owned(),
            ]
        );
    }

    #[test]
    fn renders_population_line() {
        let outcome = decode(
            NeighborSchema::Population,
            r#"[{"state_name":"Oregon","population":"4.2 million","direction":"north"}]"#,
        );

        let lines = render_outcome(Some("California"), &outcome);

        assert_eq!(
            lines[1],
            "Oregon, located to the north of California, population 4.2 million."
        );
    }

    #[test]
    fn notes_skipped_entries() {
        let outcome = decode(
            NeighborSchema::Direction,
            r#"[{"state_name":"Texas","direction":"south"}, {"direction":"north"}]"#,
        );

        let lines = render_outcome(Some("Oklahoma"), &outcome);

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Texas, located to the south"));
        assert!(lines[2].starts_with("(1 entry "));
    }

    #[test]
    fn failed_decode_shows_no_records() {
        let outcome: Result<Decoded<NeighborRecord>> = Err(NeighborsError::Decode(
            DecodeError::SchemaMismatch { found: "an object" },
        ));

        let lines = render_outcome(Some("Utah"), &outcome);

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Could not read the model's answer"));
    }

    #[test]
    fn awaiting_input_without_state() {
        let lines = render_outcome(None, &Ok(Decoded::default()));
        assert_eq!(lines, vec!["Awaiting input...".to_owned()]);
    }
}
