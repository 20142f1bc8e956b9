//! The record returned for every neighboring state, and the schema variants
//! that decide which attributes the model is asked for.
//!
//! Each [`NeighborSchema`] variant is a single [`RecordSchema`] declaration:
//! the same table is attached to the request as the response schema and
//! drives the decoding of the reply into [`NeighborRecord`]s.
//!
//! ```rust
//! use neighbors_core::decode::ResponseDecoder;
//! use neighbors_types::outputs::neighbor::{NeighborRecord, NeighborSchema};
//!
//! let payload = r#"[{"state_name":"Nevada","direction":"west","shared_border_length_miles":137.5}]"#;
//! let decoded = ResponseDecoder::new(NeighborSchema::BorderLength.record_schema())
//!     .decode::<NeighborRecord>(Some(payload))
//!     .unwrap();
//!
//! assert_eq!(decoded.records[0].name(), "Nevada");
//! assert_eq!(decoded.records[0].shared_border_length_miles(), Some(137));
//! ```

use std::{fmt, str::FromStr};

use neighbors_core::{
    decode::{DecodeRecord, Quantity, RecordFields},
    error::FieldError,
    schema_util::{FieldKind, FieldSpec, RecordSchema},
};

pub const STATE_NAME: &str = "state_name";
pub const DIRECTION: &str = "direction";
pub const POPULATION: &str = "population";
pub const SHARED_BORDER_LENGTH_MILES: &str = "shared_border_length_miles";

const NAME_FIELD: FieldSpec = FieldSpec::required(
    STATE_NAME,
    FieldKind::Text,
    "Name of the neighboring US state.",
);
const DIRECTION_FIELD: FieldSpec = FieldSpec::required(
    DIRECTION,
    FieldKind::Text,
    "Compass direction of the neighboring state from the requested state, e.g. north or southwest.",
);
const POPULATION_FIELD: FieldSpec = FieldSpec::optional(
    POPULATION,
    FieldKind::Quantity,
    "Population of the neighboring state.",
);
const BORDER_FIELD: FieldSpec = FieldSpec::optional(
    SHARED_BORDER_LENGTH_MILES,
    FieldKind::WholeNumber,
    "Length of the border shared with the requested state, in miles.",
);

const DIRECTION_SCHEMA: RecordSchema =
    RecordSchema::new("neighbor_direction", &[NAME_FIELD, DIRECTION_FIELD]);
const POPULATION_SCHEMA: RecordSchema = RecordSchema::new(
    "neighbor_population",
    &[NAME_FIELD, POPULATION_FIELD, DIRECTION_FIELD],
);
const BORDER_LENGTH_SCHEMA: RecordSchema = RecordSchema::new(
    "neighbor_border_length",
    &[NAME_FIELD, DIRECTION_FIELD, BORDER_FIELD],
);

/// Which attributes the model is asked to report for each neighbor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NeighborSchema {
    /// Name and direction only.
    Direction,
    /// Name, population and direction.
    #[default]
    Population,
    /// Name, direction and shared border length in miles.
    BorderLength,
}

impl NeighborSchema {
    pub const ALL: [NeighborSchema; 3] = [
        NeighborSchema::Direction,
        NeighborSchema::Population,
        NeighborSchema::BorderLength,
    ];

    pub fn record_schema(self) -> &'static RecordSchema {
        match self {
            NeighborSchema::Direction => &DIRECTION_SCHEMA,
            NeighborSchema::Population => &POPULATION_SCHEMA,
            NeighborSchema::BorderLength => &BORDER_LENGTH_SCHEMA,
        }
    }

    /// The extra attribute to ask for, phrased for the question sentence.
    pub fn attribute_clause(self, state: &str) -> Option<String> {
        match self {
            NeighborSchema::Direction => None,
            NeighborSchema::Population => Some("population of this state".to_owned()),
            NeighborSchema::BorderLength => Some(format!(
                "length in miles of the border this state shares with {state}"
            )),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            NeighborSchema::Direction => "direction",
            NeighborSchema::Population => "population",
            NeighborSchema::BorderLength => "border-length",
        }
    }
}

impl fmt::Display for NeighborSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NeighborSchema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NeighborSchema::ALL
            .into_iter()
            .find(|schema| schema.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown schema `{s}`, expected direction, population or border-length")
            })
    }
}

/// One neighboring state as reported by the model.
///
/// Only constructed by decoding; `name` and `direction` are never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRecord {
    name: String,
    direction: String,
    population: Option<Quantity>,
    shared_border_length_miles: Option<u32>,
}

impl NeighborRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    pub fn population(&self) -> Option<&Quantity> {
        self.population.as_ref()
    }

    /// Border length in whole miles, truncated toward zero.
    pub fn shared_border_length_miles(&self) -> Option<u32> {
        self.shared_border_length_miles
    }
}

impl DecodeRecord for NeighborRecord {
    fn from_fields(mut fields: RecordFields) -> Result<Self, FieldError> {
        Ok(Self {
            name: fields.text(STATE_NAME)?,
            direction: fields.text(DIRECTION)?,
            population: fields.quantity(POPULATION),
            shared_border_length_miles: fields.whole_number(SHARED_BORDER_LENGTH_MILES),
        })
    }
}
