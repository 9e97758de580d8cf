use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Default label for time values
pub const DEFAULT_TIME_UNITS: &str = "seconds";

/// Default number of time steps to reserve room for when starting an accumulator
pub const DEFAULT_CAPACITY_HINT: usize = 16;

/// Settings for a `StateAccumulator`.
///
/// Can be built in code or deserialized, e.g. from JSON:
///
/// ```
/// use gridmon::AccumulatorConfig;
///
/// let config = AccumulatorConfig::from_json(r#"{"store_names": ["air_temperature"]}"#).unwrap();
/// assert_eq!(config.time_units, "seconds");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulatorConfig {
    /// Names of the variables to store on every step. `None` means every field in the initial
    /// snapshot except the coordinate fields `longitude`, `latitude` and the interface sigma
    /// coordinate, which are consumed at construction and not required on later steps.
    pub store_names: Option<Vec<String>>,

    /// The units time values are expressed in. Informational only: time is stored as an integer
    /// number of these units and no conversion is performed.
    pub time_units: String,

    /// Number of time steps to reserve storage for up front. Storage still grows past this as
    /// needed.
    pub capacity_hint: usize,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            store_names: None,
            time_units: String::from(DEFAULT_TIME_UNITS),
            capacity_hint: DEFAULT_CAPACITY_HINT,
        }
    }
}

impl AccumulatorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_store_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.store_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_time_units<S: Into<String>>(mut self, time_units: S) -> Self {
        self.time_units = time_units.into();
        self
    }

    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }
}
