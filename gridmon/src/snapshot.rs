use indexmap::IndexMap;
use ndarray::{ArrayD, ArrayViewD, Dimension};

/// Key of the 2-D longitude field, required in the initial snapshot.
pub const LONGITUDE: &str = "longitude";

/// Key of the 2-D latitude field, required in the initial snapshot.
pub const LATITUDE: &str = "latitude";

/// Key of the 1-D hybrid sigma coordinate on interface levels, required in the initial snapshot.
pub const SIGMA_INTERFACE: &str = "atmosphere_hybrid_sigma_pressure_b_coordinate_on_interface_levels";

/// Returns whether `name` is one of the coordinate keys consumed at construction.
pub fn is_coordinate(name: &str) -> bool {
    name == LONGITUDE || name == LATITUDE || name == SIGMA_INTERFACE
}

/// One time step of model state, as handed over by a simulation stepper.
///
/// Fields are kept in insertion order so that an accumulator which tracks "everything" stores
/// variables in the order the stepper produced them.
///
#[derive(Clone, Debug)]
pub struct Snapshot<N> {
    time: i64,
    fields: IndexMap<String, ArrayD<N>>,
}

impl<N> Snapshot<N> {
    pub fn new(time: i64) -> Self {
        Self {
            time,
            fields: IndexMap::new(),
        }
    }

    pub fn with_field<S, D>(mut self, name: S, data: ndarray::Array<N, D>) -> Self
    where
        S: Into<String>,
        D: Dimension,
    {
        self.insert(name, data);
        self
    }

    /// Add or replace a field. Returns the previous field of the same name, if any.
    pub fn insert<S, D>(&mut self, name: S, data: ndarray::Array<N, D>) -> Option<ArrayD<N>>
    where
        S: Into<String>,
        D: Dimension,
    {
        self.fields.insert(name.into(), data.into_dyn())
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn get(&self, name: &str) -> Option<ArrayViewD<'_, N>> {
        self.fields.get(name).map(|field| field.view())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
