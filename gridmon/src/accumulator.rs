use indexmap::{IndexMap, IndexSet};
use ndarray::ArrayViewD;
use num_traits::Float;
use tracing::{debug, info, warn};

use crate::{
    config::AccumulatorConfig,
    coords::Coordinates,
    dataset::{Dataset, Variable},
    errors::{Error, Result},
    export::Export,
    monitor::Monitor,
    snapshot::{is_coordinate, Snapshot},
};

/// Accumulates model state snapshots into a single, time indexed dataset.
///
/// The grid (longitude, latitude and mid level coordinates) and the set of variables to track are
/// fixed when the accumulator is created from the initial snapshot. Each call to `store` then
/// appends exactly one time step. Stored time steps are never changed or removed.
///
/// `store` takes `&mut self`, so reads can't overlap a store in progress. To share an
/// accumulator between threads, wrap it in a `SharedAccumulator`.
///
#[derive(Clone, Debug)]
#[allow(clippy::len_without_is_empty)]
pub struct StateAccumulator<N> {
    dataset: Dataset<N>,
}

impl<N> StateAccumulator<N>
where
    N: Float,
{
    /// Create an accumulator whose first time step is `initial`.
    ///
    /// `initial` must contain the `longitude`, `latitude` and interface sigma coordinate fields
    /// as well as every variable to be tracked.
    ///
    pub fn new(initial: &Snapshot<N>, config: AccumulatorConfig) -> Result<Self> {
        let AccumulatorConfig {
            store_names,
            time_units,
            capacity_hint,
        } = config;

        let coordinates = Coordinates::from_snapshot(initial)?;
        let tracked: IndexSet<String> = match store_names {
            Some(names) => names.into_iter().collect(),
            None => initial
                .names()
                .filter(|name| !is_coordinate(name))
                .map(String::from)
                .collect(),
        };

        let mut variables = IndexMap::with_capacity(tracked.len());
        for name in tracked {
            let field = initial
                .get(&name)
                .ok_or_else(|| Error::MissingInitialVariable(name.clone()))?;
            let dims = coordinates
                .dims_for(&name, field.shape())
                .map_err(|err| match err {
                    Error::ShapeMismatch {
                        name,
                        expected,
                        found,
                    } => Error::InitialShapeMismatch {
                        name,
                        expected,
                        found,
                    },
                    err => err,
                })?;
            let variable = Variable::new(name.as_str(), dims, field, capacity_hint)?;
            variables.insert(name, variable);
        }

        let [levels, lats, lons] = coordinates.shape3();
        info!(
            lon = lons,
            lat = lats,
            mid_levels = levels,
            variables = ?variables.keys().collect::<Vec<_>>(),
            time = initial.time(),
            time_units = %time_units,
            "initialized state accumulator"
        );

        let dataset = Dataset::new(coordinates, initial.time(), time_units, variables);

        Ok(Self { dataset })
    }
}

impl<N> StateAccumulator<N>
where
    N: Clone,
{
    /// Append `snapshot` as a new time step.
    ///
    /// Only tracked variables are taken from the snapshot; anything else in it is ignored. If a
    /// tracked variable is missing or doesn't have the same shape it had in the initial
    /// snapshot, nothing is stored and the accumulator is left exactly as it was.
    ///
    /// Time values are stored as given. Callers are expected to supply increasing times.
    ///
    pub fn store(&mut self, snapshot: &Snapshot<N>) -> Result<()> {
        let time = snapshot.time();
        let slices = self
            .dataset
            .variables()
            .map(|variable| Self::aligned(variable, snapshot))
            .collect::<Result<Vec<_>>>()?;

        if let Some(&last) = self.dataset.time().last() {
            if time <= last {
                warn!(time, last, "stored time does not follow previous time");
            }
        }

        self.dataset.append(time, slices)?;
        debug!(time, steps = self.dataset.len(), "stored snapshot");

        Ok(())
    }

    fn aligned<'a>(variable: &Variable<N>, snapshot: &'a Snapshot<N>) -> Result<ArrayViewD<'a, N>> {
        let field = snapshot
            .get(variable.name())
            .ok_or_else(|| Error::MissingVariable {
                name: variable.name().to_string(),
                time: snapshot.time(),
            })?;
        if field.shape() != variable.slice_shape() {
            return Err(Error::ShapeMismatch {
                name: variable.name().to_string(),
                expected: variable.slice_shape().to_vec(),
                found: field.shape().to_vec(),
            });
        }

        Ok(field)
    }
}

impl<N> StateAccumulator<N> {
    /// Everything stored so far
    pub fn get_full(&self) -> &Dataset<N> {
        &self.dataset
    }

    /// The full time series of one tracked variable
    pub fn get_var(&self, name: &str) -> Result<&Variable<N>> {
        self.dataset
            .variable(name)
            .ok_or_else(|| Error::UnknownVariable(name.to_string()))
    }

    pub fn coordinates(&self) -> &Coordinates<N> {
        self.dataset.coordinates()
    }

    pub fn time(&self) -> &[i64] {
        self.dataset.time()
    }

    pub fn time_units(&self) -> &str {
        self.dataset.time_units()
    }

    /// Names of the tracked variables, in storage order
    pub fn tracked(&self) -> impl Iterator<Item = &str> {
        self.dataset.names()
    }

    /// Number of time steps stored. Never less than one.
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn export<E: Export<N>>(&self, exporter: &E) -> Result<E::Output> {
        exporter.export(&self.dataset)
    }
}

impl<N> Monitor<N> for StateAccumulator<N>
where
    N: Float,
{
    fn initialize(initial: &Snapshot<N>, config: AccumulatorConfig) -> Result<Self> {
        Self::new(initial, config)
    }

    fn store(&mut self, snapshot: &Snapshot<N>) -> Result<()> {
        StateAccumulator::store(self, snapshot)
    }
}
